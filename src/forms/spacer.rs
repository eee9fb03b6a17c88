//! Layout-only row fillers.

use super::fields::{CheckBox, SearchField};
use super::{open_cell, SearchContext};

/// A row entry that fills layout space instead of hosting a field.
#[derive(Debug, Clone)]
pub enum Spacer {
    Basic(BasicSpacer),
    Checkbox(CheckboxSpacer),
}

impl Spacer {
    pub fn html(&self, ctx: Option<&SearchContext>) -> String {
        match self {
            Spacer::Basic(spacer) => spacer.html(ctx),
            Spacer::Checkbox(spacer) => spacer.html(ctx),
        }
    }
}

impl From<BasicSpacer> for Spacer {
    fn from(spacer: BasicSpacer) -> Self {
        Spacer::Basic(spacer)
    }
}

impl From<CheckboxSpacer> for Spacer {
    fn from(spacer: CheckboxSpacer) -> Self {
        Spacer::Checkbox(spacer)
    }
}

/// A single cell spanning `colspan` columns with a literal message.
///
/// The message is site-authored and emitted raw.
#[derive(Debug, Clone)]
pub struct BasicSpacer {
    msg: String,
    colspan: u32,
    advanced: bool,
}

impl BasicSpacer {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            colspan: 1,
            advanced: false,
        }
    }

    pub fn colspan(mut self, colspan: u32) -> Self {
        self.colspan = colspan;
        self
    }

    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }

    pub fn html(&self, ctx: Option<&SearchContext>) -> String {
        format!(
            "{}{}</td>",
            open_cell(self.colspan, self.advanced, ctx),
            self.msg
        )
    }
}

/// A single cell placing a checkbox toggle inline in a row, label first.
///
/// Used e.g. for a "show advanced options" switch.
#[derive(Debug, Clone)]
pub struct CheckboxSpacer {
    checkbox: CheckBox,
    colspan: u32,
    advanced: bool,
}

impl CheckboxSpacer {
    pub fn new(checkbox: CheckBox) -> Self {
        Self {
            checkbox,
            colspan: 1,
            advanced: false,
        }
    }

    pub fn colspan(mut self, colspan: u32) -> Self {
        self.colspan = colspan;
        self
    }

    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }

    pub fn html(&self, ctx: Option<&SearchContext>) -> String {
        format!(
            "{}{} {}</td>",
            open_cell(self.colspan, self.advanced, ctx),
            self.checkbox.label_markup(ctx),
            self.checkbox.input_markup(ctx)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_spacer_spans_columns() {
        let spacer = BasicSpacer::new("Restrict by time").colspan(3);
        assert_eq!(spacer.html(None), "<td colspan=3>Restrict by time</td>");
    }

    #[test]
    fn test_checkbox_spacer_embeds_label_and_input() {
        let spacer =
            CheckboxSpacer::new(CheckBox::new("advanced_search", "Advanced options")).colspan(2);
        let html = spacer.html(None);
        assert!(html.starts_with("<td colspan=2>"));
        assert!(html.contains("Advanced options"));
        assert!(html.contains(r#"<input type="checkbox" name="advanced_search">"#));
    }

    #[test]
    fn test_advanced_spacer_hidden_until_toggled() {
        let spacer = BasicSpacer::new("extras").advanced();
        assert!(spacer.html(None).starts_with(r#"<td class="advanced">"#));
    }
}
