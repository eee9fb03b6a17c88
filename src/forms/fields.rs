//! Input fields for search forms.
//!
//! Every field kind composes a [`FieldCore`] for the shared naming,
//! labelling and colspan logic and implements [`SearchField`] for its
//! own input markup.

use std::sync::Arc;

use crate::knowls::display_knowl;

use super::{html_escape, open_cell, SearchContext};

/// Shared handle to a form field.
///
/// Field identity (pointer equality) is what [`super::SearchArray`]
/// deduplicates on, so a field appearing in both layouts must be the
/// same handle, cloned.
pub type FieldRef = Arc<dyn SearchField + Send + Sync>;

/// Wrap a field for use in form rows.
pub fn shared<T: SearchField + Send + Sync + 'static>(field: T) -> FieldRef {
    Arc::new(field)
}

/// Data shared by every field kind.
#[derive(Debug, Clone)]
pub struct FieldCore {
    /// HTML input name; doubles as the default query-field key.
    pub name: String,
    /// Label shown on the browse page. Site-authored, may embed markup.
    pub label: String,
    /// Knowl id used to decorate the label with a definition link.
    pub knowl: Option<String>,
    /// Label cell span on the browse page.
    pub label_span: u32,
    /// Input cell span on the browse page.
    pub input_span: u32,
    /// Cell span used for both label and input on the refine page.
    pub short_span: u32,
    /// Compact label for the refine layout.
    pub short_label: String,
    /// Shown only when advanced-search mode is toggled on.
    pub advanced: bool,
    /// Whether this field owns a column in the example grid.
    pub example_col: bool,
    /// Backing query field.
    pub qfield: String,
}

impl FieldCore {
    /// Core with the defaults: spans `(1, 1, 1)`, `short_label` the
    /// lower-cased label, `qfield` equal to `name`.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        let name = name.into();
        let label = label.into();
        Self {
            qfield: name.clone(),
            short_label: label.to_lowercase(),
            name,
            label,
            knowl: None,
            label_span: 1,
            input_span: 1,
            short_span: 1,
            advanced: false,
            example_col: false,
        }
    }

    /// Label text for the given mode, knowl-decorated when an id is set.
    fn label_text(&self, ctx: Option<&SearchContext>) -> String {
        let label = if ctx.is_none() {
            &self.label
        } else {
            &self.short_label
        };
        match &self.knowl {
            Some(id) => display_knowl(id, label),
            None => label.clone(),
        }
    }

    fn label_span_for(&self, ctx: Option<&SearchContext>) -> u32 {
        if ctx.is_none() {
            self.label_span
        } else {
            self.short_span
        }
    }

    fn input_span_for(&self, ctx: Option<&SearchContext>) -> u32 {
        if ctx.is_none() {
            self.input_span
        } else {
            self.short_span
        }
    }
}

/// One input field of a search form.
///
/// A field renders three independently usable cells: label, input, and
/// (browse mode only) an optional example hint. `None` context selects
/// browse mode, `Some` selects refine mode.
pub trait SearchField {
    fn core(&self) -> &FieldCore;

    /// Interior markup of the input cell.
    fn input_markup(&self, ctx: Option<&SearchContext>) -> String;

    /// Interior markup of the label cell.
    fn label_markup(&self, ctx: Option<&SearchContext>) -> String {
        self.core().label_text(ctx)
    }

    fn label_html(&self, ctx: Option<&SearchContext>) -> String {
        let core = self.core();
        format!(
            "{}{}</td>",
            open_cell(core.label_span_for(ctx), core.advanced, ctx),
            self.label_markup(ctx)
        )
    }

    fn input_html(&self, ctx: Option<&SearchContext>) -> String {
        let core = self.core();
        format!(
            "{}{}</td>",
            open_cell(core.input_span_for(ctx), core.advanced, ctx),
            self.input_markup(ctx)
        )
    }

    /// Example cell, or `None` when the field owns no example column.
    ///
    /// `None` and an empty cell are distinct: a missing cell keeps the
    /// table grid aligned with rows that never had an example column.
    fn example_html(&self, _ctx: Option<&SearchContext>) -> Option<String> {
        if self.core().example_col {
            Some("<td></td>".to_string())
        } else {
            None
        }
    }
}

/// A single-line text input.
#[derive(Debug, Clone)]
pub struct TextBox {
    core: FieldCore,
    example: Option<String>,
    example_span: Option<String>,
    width: u32,
    short_width: u32,
}

impl TextBox {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(name, label),
            example: None,
            example_span: None,
            width: 15,
            short_width: 10,
        }
    }

    /// Example value, shown as the input placeholder and in the example
    /// column.
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self.core.example_col = true;
        self
    }

    /// Text for the example column when it should differ from the
    /// placeholder value.
    pub fn example_span(mut self, span: impl Into<String>) -> Self {
        self.example_span = Some(span.into());
        self.core.example_col = true;
        self
    }

    /// Reserve an (empty) example column without declaring an example.
    pub fn example_col(mut self) -> Self {
        self.core.example_col = true;
        self
    }

    pub fn knowl(mut self, id: impl Into<String>) -> Self {
        self.core.knowl = Some(id.into());
        self
    }

    pub fn short_label(mut self, label: impl Into<String>) -> Self {
        self.core.short_label = label.into();
        self
    }

    pub fn colspan(mut self, label: u32, input: u32, short: u32) -> Self {
        self.core.label_span = label;
        self.core.input_span = input;
        self.core.short_span = short;
        self
    }

    pub fn advanced(mut self) -> Self {
        self.core.advanced = true;
        self
    }

    pub fn qfield(mut self, qfield: impl Into<String>) -> Self {
        self.core.qfield = qfield.into();
        self
    }

    /// Input width (in characters) on the browse page.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Input width (in characters) on the refine page.
    pub fn short_width(mut self, width: u32) -> Self {
        self.short_width = width;
        self
    }

    fn example_text(&self) -> Option<&str> {
        self.example_span.as_deref().or(self.example.as_deref())
    }
}

impl SearchField for TextBox {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn input_markup(&self, ctx: Option<&SearchContext>) -> String {
        let mut attrs = vec![format!(r#"name="{}""#, self.core.name)];
        if let Some(example) = &self.example {
            attrs.push(format!(r#"placeholder="{}""#, html_escape(example)));
        }
        match ctx {
            None => attrs.push(format!("size={}", self.width)),
            Some(info) => {
                attrs.push(format!("size={}", self.short_width));
                if let Some(value) = info.get(&self.core.name) {
                    attrs.push(format!(r#"value="{}""#, html_escape(value)));
                }
            }
        }
        format!(r#"<input type="text" {}/>"#, attrs.join(" "))
    }

    fn example_html(&self, ctx: Option<&SearchContext>) -> Option<String> {
        if !self.core.example_col {
            return None;
        }
        match self.example_text() {
            Some(text) => Some(format!(
                r#"{}<span class="formexample">e.g. {}</span></td>"#,
                open_cell(1, self.core.advanced, ctx),
                html_escape(text)
            )),
            None => Some("<td></td>".to_string()),
        }
    }
}

/// A dropdown built from an ordered list of (value, display) pairs.
///
/// The empty-string option is the default browse-mode selection.
#[derive(Debug, Clone)]
pub struct SelectBox {
    core: FieldCore,
    options: Vec<(String, String)>,
    width: u32,
    short_width: u32,
}

impl SelectBox {
    pub fn new<V, D>(
        name: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = (V, D)>,
    ) -> Self
    where
        V: Into<String>,
        D: Into<String>,
    {
        Self {
            core: FieldCore::new(name, label),
            options: options
                .into_iter()
                .map(|(v, d)| (v.into(), d.into()))
                .collect(),
            width: 107,
            short_width: 105,
        }
    }

    pub fn knowl(mut self, id: impl Into<String>) -> Self {
        self.core.knowl = Some(id.into());
        self
    }

    pub fn short_label(mut self, label: impl Into<String>) -> Self {
        self.core.short_label = label.into();
        self
    }

    pub fn colspan(mut self, label: u32, input: u32, short: u32) -> Self {
        self.core.label_span = label;
        self.core.input_span = input;
        self.core.short_span = short;
        self
    }

    pub fn advanced(mut self) -> Self {
        self.core.advanced = true;
        self
    }

    pub fn qfield(mut self, qfield: impl Into<String>) -> Self {
        self.core.qfield = qfield.into();
        self
    }

    /// Pixel width on the browse page.
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Pixel width on the refine page.
    pub fn short_width(mut self, width: u32) -> Self {
        self.short_width = width;
        self
    }
}

impl SearchField for SelectBox {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn input_markup(&self, ctx: Option<&SearchContext>) -> String {
        let width = if ctx.is_none() {
            self.width
        } else {
            self.short_width
        };
        let current = ctx.and_then(|info| info.get(&self.core.name)).unwrap_or("");

        let mut opts = String::new();
        for (value, display) in &self.options {
            let selected = match ctx {
                None => value.is_empty(),
                Some(_) => current == value,
            };
            opts.push_str(&format!(
                "\n          <option value=\"{}\"{}>{}</option>",
                html_escape(value),
                if selected { " selected" } else { "" },
                html_escape(display)
            ));
        }

        format!(
            "<select name=\"{}\" style=\"width: {}px\">{}\n        </select>",
            self.core.name, width, opts
        )
    }
}

/// A stateless checkbox toggle; the current query is ignored.
#[derive(Debug, Clone)]
pub struct CheckBox {
    core: FieldCore,
}

impl CheckBox {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(name, label),
        }
    }

    pub fn knowl(mut self, id: impl Into<String>) -> Self {
        self.core.knowl = Some(id.into());
        self
    }

    pub fn short_label(mut self, label: impl Into<String>) -> Self {
        self.core.short_label = label.into();
        self
    }

    pub fn colspan(mut self, label: u32, input: u32, short: u32) -> Self {
        self.core.label_span = label;
        self.core.input_span = input;
        self.core.short_span = short;
        self
    }

    pub fn advanced(mut self) -> Self {
        self.core.advanced = true;
        self
    }
}

impl SearchField for CheckBox {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn input_markup(&self, _ctx: Option<&SearchContext>) -> String {
        format!(r#"<input type="checkbox" name="{}">"#, self.core.name)
    }
}

/// An invisible placeholder preserving grid alignment: empty label,
/// empty input.
#[derive(Debug, Clone)]
pub struct SkipBox {
    core: FieldCore,
}

impl SkipBox {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: FieldCore::new(name, ""),
        }
    }

    pub fn colspan(mut self, label: u32, input: u32, short: u32) -> Self {
        self.core.label_span = label;
        self.core.input_span = input;
        self.core.short_span = short;
        self
    }

    /// Reserve an (empty) example column alongside the empty cells.
    pub fn example_col(mut self) -> Self {
        self.core.example_col = true;
        self
    }

    pub fn advanced(mut self) -> Self {
        self.core.advanced = true;
        self
    }
}

impl SearchField for SkipBox {
    fn core(&self) -> &FieldCore {
        &self.core
    }

    fn label_markup(&self, _ctx: Option<&SearchContext>) -> String {
        String::new()
    }

    fn input_markup(&self, _ctx: Option<&SearchContext>) -> String {
        String::new()
    }
}

/// A text box whose label cell embeds a secondary select floated to the
/// right, for compound filters such as value + comparison operator.
#[derive(Debug, Clone)]
pub struct TextBoxWithSelect {
    text: TextBox,
    select: SelectBox,
}

impl TextBoxWithSelect {
    pub fn new(text: TextBox, select: SelectBox) -> Self {
        Self { text, select }
    }

    /// The embedded select, e.g. to register it as its own query field.
    pub fn select(&self) -> &SelectBox {
        &self.select
    }
}

impl SearchField for TextBoxWithSelect {
    fn core(&self) -> &FieldCore {
        self.text.core()
    }

    fn input_markup(&self, ctx: Option<&SearchContext>) -> String {
        self.text.input_markup(ctx)
    }

    fn label_html(&self, ctx: Option<&SearchContext>) -> String {
        let core = self.core();
        format!(
            r#"{}{}<div class="float-right">{}</div></td>"#,
            open_cell(core.label_span_for(ctx), core.advanced, ctx),
            core.label_text(ctx),
            self.select.input_markup(ctx)
        )
    }

    fn example_html(&self, ctx: Option<&SearchContext>) -> Option<String> {
        self.text.example_html(ctx)
    }
}
