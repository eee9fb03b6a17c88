//! Declarative widgets for building HTML search forms.
//!
//! A [`SearchArray`] owns two row layouts: "browse" (the full form shown
//! when no query has been made yet) and "refine" (the compact form shown
//! alongside existing results, pre-filled from the current query). Rows
//! are spacers or ordered sequences of input fields; each field renders
//! a label cell, an input cell and an optional example cell. Rendering
//! is pure string construction, so one array can serve any number of
//! concurrent requests.

mod array;
mod fields;
mod spacer;

pub use array::{SearchArray, SearchRow};
pub use fields::{
    shared, CheckBox, FieldCore, FieldRef, SearchField, SelectBox, SkipBox, TextBox,
    TextBoxWithSelect,
};
pub use spacer::{BasicSpacer, CheckboxSpacer, Spacer};

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors raised while assembling a search form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// The name doubles as the HTML input name and the query-parameter
    /// key, so it cannot be empty.
    #[error("search field with label {label:?} has an empty name")]
    EmptyFieldName { label: String },
}

/// Current query values for a refine-mode render.
///
/// Passing `None` to the render methods selects browse mode; passing a
/// (possibly empty) context selects refine mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchContext {
    values: BTreeMap<String, String>,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from query-string pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored (name, value) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether the advanced-search toggle is switched on for this query.
    pub fn advanced_search(&self) -> bool {
        self.get("advanced_search").is_some_and(|v| !v.is_empty())
    }
}

/// Opening tag for a form table cell.
///
/// No colspan attribute is emitted when `colspan` is 1. Advanced-only
/// entries get an `advanced` class when the current render does not have
/// advanced search enabled, so client script can hide them.
pub fn open_cell(colspan: u32, advanced: bool, ctx: Option<&SearchContext>) -> String {
    let mut attrs = String::new();
    if colspan != 1 {
        attrs.push_str(&format!(" colspan={colspan}"));
    }
    if advanced && !ctx.is_some_and(SearchContext::advanced_search) {
        attrs.push_str(r#" class="advanced""#);
    }
    format!("<td{attrs}>")
}

/// Escape text destined for HTML attribute or body positions.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
