//! Composition of rows into a rendered search form.

use std::sync::Arc;

use super::fields::FieldRef;
use super::spacer::Spacer;
use super::{FormError, SearchContext};

/// One row of a form layout.
#[derive(Clone)]
pub enum SearchRow {
    /// A layout-only filler spanning the row.
    Spacer(Spacer),
    /// An ordered sequence of fields rendered side by side.
    Fields(Vec<FieldRef>),
}

impl From<Spacer> for SearchRow {
    fn from(spacer: Spacer) -> Self {
        SearchRow::Spacer(spacer)
    }
}

impl From<super::BasicSpacer> for SearchRow {
    fn from(spacer: super::BasicSpacer) -> Self {
        SearchRow::Spacer(spacer.into())
    }
}

impl From<super::CheckboxSpacer> for SearchRow {
    fn from(spacer: super::CheckboxSpacer) -> Self {
        SearchRow::Spacer(spacer.into())
    }
}

impl From<Vec<FieldRef>> for SearchRow {
    fn from(fields: Vec<FieldRef>) -> Self {
        SearchRow::Fields(fields)
    }
}

/// A search form with distinct browse and refine layouts.
///
/// Immutable after construction. Renders take the current query as a
/// parameter and never touch the instance, so one array is built per
/// page type and shared across requests.
pub struct SearchArray {
    browse: Vec<SearchRow>,
    refine: Vec<SearchRow>,
    all_fields: Vec<FieldRef>,
}

impl std::fmt::Debug for SearchArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchArray")
            .field("browse_rows", &self.browse.len())
            .field("refine_rows", &self.refine.len())
            .field("fields", &self.all_fields.len())
            .finish()
    }
}

impl SearchArray {
    /// Assemble a form from its two layouts.
    ///
    /// Collects the distinct fields appearing in either layout (handle
    /// identity, first-seen order across browse then refine). Fails when
    /// a field has an empty name.
    pub fn new(browse: Vec<SearchRow>, refine: Vec<SearchRow>) -> Result<Self, FormError> {
        let mut all_fields: Vec<FieldRef> = Vec::new();
        for row in browse.iter().chain(refine.iter()) {
            let SearchRow::Fields(fields) = row else {
                continue;
            };
            for field in fields {
                if field.core().name.is_empty() {
                    return Err(FormError::EmptyFieldName {
                        label: field.core().label.clone(),
                    });
                }
                if !all_fields.iter().any(|seen| Arc::ptr_eq(seen, field)) {
                    all_fields.push(field.clone());
                }
            }
        }
        Ok(Self {
            browse,
            refine,
            all_fields,
        })
    }

    /// Every distinct field of either layout, in first-seen order.
    ///
    /// This is how callers enumerate the query parameters a form
    /// recognizes.
    pub fn fields(&self) -> &[FieldRef] {
        &self.all_fields
    }

    /// Render the form table: the browse layout without a context, the
    /// refine layout with one.
    ///
    /// Browse rows put label, input and (when present) example cells on
    /// one line. Refine rows stack into two table rows: all labels
    /// first, then all inputs.
    pub fn html(&self, ctx: Option<&SearchContext>) -> String {
        let mut lines: Vec<String> = Vec::new();
        match ctx {
            None => {
                for row in &self.browse {
                    match row {
                        SearchRow::Spacer(spacer) => {
                            lines.push(format!("\n      {}", spacer.html(None)));
                        }
                        SearchRow::Fields(fields) => {
                            let mut cols = Vec::new();
                            for field in fields {
                                cols.push(field.label_html(None));
                                cols.push(field.input_html(None));
                                if let Some(example) = field.example_html(None) {
                                    cols.push(example);
                                }
                            }
                            lines.push(
                                cols.iter().map(|col| format!("\n      {col}")).collect(),
                            );
                        }
                    }
                }
            }
            Some(_) => {
                for row in &self.refine {
                    match row {
                        SearchRow::Spacer(spacer) => lines.push(spacer.html(ctx)),
                        SearchRow::Fields(fields) => {
                            lines.push(
                                fields
                                    .iter()
                                    .map(|field| format!("\n      {}", field.label_html(ctx)))
                                    .collect(),
                            );
                            lines.push(
                                fields
                                    .iter()
                                    .map(|field| format!("\n      {}", field.input_html(ctx)))
                                    .collect(),
                            );
                        }
                    }
                }
            }
        }

        let body: String = lines
            .iter()
            .map(|line| format!("\n    <tr>{line}\n    </tr>"))
            .collect();
        format!("  <table border=\"0\">{body}\n  </table>")
    }
}
