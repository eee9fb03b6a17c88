//! Tests for the search-form widget library.
//!
//! Verifies the field-dedup ordering, the browse/refine layout split,
//! and the per-kind rendering rules, end to end through `SearchArray`.

use beantheory::forms::{
    shared, BasicSpacer, CheckBox, CheckboxSpacer, SearchArray, SearchContext, SearchRow,
    SelectBox, SkipBox, TextBox,
};

fn ctx(pairs: &[(&str, &str)]) -> SearchContext {
    SearchContext::from_pairs(pairs.iter().copied())
}

/// The seminar form of the landing page, rebuilt locally.
fn seminar_array() -> SearchArray {
    let speaker = shared(TextBox::new("speaker", "Speaker"));
    let title = shared(TextBox::new("title", "Title"));
    let count = shared(TextBox::new("count", "Results to display").example("50"));

    SearchArray::new(
        vec![
            SearchRow::Fields(vec![speaker.clone()]),
            SearchRow::Fields(vec![title.clone()]),
            SearchRow::Fields(vec![count.clone()]),
        ],
        vec![SearchRow::Fields(vec![speaker, title, count])],
    )
    .unwrap()
}

// ============================================================================
// field collection
// ============================================================================

#[test]
fn distinct_fields_preserve_first_seen_order() {
    let array = seminar_array();
    let names: Vec<&str> = array
        .fields()
        .iter()
        .map(|f| f.core().name.as_str())
        .collect();
    assert_eq!(names, ["speaker", "title", "count"]);
}

#[test]
fn fields_shared_between_layouts_are_not_duplicated() {
    let array = seminar_array();
    // Three fields across four rows, every one appearing in both layouts.
    assert_eq!(array.fields().len(), 3);
}

// ============================================================================
// browse vs refine layout
// ============================================================================

#[test]
fn browse_and_refine_produce_different_row_structures() {
    let array = seminar_array();
    let browse = array.html(None);
    let refine = array.html(Some(&ctx(&[])));

    // Browse: one <tr> per field row. Refine: a label row plus an input
    // row for the single refine row.
    assert_eq!(browse.matches("<tr>").count(), 3);
    assert_eq!(refine.matches("<tr>").count(), 2);
    assert_ne!(browse, refine);
}

#[test]
fn refine_mode_prefills_current_query_values() {
    let array = seminar_array();
    let html = array.html(Some(&ctx(&[("speaker", "Serre")])));
    assert!(html.contains(r#"value="Serre""#));
}

#[test]
fn prefilled_values_are_escaped() {
    let array = seminar_array();
    let html = array.html(Some(&ctx(&[("speaker", r#""><img src=x>"#)])));
    assert!(!html.contains("<img"));
    assert!(html.contains("&quot;&gt;&lt;img src=x&gt;"));
}

// ============================================================================
// per-kind rendering
// ============================================================================

#[test]
fn select_box_defaults_to_empty_value_in_browse_mode() {
    let venue = shared(SelectBox::new(
        "venue",
        "Venue",
        [("", "Any"), ("a", "Alpha")],
    ));
    let array = SearchArray::new(
        vec![SearchRow::Fields(vec![venue.clone()])],
        vec![SearchRow::Fields(vec![venue])],
    )
    .unwrap();

    let browse = array.html(None);
    assert!(browse.contains(r#"<option value="" selected>Any</option>"#));
    assert!(browse.contains(r#"<option value="a">Alpha</option>"#));

    let refine = array.html(Some(&ctx(&[("venue", "a")])));
    assert!(refine.contains(r#"<option value="a" selected>Alpha</option>"#));
    assert!(refine.contains(r#"<option value="">Any</option>"#));
}

#[test]
fn text_box_example_renders_only_when_declared() {
    let with_example = shared(TextBox::new("count", "Results").example("50"));
    let without = shared(TextBox::new("title", "Title"));
    let array = SearchArray::new(
        vec![SearchRow::Fields(vec![with_example, without])],
        vec![],
    )
    .unwrap();

    let browse = array.html(None);
    assert!(browse.contains("e.g. 50"));
    // The example-less field contributes label + input cells only:
    // 2 + 3 cells for the one browse row.
    assert_eq!(browse.matches("<td").count(), 5);
}

#[test]
fn skip_box_preserves_cell_count_parity() {
    let text = shared(TextBox::new("title", "Title"));
    let skip = shared(SkipBox::new("pad"));
    let array = SearchArray::new(
        vec![
            SearchRow::Fields(vec![shared(TextBox::new("a", "A")), text]),
            SearchRow::Fields(vec![skip, shared(TextBox::new("b", "B"))]),
        ],
        vec![],
    )
    .unwrap();

    let browse = array.html(None);
    let rows: Vec<&str> = browse.split("<tr>").skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].matches("<td").count(),
        rows[1].matches("<td").count()
    );
    assert!(browse.contains("<td></td>"));
}

#[test]
fn spacer_rows_render_inline_with_field_rows() {
    let speaker = shared(TextBox::new("speaker", "Speaker"));
    let array = SearchArray::new(
        vec![
            SearchRow::from(BasicSpacer::new("Narrow your search").colspan(2)),
            SearchRow::Fields(vec![speaker.clone()]),
        ],
        vec![
            SearchRow::from(CheckboxSpacer::new(CheckBox::new(
                "advanced_search",
                "Advanced options",
            ))),
            SearchRow::Fields(vec![speaker]),
        ],
    )
    .unwrap();

    let browse = array.html(None);
    assert!(browse.contains("<td colspan=2>Narrow your search</td>"));

    let refine = array.html(Some(&ctx(&[])));
    assert!(refine.contains(r#"<input type="checkbox" name="advanced_search">"#));
}

#[test]
fn advanced_fields_are_marked_until_toggled_on() {
    let extra = shared(TextBox::new("institution", "Institution").advanced());
    let array = SearchArray::new(
        vec![SearchRow::Fields(vec![extra.clone()])],
        vec![SearchRow::Fields(vec![extra])],
    )
    .unwrap();

    assert!(array.html(None).contains(r#"class="advanced""#));
    let toggled = array.html(Some(&ctx(&[("advanced_search", "1")])));
    assert!(!toggled.contains(r#"class="advanced""#));
}
