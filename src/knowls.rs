//! Cross-reference ("knowl") label decoration.
//!
//! Knowls are externally stored definitions expanded client-side into
//! tooltips. The front end only produces the anchor markup carrying the
//! knowl id; resolution happens in the knowledge base, which is not
//! part of this crate.

/// Decorate `label` with a link to the knowl `id`.
///
/// The label is trusted site-authored text and may itself carry markup.
pub fn display_knowl(id: &str, label: &str) -> String {
    format!(r#"<a title="{label} [{id}]" knowl="{id}" kwargs="">{label}</a>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_knowl_carries_id_and_label() {
        let html = display_knowl("seminar.speaker", "Speaker");
        assert!(html.contains(r#"knowl="seminar.speaker""#));
        assert!(html.contains(">Speaker</a>"));
    }
}
