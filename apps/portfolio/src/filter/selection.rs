use serde::Serialize;

/// Separator used when a selection travels in a query string (`?tags=a,b`).
pub const QUERY_SEPARATOR: char = ',';

/// The tags a visitor has toggled on, in the order they were toggled.
///
/// Order only matters for display; filtering and equality treat the selection
/// as a set. Labels outside the vocabulary are kept as-is and match nothing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Selection {
    tags: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from tags in toggle order. Duplicates keep their first position.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for tag in tags {
            let tag = tag.into();
            if !selection.contains(&tag) {
                selection.tags.push(tag);
            }
        }
        selection
    }

    /// Parses the `tags` query value. Blank segments are ignored.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            None => Self::new(),
            Some(raw) => Self::from_tags(
                raw.split(QUERY_SEPARATOR)
                    .map(str::trim)
                    .filter(|t| !t.is_empty()),
            ),
        }
    }

    /// Percent-encoded `tags` value, or `None` for an empty selection.
    pub fn to_query(&self) -> Option<String> {
        if self.tags.is_empty() {
            return None;
        }
        let joined = self.tags.join(&QUERY_SEPARATOR.to_string());
        Some(urlencoding::encode(&joined).into_owned())
    }

    /// Symmetric-difference update: appends `tag` if absent, removes it if present.
    pub fn toggle(&mut self, tag: &str) {
        match self.tags.iter().position(|t| t == tag) {
            Some(idx) => {
                self.tags.remove(idx);
            }
            None => self.tags.push(tag.to_string()),
        }
    }

    /// Non-mutating form of [`Selection::toggle`].
    pub fn toggled(&self, tag: &str) -> Self {
        let mut next = self.clone();
        next.toggle(tag);
        next
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|tag| other.contains(tag))
    }
}

impl Eq for Selection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_appends_then_removes() {
        let mut sel = Selection::new();
        sel.toggle("x");
        sel.toggle("y");
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["x", "y"]);

        sel.toggle("x");
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["y"]);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let base = Selection::from_tags(["Thermal Analysis", "Blue Origin"]);
        for tag in ["Thermal Analysis", "Machine Learning", "not-a-tag"] {
            assert_eq!(base.toggled(tag).toggled(tag), base, "tag {tag}");
        }
    }

    #[test]
    fn test_retoggled_tag_moves_to_the_end() {
        let base = Selection::from_tags(["Thermal Analysis", "Blue Origin"]);
        let again = base.toggled("Thermal Analysis").toggled("Thermal Analysis");
        assert_eq!(
            again.iter().collect::<Vec<_>>(),
            vec!["Blue Origin", "Thermal Analysis"]
        );
    }

    #[test]
    fn test_equality_ignores_order_but_not_membership() {
        assert_eq!(Selection::from_tags(["a", "b"]), Selection::from_tags(["b", "a"]));
        assert_ne!(Selection::from_tags(["a", "b"]), Selection::from_tags(["a"]));
        assert_ne!(Selection::from_tags(["a"]), Selection::from_tags(["b"]));
    }

    #[test]
    fn test_toggle_unknown_tag_is_accepted() {
        let sel = Selection::new().toggled("Underwater Basket Weaving");
        assert!(sel.contains("Underwater Basket Weaving"));
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn test_from_tags_drops_duplicates() {
        let sel = Selection::from_tags(["a", "b", "a"]);
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_query_round_trip_keeps_order_and_spaces() {
        let sel = Selection::from_tags(["University of Washington", "Thermal Test"]);
        let query = sel.to_query().unwrap();
        assert_eq!(query, "University%20of%20Washington%2CThermal%20Test");

        let decoded = urlencoding::decode(&query).unwrap();
        assert_eq!(Selection::from_query(Some(&decoded)), sel);
    }

    #[test]
    fn test_from_query_ignores_blank_segments() {
        let sel = Selection::from_query(Some(" ,Blue Origin,, "));
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec!["Blue Origin"]);
        assert!(Selection::from_query(None).is_empty());
        assert!(Selection::new().to_query().is_none());
    }
}
