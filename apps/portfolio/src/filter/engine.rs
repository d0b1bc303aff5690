//! Faceted tag filtering over a fixed catalog.
//!
//! Filtering uses AND semantics: an item is visible only when it carries every
//! selected tag. The set of tags offered for further narrowing is derived from
//! the visible items, so a chip that would empty the gallery is never shown.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::filter::selection::Selection;

/// Anything with an id and a set of classification tags.
pub trait Tagged {
    fn id(&self) -> &str;
    fn tags(&self) -> &[&str];

    fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| *t == tag)
    }
}

/// Items carrying every selected tag, in catalog order. Empty selection shows everything.
pub fn visible_items<'a, T: Tagged>(catalog: &'a [T], selection: &Selection) -> Vec<&'a T> {
    if selection.is_empty() {
        return catalog.iter().collect();
    }
    catalog
        .iter()
        .filter(|item| selection.iter().all(|tag| item.has_tag(tag)))
        .collect()
}

/// Union of the tags carried by the visible items.
pub fn available_tags<'a, T: Tagged>(visible: &[&'a T]) -> BTreeSet<&'a str> {
    visible
        .iter()
        .flat_map(|item| item.tags().iter().copied())
        .collect()
}

/// Chip order: selected tags in toggle order, then the still-available
/// unselected vocabulary tags in vocabulary order.
pub fn display_order<'a>(
    selection: &'a Selection,
    available: &BTreeSet<&str>,
    vocabulary: &[&'a str],
) -> Vec<&'a str> {
    let mut order: Vec<&'a str> = selection.iter().collect();
    order.extend(
        vocabulary
            .iter()
            .copied()
            .filter(|tag| !selection.contains(tag) && available.contains(tag)),
    );
    order
}

/// A filter chip as rendered: its label, whether it is on, and the
/// selection that clicking it would produce.
#[derive(Debug, Clone, Serialize)]
pub struct TagChip {
    pub label: String,
    pub selected: bool,
    /// Encoded `tags` query value after toggling this chip; `None` when that empties the selection.
    pub toggle_query: Option<String>,
}

/// Everything the gallery needs for one selection, derived in one place.
#[derive(Debug, Clone, Serialize)]
pub struct FacetView<'a, T> {
    pub selection: Selection,
    pub visible: Vec<&'a T>,
    pub available_tags: BTreeSet<&'a str>,
    pub chips: Vec<TagChip>,
}

impl<'a, T: Tagged> FacetView<'a, T> {
    pub fn compute(catalog: &'a [T], vocabulary: &[&str], selection: Selection) -> Self {
        let visible = visible_items(catalog, &selection);
        let available = available_tags(&visible);
        let chips = display_order(&selection, &available, vocabulary)
            .into_iter()
            .map(|tag| TagChip {
                label: tag.to_string(),
                selected: selection.contains(tag),
                toggle_query: selection.toggled(tag).to_query(),
            })
            .collect();

        tracing::debug!(
            selected = selection.len(),
            visible = visible.len(),
            "computed gallery facets"
        );
        tracing::trace!(
            ids = ?visible.iter().map(|item| item.id()).collect::<Vec<_>>(),
            "visible items"
        );

        FacetView {
            selection,
            visible,
            available_tags: available,
            chips,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        id: &'static str,
        tags: &'static [&'static str],
    }

    impl Tagged for Item {
        fn id(&self) -> &str {
            self.id
        }

        fn tags(&self) -> &[&str] {
            self.tags
        }
    }

    const VOCAB: &[&str] = &["x", "y", "z"];

    fn catalog() -> Vec<Item> {
        vec![
            Item { id: "A", tags: &["x", "y"] },
            Item { id: "B", tags: &["x"] },
            Item { id: "C", tags: &["y"] },
        ]
    }

    fn ids<T: Tagged>(items: &[&T]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    /// Every subset of the vocabulary plus one label nobody carries.
    fn all_selections() -> Vec<Selection> {
        let labels = ["x", "y", "z", "ghost"];
        (0..(1u32 << labels.len()))
            .map(|mask| {
                Selection::from_tags(
                    labels
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| mask & (1 << i) != 0)
                        .map(|(_, l)| *l),
                )
            })
            .collect()
    }

    #[test]
    fn test_worked_example_sequence() {
        let catalog = catalog();
        let mut sel = Selection::new();
        assert_eq!(ids(&visible_items(&catalog, &sel)), ["A", "B", "C"]);

        sel.toggle("x");
        assert_eq!(ids(&visible_items(&catalog, &sel)), ["A", "B"]);

        sel.toggle("y");
        assert_eq!(ids(&visible_items(&catalog, &sel)), ["A"]);

        sel.toggle("x");
        assert_eq!(sel.iter().collect::<Vec<_>>(), ["y"]);
        assert_eq!(ids(&visible_items(&catalog, &sel)), ["A", "C"]);
    }

    #[test]
    fn test_visible_items_are_exactly_supersets() {
        let catalog = catalog();
        for sel in all_selections() {
            let visible = visible_items(&catalog, &sel);
            for item in &catalog {
                let superset = sel.iter().all(|t| item.tags.contains(&t));
                let shown = visible.iter().any(|v| v.id == item.id);
                assert_eq!(shown, superset, "item {} under {:?}", item.id, sel);
            }
        }
    }

    #[test]
    fn test_unknown_tag_yields_empty_result() {
        let catalog = catalog();
        let sel = Selection::from_tags(["ghost"]);
        assert!(visible_items(&catalog, &sel).is_empty());
    }

    #[test]
    fn test_adding_a_tag_never_grows_result() {
        let catalog = catalog();
        for sel in all_selections() {
            let before = visible_items(&catalog, &sel).len();
            for tag in VOCAB.iter().filter(|t| !sel.contains(t)) {
                let after = visible_items(&catalog, &sel.toggled(tag)).len();
                assert!(after <= before, "adding {tag} to {sel:?} grew {before} -> {after}");
            }
        }
    }

    #[test]
    fn test_available_tags_never_empty_the_gallery() {
        let catalog = catalog();
        for sel in all_selections() {
            let visible = visible_items(&catalog, &sel);
            for tag in available_tags(&visible) {
                if sel.contains(tag) {
                    continue;
                }
                let narrowed = visible_items(&catalog, &sel.toggled(tag));
                assert!(!narrowed.is_empty(), "offering {tag} under {sel:?} empties gallery");
            }
        }
    }

    #[test]
    fn test_display_order_selected_first_then_vocabulary() {
        let catalog = catalog();
        let sel = Selection::from_tags(["y"]);
        let visible = visible_items(&catalog, &sel);
        let available = available_tags(&visible);
        // A and C are visible: x and y available, z carried by nothing.
        assert_eq!(display_order(&sel, &available, VOCAB), ["y", "x"]);
    }

    #[test]
    fn test_display_order_keeps_toggle_order_for_selected() {
        let catalog = catalog();
        let sel = Selection::from_tags(["y", "x"]);
        let available = available_tags(&visible_items(&catalog, &sel));
        assert_eq!(display_order(&sel, &available, VOCAB), ["y", "x"]);
    }

    #[test]
    fn test_display_order_keeps_unknown_selected_tag() {
        let catalog = catalog();
        let sel = Selection::from_tags(["ghost"]);
        let available = available_tags(&visible_items(&catalog, &sel));
        assert!(available.is_empty());
        assert_eq!(display_order(&sel, &available, VOCAB), ["ghost"]);
    }

    #[test]
    fn test_facet_view_chip_links_toggle_selection() {
        let catalog = catalog();
        let view = FacetView::compute(&catalog, VOCAB, Selection::from_tags(["x"]));

        assert_eq!(ids(&view.visible), ["A", "B"]);
        let labels: Vec<_> = view.chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["x", "y"]);

        let x = &view.chips[0];
        assert!(x.selected);
        assert_eq!(x.toggle_query, None, "deselecting the only tag clears the query");

        let y = &view.chips[1];
        assert!(!y.selected);
        assert_eq!(y.toggle_query.as_deref(), Some("x%2Cy"));
    }
}
