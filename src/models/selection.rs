use super::Category;

/// Currently selected category card.
///
/// Holds at most one card, so at most one card can ever render as
/// selected. Reset whenever the filter panel opens or closes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySelection {
    selected: Option<Selected>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Selected {
    index: usize,
    name: String,
    query: String,
}

impl CategorySelection {
    /// Select the card at `index`, replacing any previous selection.
    pub fn select(&mut self, index: usize, category: &Category) {
        self.selected = Some(Selected {
            index,
            name: category.item_name.clone(),
            query: category.query_value().to_string(),
        });
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Index of the selected card, if any.
    pub fn index(&self) -> Option<usize> {
        self.selected.as_ref().map(|s| s.index)
    }

    /// Displayed name of the selected category, empty when nothing is selected.
    pub fn name(&self) -> &str {
        self.selected.as_ref().map_or("", |s| s.name.as_str())
    }

    /// Value to filter the market by, empty when nothing is selected.
    pub fn query_value(&self) -> &str {
        self.selected.as_ref().map_or("", |s| s.query.as_str())
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.index() == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> Category {
        Category {
            item_name: name.to_string(),
            item_photo: format!("{}.png", name),
            item_key: None,
        }
    }

    #[test]
    fn test_default_is_empty() {
        let selection = CategorySelection::default();
        assert_eq!(selection.index(), None);
        assert_eq!(selection.name(), "");
        assert_eq!(selection.query_value(), "");
    }

    #[test]
    fn test_second_select_replaces_first() {
        let cards = [category("Weapons"), category("Armor"), category("Food")];
        let mut selection = CategorySelection::default();

        selection.select(0, &cards[0]);
        selection.select(2, &cards[2]);

        assert_eq!(selection.name(), "Food");
        let marked: Vec<usize> = (0..cards.len())
            .filter(|&i| selection.is_selected(i))
            .collect();
        assert_eq!(marked, vec![2]);
    }

    #[test]
    fn test_clear() {
        let mut selection = CategorySelection::default();
        selection.select(1, &category("Armor"));
        selection.clear();
        assert_eq!(selection, CategorySelection::default());
    }

    #[test]
    fn test_query_value_prefers_key() {
        let mut selection = CategorySelection::default();
        let totems = Category {
            item_key: Some("totem".to_string()),
            ..category("Totems")
        };
        selection.select(0, &totems);
        assert_eq!(selection.name(), "Totems");
        assert_eq!(selection.query_value(), "totem");
    }
}
