// SPDX-License-Identifier: MPL-2.0
//! Which card of the grid is highlighted.
//!
//! The selection starts empty, jumps to the middle card whenever a list is
//! delivered, and follows explicit user choices afterwards. Once set it is
//! never cleared; an empty delivery leaves it as it was.

use crate::catalog::{CardId, CardRecord};

/// Highlight state of the cards grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<CardId>,
}

/// Index of the default card for a list of `len` items.
///
/// For even lengths the lower of the two central items wins:
/// 4 items select index 1, not 2.
#[must_use]
pub fn default_index(len: usize) -> Option<usize> {
    len.checked_sub(1).map(|last| last / 2)
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the selection for a freshly delivered list.
    ///
    /// Must be called every time the list is replaced; any earlier user
    /// choice is overwritten. An empty list changes nothing.
    pub fn initialize(&mut self, cards: &[CardRecord]) {
        if let Some(card) = default_index(cards.len()).and_then(|index| cards.get(index)) {
            self.selected = Some(card.id);
        }
        tracing::debug!(count = cards.len(), selected = ?self.selected, "selection initialized");
    }

    /// Highlights `card_id`, whether or not it is part of the current list.
    pub fn select(&mut self, card_id: CardId) {
        if self.selected != Some(card_id) {
            tracing::debug!(%card_id, "card selected");
        }
        self.selected = Some(card_id);
    }

    #[must_use]
    pub fn is_selected(&self, card_id: CardId) -> bool {
        self.selected == Some(card_id)
    }

    #[must_use]
    pub fn selected(&self) -> Option<CardId> {
        self.selected
    }

    /// The highlighted record within `cards`, if it is there.
    #[must_use]
    pub fn selected_card<'a>(&self, cards: &'a [CardRecord]) -> Option<&'a CardRecord> {
        let selected = self.selected?;
        cards.iter().find(|card| card.id == selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(ids: &[u32]) -> Vec<CardRecord> {
        ids.iter()
            .map(|&id| CardRecord {
                id: CardId::new(id),
                title: format!("Card {id}"),
                description: String::new(),
                image_ref: String::new(),
                action_label: "Open".to_string(),
                action_target: format!("target-{id}"),
            })
            .collect()
    }

    #[test]
    fn default_index_picks_lower_middle() {
        assert_eq!(default_index(0), None);
        assert_eq!(default_index(1), Some(0));
        assert_eq!(default_index(2), Some(0));
        assert_eq!(default_index(3), Some(1));
        assert_eq!(default_index(4), Some(1));
        assert_eq!(default_index(5), Some(2));
    }

    #[test]
    fn starts_with_nothing_selected() {
        let selection = Selection::new();
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn initialize_selects_middle_card() {
        let mut selection = Selection::new();

        selection.initialize(&cards(&[1, 2, 3]));
        assert_eq!(selection.selected(), Some(CardId::new(2)));

        selection.initialize(&cards(&[1, 2, 3, 4, 5]));
        assert_eq!(selection.selected(), Some(CardId::new(3)));

        selection.initialize(&cards(&[1, 2, 3, 4]));
        assert_eq!(selection.selected(), Some(CardId::new(2)));
    }

    #[test]
    fn initialize_with_empty_list_keeps_previous_selection() {
        let mut selection = Selection::new();
        selection.initialize(&[]);
        assert_eq!(selection.selected(), None);

        selection.initialize(&cards(&[10, 20]));
        selection.initialize(&[]);
        assert_eq!(selection.selected(), Some(CardId::new(10)));
    }

    #[test]
    fn initialize_follows_ids_not_positions() {
        let mut selection = Selection::new();
        selection.initialize(&cards(&[42, 7, 99]));
        assert!(selection.is_selected(CardId::new(7)));
    }

    #[test]
    fn selecting_twice_equals_selecting_once() {
        let list = cards(&[1, 2, 3]);
        let mut once = Selection::new();
        once.initialize(&list);
        let mut twice = once;

        once.select(CardId::new(3));
        twice.select(CardId::new(3));
        twice.select(CardId::new(3));

        assert_eq!(twice, once);
    }

    #[test]
    fn select_is_exclusive() {
        let list = cards(&[1, 2, 3]);
        let mut selection = Selection::new();
        selection.initialize(&list);

        selection.select(CardId::new(3));

        let selected: Vec<CardId> = list
            .iter()
            .map(|card| card.id)
            .filter(|&id| selection.is_selected(id))
            .collect();
        assert_eq!(selected, vec![CardId::new(3)]);
    }

    #[test]
    fn reinitialize_overwrites_user_choice() {
        let list = cards(&[1, 2, 3]);
        let mut selection = Selection::new();
        selection.initialize(&list);
        selection.select(CardId::new(1));

        selection.initialize(&list);

        assert_eq!(selection.selected(), Some(CardId::new(2)));
    }

    #[test]
    fn selecting_unknown_id_highlights_nothing_in_list() {
        let list = cards(&[1, 2, 3]);
        let mut selection = Selection::new();
        selection.initialize(&list);

        selection.select(CardId::new(404));

        assert_eq!(selection.selected(), Some(CardId::new(404)));
        assert!(list.iter().all(|card| !selection.is_selected(card.id)));
        assert!(selection.selected_card(&list).is_none());
    }

    #[test]
    fn selected_card_returns_matching_record() {
        let list = cards(&[5, 6, 7]);
        let mut selection = Selection::new();
        selection.initialize(&list);
        assert_eq!(
            selection.selected_card(&list).map(|card| card.title.as_str()),
            Some("Card 6")
        );
    }
}
