//! Review Navigator for ReviewChill.
//!
//! Tracks which review card is active as explicit state, instead of scanning
//! the document for an `active` class. The page shell applies the returned
//! index to the matching card and scrolls it into view.

/// Circular next/prev walk over the page's review cards.
#[derive(Debug, Default)]
pub struct ReviewNavigator {
    card_count: usize,
    active: Option<usize>,
}

impl ReviewNavigator {
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            active: None,
        }
    }

    /// Updates the number of cards on the page. If the active card falls out
    /// of range, the selection is cleared.
    pub fn set_card_count(&mut self, card_count: usize) {
        self.card_count = card_count;
        if let Some(i) = self.active {
            if i >= card_count {
                self.active = None;
            }
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Activates the card at `index`. Returns false if out of range.
    pub fn activate(&mut self, index: usize) -> bool {
        if index >= self.card_count {
            return false;
        }
        self.active = Some(index);
        true
    }

    pub fn deactivate(&mut self) {
        self.active = None;
    }

    /// Moves to the next card, wrapping at the end. With no active card the
    /// walk starts at index 0. Returns the new active index, or `None` when
    /// there are no cards.
    pub fn next(&mut self) -> Option<usize> {
        self.step(true)
    }

    /// Moves to the previous card, wrapping at the start.
    pub fn prev(&mut self) -> Option<usize> {
        self.step(false)
    }

    fn step(&mut self, forward: bool) -> Option<usize> {
        if self.card_count == 0 {
            return None;
        }
        let next = match self.active {
            Some(i) if forward => (i + 1) % self.card_count,
            Some(i) => (i + self.card_count - 1) % self.card_count,
            None => 0,
        };
        self.active = Some(next);
        Some(next)
    }
}
