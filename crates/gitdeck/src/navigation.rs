use crate::error::DeckError;

/// Bounds-clamped slide cursor for a deck of fixed length.
///
/// Every move is by exactly one slide and is a no-op at the ends; there is no
/// wraparound and no move can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    total: usize,
}

impl Navigator {
    pub fn new(name: &str, total: usize) -> Result<Self, DeckError> {
        if total == 0 {
            return Err(DeckError::Empty(name.to_string()));
        }
        Ok(Self { index: 0, total })
    }

    /// Start on `index`, clamped to the last slide.
    pub fn starting_at(name: &str, total: usize, index: usize) -> Result<Self, DeckError> {
        let mut nav = Self::new(name, total)?;
        nav.jump_to(index);
        Ok(nav)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn last_index(&self) -> usize {
        self.total - 1
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == self.last_index()
    }

    /// Advance one slide. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        let target = (self.index + 1).min(self.last_index());
        self.set(target)
    }

    /// Go back one slide. Returns whether the index changed.
    pub fn previous(&mut self) -> bool {
        let target = self.index.saturating_sub(1);
        self.set(target)
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        let target = index.min(self.last_index());
        self.set(target)
    }

    fn set(&mut self, target: usize) -> bool {
        let moved = target != self.index;
        self.index = target;
        moved
    }

    /// Fraction of the deck shown so far, `(index + 1) / total`.
    pub fn progress(&self) -> f32 {
        (self.index + 1) as f32 / self.total as f32
    }

    /// Counter text such as `01 / 17`.
    pub fn counter_label(&self) -> String {
        format!("{:02} / {}", self.index + 1, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn nav(total: usize) -> Navigator {
        Navigator::new("test", total).unwrap()
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(
            Navigator::new("blank", 0),
            Err(DeckError::Empty("blank".to_string()))
        );
    }

    #[test]
    fn next_stops_at_last_slide() {
        let mut n = nav(3);
        assert!(n.next());
        assert!(n.next());
        assert!(!n.next());
        assert_eq!(n.index(), 2);
        assert!(n.is_last());
    }

    #[test]
    fn previous_stops_at_first_slide() {
        let mut n = nav(3);
        assert!(!n.previous());
        assert_eq!(n.index(), 0);
        assert!(n.is_first());
    }

    #[test]
    fn single_slide_deck_never_moves() {
        let mut n = nav(1);
        assert!(!n.next());
        assert!(!n.previous());
        assert!(n.is_first() && n.is_last());
        assert_eq!(n.counter_label(), "01 / 1");
    }

    #[test]
    fn jump_clamps_to_last() {
        let mut n = nav(23);
        n.jump_to(99);
        assert_eq!(n.index(), 22);
        let start = Navigator::starting_at("test", 5, 40).unwrap();
        assert_eq!(start.index(), 4);
    }

    #[test]
    fn counter_is_zero_padded() {
        let n = nav(17);
        assert_eq!(n.counter_label(), "01 / 17");
        assert!((n.progress() - 1.0 / 17.0).abs() < f32::EPSILON);

        let mut n = nav(23);
        n.jump_to(22);
        assert_eq!(n.counter_label(), "23 / 23");
        assert_eq!(n.progress(), 1.0);
    }

    proptest! {
        #[test]
        fn next_never_exceeds_last(total in 1usize..64, presses in 0usize..200) {
            let mut n = nav(total);
            for _ in 0..presses {
                n.next();
                prop_assert!(n.index() <= total - 1);
            }
            prop_assert_eq!(n.index(), presses.min(total - 1));
        }

        #[test]
        fn previous_never_drops_below_zero(total in 1usize..64, presses in 0usize..200) {
            let mut n = nav(total);
            n.jump_to(total - 1);
            for _ in 0..presses {
                n.previous();
            }
            prop_assert_eq!(n.index(), (total - 1).saturating_sub(presses));
        }

        #[test]
        fn next_then_previous_is_inverse_inside(
            (total, at) in (3usize..64).prop_flat_map(|t| (Just(t), 1..t - 1))
        ) {
            let mut n = nav(total);
            n.jump_to(at);
            n.next();
            n.previous();
            prop_assert_eq!(n.index(), at);
            n.previous();
            n.next();
            prop_assert_eq!(n.index(), at);
        }

        #[test]
        fn progress_matches_position(total in 1usize..64, at in 0usize..64) {
            let mut n = nav(total);
            n.jump_to(at);
            let expected = (n.index() + 1) as f32 / total as f32;
            prop_assert!((n.progress() - expected).abs() < 1e-6);
        }
    }
}
