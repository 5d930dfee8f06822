/// Index of the highlighted row in the visible window.
///
/// `None` only while nothing is visible. Every operation takes the current
/// visible count and leaves the index inside `0..visible`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    selected: Option<usize>,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(self) -> Option<usize> {
        self.selected
    }

    pub fn clamp(&mut self, visible: usize) {
        self.selected = match visible {
            0 => None,
            n => Some(self.selected.unwrap_or(0).min(n - 1)),
        };
    }

    pub fn up(&mut self, visible: usize) {
        self.clamp(visible);
        if let Some(index) = self.selected {
            self.selected = Some(index.saturating_sub(1));
        }
    }

    pub fn down(&mut self, visible: usize) {
        self.clamp(visible);
        if let Some(index) = self.selected {
            self.selected = Some((index + 1).min(visible - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_view_has_no_selection() {
        let mut cursor = SelectionCursor::new();
        cursor.clamp(0);
        assert_eq!(cursor.selected(), None);
        cursor.down(0);
        cursor.up(0);
        assert_eq!(cursor.selected(), None);
    }

    #[test]
    fn first_row_selected_once_rows_appear() {
        let mut cursor = SelectionCursor::new();
        cursor.clamp(3);
        assert_eq!(cursor.selected(), Some(0));
    }

    #[test]
    fn shrinking_view_reclamps_to_last_row() {
        let mut cursor = SelectionCursor::new();
        for _ in 0..4 {
            cursor.down(5);
        }
        assert_eq!(cursor.selected(), Some(4));

        cursor.clamp(2);
        assert_eq!(cursor.selected(), Some(1));
    }

    #[test]
    fn navigation_stops_at_edges() {
        let mut cursor = SelectionCursor::new();
        cursor.up(3);
        assert_eq!(cursor.selected(), Some(0));
        for _ in 0..10 {
            cursor.down(3);
        }
        assert_eq!(cursor.selected(), Some(2));
    }

    #[derive(Debug, Clone)]
    enum Step {
        Up,
        Down,
        Refresh(usize),
    }

    fn arb_step() -> impl Strategy<Value = Step> {
        prop_oneof![
            Just(Step::Up),
            Just(Step::Down),
            (0usize..=20).prop_map(Step::Refresh),
        ]
    }

    proptest! {
        #[test]
        fn stays_in_bounds(steps in prop::collection::vec(arb_step(), 0..64)) {
            let mut cursor = SelectionCursor::new();
            let mut visible = 0usize;
            for step in steps {
                match step {
                    Step::Up => cursor.up(visible),
                    Step::Down => cursor.down(visible),
                    Step::Refresh(n) => {
                        visible = n;
                        cursor.clamp(visible);
                    }
                }
                match cursor.selected() {
                    None => prop_assert_eq!(visible, 0),
                    Some(i) => prop_assert!(i < visible),
                }
            }
        }
    }
}
