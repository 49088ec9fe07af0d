//! Keyboard focus ring for the directory TUI.

use crate::directory::FilterKind;

/// The area receiving keyboard input.
///
/// `Tab` cycles grade dropdown → topic dropdown → chips → results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// A dropdown button.
    Dropdown(FilterKind),
    /// The active-filter chip row.
    Chips,
    /// The results list.
    #[default]
    Results,
}

impl Focus {
    /// Returns the next area in the ring.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Dropdown(FilterKind::Grade) => Self::Dropdown(FilterKind::Topic),
            Self::Dropdown(FilterKind::Topic) => Self::Chips,
            Self::Chips => Self::Results,
            Self::Results => Self::Dropdown(FilterKind::Grade),
        }
    }

    /// Returns the previous area in the ring.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Dropdown(FilterKind::Grade) => Self::Results,
            Self::Dropdown(FilterKind::Topic) => Self::Dropdown(FilterKind::Grade),
            Self::Chips => Self::Dropdown(FilterKind::Topic),
            Self::Results => Self::Chips,
        }
    }

    /// Returns the dropdown a click on this area lands on, if any.
    #[must_use]
    pub const fn click_target(self) -> Option<FilterKind> {
        match self {
            Self::Dropdown(kind) => Some(kind),
            Self::Chips | Self::Results => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn next_visits_every_area_and_returns() {
        let mut focus = Focus::Results;
        let mut visited = Vec::new();
        for _ in 0..4 {
            focus = focus.next();
            visited.push(focus);
        }

        assert_eq!(
            visited,
            vec![
                Focus::Dropdown(FilterKind::Grade),
                Focus::Dropdown(FilterKind::Topic),
                Focus::Chips,
                Focus::Results,
            ]
        );
    }

    #[rstest]
    #[case(Focus::Results)]
    #[case(Focus::Chips)]
    #[case(Focus::Dropdown(FilterKind::Grade))]
    #[case(Focus::Dropdown(FilterKind::Topic))]
    fn previous_undoes_next(#[case] focus: Focus) {
        assert_eq!(focus.next().previous(), focus);
    }
}
