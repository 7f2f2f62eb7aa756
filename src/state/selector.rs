use super::date::DateId;

/// Tracks the single selected day of a calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelector {
    selected: DateId,
}

impl DateSelector {
    pub fn new(selected: DateId) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> DateId {
        self.selected
    }

    pub fn select(&mut self, date: DateId) {
        self.selected = date;
    }
}

impl Default for DateSelector {
    fn default() -> Self {
        Self::new(DateId::today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replaces_previous_date() {
        let first = DateId::from_ymd(2024, 6, 10).unwrap();
        let second = DateId::from_ymd(2024, 6, 12).unwrap();

        let mut selector = DateSelector::new(first);
        selector.select(second);

        assert_eq!(selector.selected(), second);
        assert_ne!(selector.selected(), first);
    }
}
