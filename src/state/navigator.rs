/// Month paging driven by horizontal drags
use super::date::{MonthDelta, MonthId};

/// Default horizontal distance (logical pixels) a drag must exceed to page
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 40.0;

/// Translate a horizontal drag displacement into a month step.
///
/// Dragging rightward (positive `dx`) reveals the previous month, dragging
/// leftward the next one. Displacements whose magnitude does not exceed
/// `threshold` are not swipes.
pub fn swipe_delta(dx: f32, threshold: f32) -> Option<MonthDelta> {
    if dx.abs() <= threshold {
        return None;
    }

    if dx > 0.0 {
        Some(MonthDelta::Previous)
    } else {
        Some(MonthDelta::Next)
    }
}

/// Holds the month currently shown by a calendar
#[derive(Debug, Clone)]
pub struct MonthNavigator {
    current: MonthId,
    threshold: f32,
}

impl MonthNavigator {
    pub fn new(current: MonthId, threshold: f32) -> Self {
        Self { current, threshold }
    }

    pub fn current(&self) -> MonthId {
        self.current
    }

    pub fn step(&mut self, delta: MonthDelta) -> MonthId {
        self.current = self.current.offset(delta);
        self.current
    }

    /// Apply a released drag. Returns the new month if the drag paged.
    pub fn on_release(&mut self, dx: f32) -> Option<MonthId> {
        let delta = swipe_delta(dx, self.threshold)?;
        let month = self.step(delta);
        tracing::debug!("📅 Swiped {:?} to {}", delta, month);
        Some(month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(month: &str) -> MonthNavigator {
        MonthNavigator::new(month.parse().unwrap(), DEFAULT_SWIPE_THRESHOLD)
    }

    #[test]
    fn test_small_drags_are_ignored() {
        for dx in [0.0, 12.5, -12.5, 40.0, -40.0] {
            assert_eq!(swipe_delta(dx, DEFAULT_SWIPE_THRESHOLD), None);
        }

        let mut nav = navigator("2024-06");
        assert_eq!(nav.on_release(40.0), None);
        assert_eq!(nav.on_release(-39.9), None);
        assert_eq!(nav.current().to_string(), "2024-06");
    }

    #[test]
    fn test_drag_direction() {
        assert_eq!(swipe_delta(40.5, 40.0), Some(MonthDelta::Previous));
        assert_eq!(swipe_delta(-120.0, 40.0), Some(MonthDelta::Next));
    }

    #[test]
    fn test_swipes_cross_year_boundary() {
        let mut nav = navigator("2024-12");
        assert_eq!(nav.on_release(-80.0).unwrap().to_string(), "2025-01");
        assert_eq!(nav.on_release(80.0).unwrap().to_string(), "2024-12");
    }

    #[test]
    fn test_custom_threshold() {
        let mut nav = MonthNavigator::new("2024-06".parse().unwrap(), 100.0);
        assert_eq!(nav.on_release(-80.0), None);
        assert_eq!(nav.on_release(-101.0).unwrap().to_string(), "2024-07");
    }
}
