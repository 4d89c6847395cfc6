#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use pomo::libs::category::next_category;
    use pomo::libs::error::{IntervalError, Result};
    use pomo::libs::interval::Category::{LongBreak as LB, Pomodoro as P, ShortBreak as SB};
    use pomo::libs::interval::{Category, Interval};
    use pomo::libs::memory::InMemoryRepo;
    use pomo::libs::repository::Repository;

    fn history(categories: &[Category]) -> InMemoryRepo {
        let repo = InMemoryRepo::new();
        for category in categories {
            repo.create(&Interval::new(*category, TimeDelta::minutes(1))).unwrap();
        }
        repo
    }

    #[test]
    fn test_empty_history_starts_with_pomodoro() {
        assert_eq!(next_category(&history(&[])).unwrap(), P);
    }

    #[test]
    fn test_after_any_break_comes_pomodoro() {
        assert_eq!(next_category(&history(&[P, SB])).unwrap(), P);
        assert_eq!(next_category(&history(&[P, SB, P, SB, P, SB, P, LB])).unwrap(), P);
    }

    #[test]
    fn test_short_break_until_three_breaks_exist() {
        assert_eq!(next_category(&history(&[P])).unwrap(), SB);
        assert_eq!(next_category(&history(&[P, SB, P])).unwrap(), SB);
        assert_eq!(next_category(&history(&[P, SB, P, SB, P])).unwrap(), SB);
    }

    #[test]
    fn test_long_break_after_three_short_breaks() {
        assert_eq!(next_category(&history(&[P, SB, P, SB, P, SB, P])).unwrap(), LB);
    }

    #[test]
    fn test_recent_long_break_resets_to_short() {
        assert_eq!(next_category(&history(&[P, SB, P, SB, P, SB, P, LB, P])).unwrap(), SB);
        assert_eq!(next_category(&history(&[P, SB, P, SB, P, SB, P, LB, P, SB, P, SB, P])).unwrap(), SB);
        assert_eq!(next_category(&history(&[P, SB, P, SB, P, SB, P, LB, P, SB, P, SB, P, SB, P])).unwrap(), LB);
    }

    #[test]
    fn test_same_history_same_answer() {
        let repo = history(&[P, SB, P]);
        assert_eq!(next_category(&repo).unwrap(), next_category(&repo).unwrap());
    }

    struct BrokenStore;

    impl Repository for BrokenStore {
        fn create(&self, _: &Interval) -> Result<i64> {
            Err(IntervalError::InvalidState(7))
        }
        fn update(&self, _: &Interval) -> Result<()> {
            Err(IntervalError::InvalidState(7))
        }
        fn by_id(&self, _: i64) -> Result<Interval> {
            Err(IntervalError::InvalidState(7))
        }
        fn last(&self) -> Result<Interval> {
            Err(IntervalError::InvalidState(7))
        }
        fn breaks(&self, _: usize) -> Result<Vec<Interval>> {
            Err(IntervalError::InvalidState(7))
        }
    }

    #[test]
    fn test_repository_errors_propagate() {
        assert!(matches!(next_category(&BrokenStore), Err(IntervalError::InvalidState(7))));
    }
}
