#[cfg(test)]
mod tests {
    use pomo::libs::messages::Message;
    use pomo::msg_error_anyhow;

    #[test]
    fn test_interval_messages_carry_their_values() {
        let tick = Message::IntervalTick("Pomodoro".to_string(), "01:05".to_string(), "25:00".to_string());
        assert_eq!(tick.to_string(), "Pomodoro 01:05 / 25:00");

        let paused = Message::IntervalPaused("ShortBreak".to_string(), "02:30".to_string());
        assert_eq!(paused.to_string(), "ShortBreak paused at 02:30");

        assert_eq!(Message::IntervalAlreadyRunning(3).to_string(), "Interval 3 is already running");
    }

    #[test]
    fn test_migration_messages() {
        assert_eq!(Message::RunningMigration(2, "index_intervals_category".to_string()).to_string(), "Running migration v2: index_intervals_category");
        assert_eq!(Message::MigrationsFound(2).to_string(), "Found 2 pending migration(s)");
    }

    #[test]
    fn test_error_macro_prefixes_message() {
        let error = msg_error_anyhow!(Message::NoIntervalToPause);
        assert_eq!(error.to_string(), "❌ No running interval to pause");
    }
}
