#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use parking_lot::{Mutex, MutexGuard};
    use pomo::db::db::DB_FILE_NAME;
    use pomo::libs::config::{Config, IntervalsConfig, StorageBackend, StorageConfig, CONFIG_FILE_NAME};
    use pomo::libs::data_storage::DataStorage;
    use pomo::libs::error::IntervalError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide, so tests that redirect it take turns
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a fresh temporary home.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        _env: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let env = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                _env: env,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.backend(), StorageBackend::Memory);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            intervals: Some(IntervalsConfig {
                pomodoro: 50,
                short_break: 10,
                long_break: 30,
            }),
            storage: Some(StorageConfig {
                backend: StorageBackend::Sqlite,
            }),
        };
        config.save().unwrap();

        assert_eq!(Config::read().unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_layout(_ctx: &mut ConfigTestContext) {
        let config = Config {
            intervals: None,
            storage: Some(StorageConfig {
                backend: StorageBackend::Sqlite,
            }),
        };
        config.save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["storage"]["backend"], "sqlite");
        assert!(json.get("intervals").is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, "{ not json").unwrap();

        let error = Config::read().unwrap_err();
        assert!(error.to_string().starts_with("❌ Failed to parse config.json"), "{error}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());

        Config::default().save().unwrap();
        assert!(Config::delete().unwrap());
        assert!(!DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap().exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_interval_config_uses_minutes(_ctx: &mut ConfigTestContext) {
        let config = Config {
            intervals: Some(IntervalsConfig {
                pomodoro: 45,
                short_break: 0,
                long_break: 20,
            }),
            storage: None,
        };

        let interval_config = config.interval_config().unwrap();
        assert_eq!(interval_config.pomodoro_duration, TimeDelta::minutes(45));
        // Zero falls back to the default
        assert_eq!(interval_config.short_break_duration, TimeDelta::minutes(5));
        assert_eq!(interval_config.long_break_duration, TimeDelta::minutes(20));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config_gives_default_durations(_ctx: &mut ConfigTestContext) {
        let interval_config = Config::default().interval_config().unwrap();
        assert_eq!(interval_config.pomodoro_duration, TimeDelta::minutes(25));
        assert_eq!(interval_config.short_break_duration, TimeDelta::minutes(5));
        assert_eq!(interval_config.long_break_duration, TimeDelta::minutes(15));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_memory_backend_starts_empty(_ctx: &mut ConfigTestContext) {
        let repo = Config::default().repository().unwrap();
        assert!(matches!(repo.last(), Err(IntervalError::NoIntervals)));
        assert!(!DataStorage::new().get_path(DB_FILE_NAME).unwrap().exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_sqlite_backend_persists_between_opens(_ctx: &mut ConfigTestContext) {
        let config = Config {
            intervals: None,
            storage: Some(StorageConfig {
                backend: StorageBackend::Sqlite,
            }),
        };

        let interval = pomo::libs::engine::get_or_create(&config.interval_config().unwrap()).unwrap();
        assert!(DataStorage::new().get_path(DB_FILE_NAME).unwrap().exists());

        let reopened = config.repository().unwrap();
        assert_eq!(reopened.last().unwrap().id, interval.id);
    }
}
