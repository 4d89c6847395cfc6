#[cfg(test)]
mod tests {
    use parking_lot::{Mutex, MutexGuard};
    use pomo::db::db::Db;
    use pomo::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};
    use rusqlite::Connection;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct MigrationTestContext {
        _temp_dir: TempDir,
        _env: MutexGuard<'static, ()>,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let env = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationTestContext {
                _temp_dir: temp_dir,
                _env: env,
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert_eq!(version, MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_needs_migration(_ctx: &mut MigrationTestContext) {
        let conn = Db::new_without_migrations().unwrap();
        conn.execute(
            "CREATE TABLE IF NOT EXISTS migrations (id INTEGER PRIMARY KEY, version INTEGER NOT NULL UNIQUE, name TEXT NOT NULL, applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP)",
            [],
        )
        .unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(_ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations().unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        let names: Vec<&str> = history.iter().map(|(_, name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["create_intervals", "index_intervals_category"]);
        for (i, entry) in history.iter().enumerate() {
            assert_eq!(entry.0 as usize, i + 1);
        }
        assert!(manager.is_migration_applied(&conn, 1).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(_ctx: &mut MigrationTestContext) {
        let mut conn = Db::new_without_migrations().unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version_first = get_db_version(&conn).unwrap();
        manager.run_migrations(&mut conn).unwrap();

        assert_eq!(get_db_version(&conn).unwrap(), version_first);
        assert_eq!(manager.get_migration_history(&conn).unwrap().len(), version_first as usize);
    }

    #[test]
    fn test_intervals_schema() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('intervals') ORDER BY cid").unwrap();
        let columns: Vec<String> = stmt.query_map([], |row| row.get(0)).unwrap().collect::<Result<_, _>>().unwrap();

        assert_eq!(columns, vec!["id", "start_time", "planned_duration", "actual_duration", "category", "state"]);
    }

    #[test]
    fn test_open_in_memory_is_migrated() {
        let db = Db::open_in_memory().unwrap();
        assert!(!needs_migration(&db.conn).unwrap());
    }
}
