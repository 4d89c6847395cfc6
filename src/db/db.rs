use crate::db::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "pomo.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database and brings its schema up to date.
    pub fn new() -> Result<Db> {
        let mut conn = Self::new_without_migrations()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the application database file as-is.
    pub fn new_without_migrations() -> Result<Connection> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn: Connection = Connection::open(db_file_path)?;

        Ok(conn)
    }

    /// A private, fully migrated database that disappears with the connection.
    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
