use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use std::path::Path;

/// Connect and bring the schema up to date. Safe to call on every process
/// start: the migration set is `if_not_exists` all the way down.
pub async fn init_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(db_url).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

/// Create the directory holding the database file, if any.
pub fn ensure_parent_dir(db_path: &str) -> std::io::Result<()> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
pub async fn test_db() -> DatabaseConnection {
    use sea_orm::ConnectOptions;

    // With a larger pool every checkout would open a fresh, empty in-memory
    // database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options)
        .await
        .expect("in-memory sqlite should connect");
    Migrator::up(&db, None)
        .await
        .expect("migrations should apply");
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = test_db().await;
        Migrator::up(&db, None)
            .await
            .expect("re-running migrations is a no-op");
    }
}
