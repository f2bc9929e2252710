use groundlink_domain::storage::{StorageError, StorageResult};
use sea_orm::Database;

use crate::{migration::run_migrations, SeaOrmPreferences};

#[derive(Default)]
pub struct StorageBuilder {
    database_url: Option<String>,
}

impl StorageBuilder {
    pub fn new() -> Self {
        Self { database_url: None }
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub async fn build(self) -> StorageResult<SeaOrmPreferences> {
        let url = self
            .database_url
            .ok_or_else(|| StorageError::Backend("missing database url".into()))?;
        let db = Database::connect(url)
            .await
            .map_err(StorageError::from_source)?;
        run_migrations(&db).await?;
        Ok(SeaOrmPreferences::from_connection(db))
    }
}
