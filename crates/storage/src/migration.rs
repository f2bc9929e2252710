use sea_orm::sea_query::{ColumnDef, Table};
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::entity::preferences;
use groundlink_domain::storage::{StorageError, StorageResult};

pub async fn run_migrations(db: &DatabaseConnection) -> StorageResult<()> {
    let backend = db.get_database_backend();

    let preferences_table = Table::create()
        .if_not_exists()
        .table(preferences::Entity)
        .col(
            ColumnDef::new(preferences::Column::Key)
                .string_len(64)
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(preferences::Column::Value)
                .string()
                .not_null(),
        )
        .to_owned();

    db.execute(backend.build(&preferences_table))
        .await
        .map_err(StorageError::from_source)?;

    Ok(())
}
