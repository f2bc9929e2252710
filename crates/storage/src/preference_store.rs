use groundlink_domain::storage::{PreferenceStore, StorageError, StorageResult};
use sea_orm::{sea_query::OnConflict, EntityTrait, Set};

use crate::entity::preferences;
use crate::SeaOrmPreferences;

#[async_trait::async_trait]
impl PreferenceStore for SeaOrmPreferences {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let maybe = preferences::Entity::find_by_id(key.to_owned())
            .one(self.connection())
            .await
            .map_err(StorageError::from_source)?;
        Ok(maybe.map(|model| model.value))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let active = preferences::ActiveModel {
            key: Set(key.to_owned()),
            value: Set(value.to_owned()),
        };
        preferences::Entity::insert(active)
            .on_conflict(
                OnConflict::column(preferences::Column::Key)
                    .update_column(preferences::Column::Value)
                    .to_owned(),
            )
            .exec(self.connection())
            .await
            .map_err(StorageError::from_source)?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        preferences::Entity::delete_by_id(key.to_owned())
            .exec(self.connection())
            .await
            .map_err(StorageError::from_source)?;
        Ok(())
    }
}
