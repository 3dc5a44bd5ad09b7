use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use super::db::Storage;
use crate::entities::{member, team};

impl Storage {
    /// Insert a team, returning the stored row.
    pub async fn insert_team(&self, name: &str) -> Result<team::Model> {
        let row = team::ActiveModel {
            name: ActiveValue::Set(name.to_owned()),
            ..Default::default()
        };
        Ok(row.insert(&self.conn).await?)
    }

    /// All teams in name order.
    pub async fn all_teams(&self) -> Result<Vec<team::Model>> {
        Ok(team::Entity::find()
            .order_by_asc(team::Column::Name)
            .all(&self.conn)
            .await?)
    }

    pub async fn team_by_id(&self, id: i64) -> Result<Option<team::Model>> {
        Ok(team::Entity::find_by_id(id).one(&self.conn).await?)
    }

    /// A single team by name. Returns the first match when names collide.
    pub async fn team_by_name(&self, name: &str) -> Result<Option<team::Model>> {
        Ok(team::Entity::find()
            .filter(team::Column::Name.eq(name))
            .one(&self.conn)
            .await?)
    }

    /// Members belonging to the given team, in id order.
    pub async fn team_members(&self, team_id: i64) -> Result<Vec<member::Model>> {
        Ok(member::Entity::find()
            .filter(member::Column::TeamId.eq(team_id))
            .order_by_asc(member::Column::Id)
            .all(&self.conn)
            .await?)
    }

    pub async fn count_teams(&self) -> Result<u64> {
        Ok(team::Entity::find().count(&self.conn).await?)
    }

    /// Delete a team. Its members stay and lose their team assignment.
    pub async fn delete_team(&self, id: i64) -> Result<()> {
        team::Entity::delete_by_id(id).exec(&self.conn).await?;
        Ok(())
    }
}
