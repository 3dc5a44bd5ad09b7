//! Team repository for database operations.

use anyhow::Result;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::dto::TeamAverage;
use crate::entities::{member, team};

/// Repository for team-related database operations.
pub struct TeamRepository;

impl TeamRepository {
    /// Get all teams in name order.
    pub async fn find_all<C>(conn: &C) -> Result<Vec<team::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(team::Entity::find()
            .order_by_asc(team::Column::Name)
            .all(conn)
            .await?)
    }

    /// Get a single team by id.
    pub async fn find_by_id<C>(conn: &C, id: i64) -> Result<Option<team::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(team::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get a single team by name.
    pub async fn find_by_name<C>(conn: &C, name: &str) -> Result<Option<team::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(team::Entity::find()
            .filter(team::Column::Name.eq(name))
            .one(conn)
            .await?)
    }

    /// Members belonging to the given team, in id order.
    pub async fn members_of<C>(conn: &C, team_id: i64) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find()
            .filter(member::Column::TeamId.eq(team_id))
            .order_by_asc(member::Column::Id)
            .all(conn)
            .await?)
    }

    /// Average member age per team, for teams that have members.
    pub async fn age_averages<C>(conn: &C) -> Result<Vec<TeamAverage>>
    where
        C: ConnectionTrait,
    {
        let average: SimpleExpr =
            Func::avg(Expr::col((member::Entity, member::Column::Age))).into();

        Ok(team::Entity::find()
            .select_only()
            .column_as(team::Column::Name, "team_name")
            .column_as(average, "average_age")
            .join(JoinType::InnerJoin, team::Relation::Members.def())
            .group_by(team::Column::Name)
            .order_by_asc(team::Column::Name)
            .into_model::<TeamAverage>()
            .all(conn)
            .await?)
    }
}
