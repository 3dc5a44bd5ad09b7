//! Member repository for database operations.

use anyhow::Result;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, RelationTrait, Select,
};

use crate::dto::MemberTeamRow;
use crate::entities::{member, team};
use crate::paging::{Page, PageRequest};
use crate::search::MemberSearch;

/// Repository for member-related database operations.
pub struct MemberRepository;

impl MemberRepository {
    /// Get all members in id order.
    pub async fn find_all<C>(conn: &C) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find()
            .order_by_asc(member::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get a single member by id.
    pub async fn find_by_id<C>(conn: &C, id: i64) -> Result<Option<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get every member with the given username.
    pub async fn find_by_username<C>(conn: &C, username: &str) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find()
            .filter(member::Column::Username.eq(username))
            .order_by_asc(member::Column::Id)
            .all(conn)
            .await?)
    }

    /// Dynamic search over the roster, projecting flat member/team rows.
    pub async fn search<C>(conn: &C, filter: &MemberSearch) -> Result<Vec<MemberTeamRow>>
    where
        C: ConnectionTrait,
    {
        Ok(Self::search_query(filter)
            .into_model::<MemberTeamRow>()
            .all(conn)
            .await?)
    }

    /// Dynamic search with an offset/limit window and a total count.
    ///
    /// A short first page already determines the total, so the count query
    /// only runs when the window might have cut results off. A zero page
    /// size is bumped to one.
    pub async fn search_page<C>(
        conn: &C,
        filter: &MemberSearch,
        request: PageRequest,
    ) -> Result<Page<MemberTeamRow>>
    where
        C: ConnectionTrait,
    {
        let request = PageRequest::new(request.page, request.size.max(1));
        let items = Self::search_query(filter)
            .offset(request.offset())
            .limit(request.size)
            .into_model::<MemberTeamRow>()
            .all(conn)
            .await?;

        let total = if request.page == 0 && (items.len() as u64) < request.size {
            items.len() as u64
        } else {
            Self::search_query(filter).count(conn).await?
        };

        Ok(Page::new(items, total, request))
    }

    /// Members whose age equals the roster maximum.
    pub async fn at_max_age<C>(conn: &C) -> Result<Vec<member::Model>>
    where
        C: ConnectionTrait,
    {
        let max_age = member::Entity::find()
            .select_only()
            .column_as(member::Column::Age.max(), "age")
            .into_query();

        Ok(member::Entity::find()
            .filter(member::Column::Age.in_subquery(max_age))
            .order_by_asc(member::Column::Id)
            .all(conn)
            .await?)
    }

    /// All members with their team loaded eagerly in one query.
    pub async fn with_team<C>(conn: &C) -> Result<Vec<(member::Model, Option<team::Model>)>>
    where
        C: ConnectionTrait,
    {
        Ok(member::Entity::find()
            .find_also_related(team::Entity)
            .order_by_asc(member::Column::Id)
            .all(conn)
            .await?)
    }

    fn search_query(filter: &MemberSearch) -> Select<member::Entity> {
        member::Entity::find()
            .select_only()
            .column_as(member::Column::Id, "member_id")
            .column(member::Column::Username)
            .column(member::Column::Age)
            .column(member::Column::TeamId)
            .column_as(team::Column::Name, "team_name")
            .join(JoinType::LeftJoin, member::Relation::Team.def())
            .filter(filter.condition())
            .order_by_asc(member::Column::Id)
    }
}
