use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};

use super::db::Storage;
use crate::dto::MemberTeamRow;
use crate::entities::{member, team};
use crate::paging::{Page, PageRequest};
use crate::search::MemberSearch;

impl Storage {
    /// Insert a single member, returning the stored row.
    pub async fn insert_member(
        &self,
        username: Option<&str>,
        age: i32,
        team_id: Option<i64>,
    ) -> Result<member::Model> {
        let row = member::ActiveModel {
            username: ActiveValue::Set(username.map(str::to_owned)),
            age: ActiveValue::Set(age),
            team_id: ActiveValue::Set(team_id),
            ..Default::default()
        };
        Ok(row.insert(&self.conn).await?)
    }

    /// Bulk-insert members in one statement.
    pub async fn insert_members(&self, members: Vec<member::ActiveModel>) -> Result<()> {
        if members.is_empty() {
            return Ok(());
        }
        member::Entity::insert_many(members).exec(&self.conn).await?;
        Ok(())
    }

    /// All members in id order.
    pub async fn all_members(&self) -> Result<Vec<member::Model>> {
        Ok(member::Entity::find()
            .order_by_asc(member::Column::Id)
            .all(&self.conn)
            .await?)
    }

    /// A single member by id.
    pub async fn member_by_id(&self, id: i64) -> Result<Option<member::Model>> {
        Ok(member::Entity::find_by_id(id).one(&self.conn).await?)
    }

    /// Every member carrying the given username. Usernames are not unique.
    pub async fn members_by_username(&self, username: &str) -> Result<Vec<member::Model>> {
        Ok(member::Entity::find()
            .filter(member::Column::Username.eq(username))
            .order_by_asc(member::Column::Id)
            .all(&self.conn)
            .await?)
    }

    pub async fn count_members(&self) -> Result<u64> {
        Ok(member::Entity::find().count(&self.conn).await?)
    }

    /// Dynamic roster search: every row matching the set predicates, with
    /// the owning team joined in.
    pub async fn search_members(&self, filter: &MemberSearch) -> Result<Vec<MemberTeamRow>> {
        Ok(Self::search_select(filter)
            .into_model::<MemberTeamRow>()
            .all(&self.conn)
            .await?)
    }

    /// Paged variant of [`Storage::search_members`]. A zero page size is
    /// bumped to one.
    pub async fn search_members_page(
        &self,
        filter: &MemberSearch,
        request: PageRequest,
    ) -> Result<Page<MemberTeamRow>> {
        let request = PageRequest::new(request.page, request.size.max(1));
        let paginator = Self::search_select(filter)
            .into_model::<MemberTeamRow>()
            .paginate(&self.conn, request.size);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(request.page).await?;
        Ok(Page::new(items, total, request))
    }

    /// Delete a member by id.
    pub async fn delete_member(&self, id: i64) -> Result<()> {
        member::Entity::delete_by_id(id).exec(&self.conn).await?;
        Ok(())
    }

    // Shared select for the search methods: flat member/team rows in a
    // stable id order so paging windows do not drift.
    fn search_select(filter: &MemberSearch) -> Select<member::Entity> {
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
