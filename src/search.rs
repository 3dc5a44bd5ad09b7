//! Sparse search filters composed into typed query conditions.

use sea_orm::{ColumnTrait, Condition};
use serde::{Deserialize, Serialize};

use crate::entities::{member, team};

/// Optional predicates for a member search.
///
/// Every field is independent. Only the fields that are set contribute a
/// predicate, and an empty filter matches the whole roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberSearch {
    /// Exact username match.
    pub username: Option<String>,
    /// Exact team name match, applied to the joined team.
    pub team_name: Option<String>,
    /// Inclusive lower age bound.
    pub min_age: Option<i32>,
    /// Inclusive upper age bound.
    pub max_age: Option<i32>,
}

impl MemberSearch {
    /// Conjunction of the predicates that are actually set.
    ///
    /// Queries filtering on `team_name` must join the team table.
    pub fn condition(&self) -> Condition {
        Condition::all()
            .add_option(self.username.as_deref().map(|u| member::Column::Username.eq(u)))
            .add_option(self.team_name.as_deref().map(|t| team::Column::Name.eq(t)))
            .add_option(self.min_age.map(|age| member::Column::Age.gte(age)))
            .add_option(self.max_age.map(|age| member::Column::Age.lte(age)))
    }
}
