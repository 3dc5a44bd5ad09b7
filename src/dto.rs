//! Flat projections materialized straight from query results.

use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// Username and age only.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct MemberBrief {
    pub username: Option<String>,
    pub age: i32,
}

/// Same data as [`MemberBrief`], but under the `name` alias used by
/// directory exports. Queries producing it must alias the username column.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub age: i32,
}

/// A member row joined with its team, if any.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct MemberTeamRow {
    pub member_id: i64,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<i64>,
    pub team_name: Option<String>,
}

/// Average member age per team.
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct TeamAverage {
    pub team_name: String,
    pub average_age: f64,
}
