use anyhow::Result;
use rosterdb::entities::{member, team};
use rosterdb::storage::Storage;

/// Two teams and four members, the baseline roster most tests start from.
pub struct Roster {
    pub storage: Storage,
    pub alpha: team::Model,
    pub bravo: team::Model,
    pub members: Vec<member::Model>,
}

pub async fn seeded() -> Result<Roster> {
    let storage = Storage::in_memory().await?;

    let alpha = storage.insert_team("alpha").await?;
    let bravo = storage.insert_team("bravo").await?;

    let mut members = Vec::new();
    for (username, age, team_id) in [
        ("ana", 10, alpha.id),
        ("ben", 20, alpha.id),
        ("chloe", 30, bravo.id),
        ("dimitri", 40, bravo.id),
    ] {
        members.push(
            storage
                .insert_member(Some(username), age, Some(team_id))
                .await?,
        );
    }

    Ok(Roster {
        storage,
        alpha,
        bravo,
        members,
    })
}
