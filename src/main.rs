use anyhow::Result;
use log::info;

use rosterdb::config::Config;
use rosterdb::logger;
use rosterdb::paging::PageRequest;
use rosterdb::repositories::MemberRepository;
use rosterdb::search::MemberSearch;
use rosterdb::storage::Storage;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    let storage = Storage::from_config(&config.database).await?;

    if !storage.has_data().await? {
        seed_demo_roster(&storage).await?;
    }

    info!(
        "roster holds {} members across {} teams",
        storage.count_members().await?,
        storage.count_teams().await?
    );

    // A sample dynamic search: everyone aged 30 or older.
    let filter = MemberSearch {
        min_age: Some(30),
        ..Default::default()
    };
    for row in storage.search_members(&filter).await? {
        info!("match: {}", serde_json::to_string(&row)?);
    }

    // And the first page of the whole roster.
    let request =
        PageRequest::new(0, config.paging.default_page_size).clamped(config.paging.max_page_size);
    let page = MemberRepository::search_page(storage.connection(), &MemberSearch::default(), request)
        .await?;
    info!(
        "page {} of {}: {} of {} members",
        page.page + 1,
        page.total_pages().max(1),
        page.items.len(),
        page.total
    );

    Ok(())
}

async fn seed_demo_roster(storage: &Storage) -> Result<()> {
    let platform = storage.insert_team("platform").await?;
    let mobile = storage.insert_team("mobile").await?;

    storage.insert_member(Some("ana"), 24, Some(platform.id)).await?;
    storage.insert_member(Some("ben"), 31, Some(platform.id)).await?;
    storage.insert_member(Some("chloe"), 28, Some(mobile.id)).await?;
    storage.insert_member(Some("dimitri"), 45, Some(mobile.id)).await?;
    storage.insert_member(None, 52, None).await?;

    info!("seeded demo roster");
    Ok(())
}
