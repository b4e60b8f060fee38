use anyhow::Result;
use groupvault::config::Config;
use groupvault::logger;
use groupvault::repositories::GroupRepository;
use groupvault::storage::Storage;

/// Diagnostic lister: prints the first page of tracked groups, optionally
/// restricted to names containing the given substring.
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    let mut as_json = false;
    let mut name_filter = String::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            as_json = true;
        } else {
            name_filter = arg;
        }
    }

    let storage = Storage::new(&config).await?;
    let groups = GroupRepository::find_range(
        storage.conn(),
        1,
        config.display.items_per_page,
        &name_filter,
        None,
    )
    .await?;
    let total = GroupRepository::count(storage.conn(), &name_filter, None).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    for group in &groups {
        let state = if group.active { "active" } else { "inactive" };
        println!("{:>6}  {:<8}  {}", group.id, state, group.name);
    }
    println!("{} of {} groups", groups.len(), total);

    Ok(())
}
