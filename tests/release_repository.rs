use anyhow::Result;
use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelTrait, Set};

use groupvault::entities::{group, release};
use groupvault::repositories::ReleaseRepository;
use groupvault::storage::Storage;

async fn seed_group(storage: &Storage, name: &str) -> Result<group::Model> {
    Ok(group::ActiveModel {
        name: Set(name.to_string()),
        description: Set(None),
        first_record: Set(0),
        last_record: Set(0),
        active: Set(true),
        backfill: Set(false),
        ..Default::default()
    }
    .insert(storage.conn())
    .await?)
}

#[tokio::test]
async fn test_get_for_group_newest_first() -> Result<()> {
    let storage = Storage::in_memory().await?;
    let conn = storage.conn();

    let g = seed_group(&storage, "alt.binaries.teevee").await?;

    for (guid, day) in [("old", 1), ("newer", 5), ("newest", 9)] {
        release::ActiveModel {
            name: Set(format!("release-{guid}")),
            guid: Set(guid.to_string()),
            groups_id: Set(g.id),
            size: Set(2048),
            post_date: Set(Some(Utc.with_ymd_and_hms(2017, 3, day, 12, 0, 0).unwrap())),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    let releases = ReleaseRepository::get_for_group(conn, g.id).await?;
    let guids: Vec<&str> = releases.iter().map(|r| r.guid.as_str()).collect();
    assert_eq!(guids, ["newest", "newer", "old"]);
    assert_eq!(ReleaseRepository::count_for_group(conn, g.id).await?, 3);

    Ok(())
}

#[tokio::test]
async fn test_delete_for_groups_only_touches_given_groups() -> Result<()> {
    let storage = Storage::in_memory().await?;
    let conn = storage.conn();

    let a = seed_group(&storage, "alt.binaries.a").await?;
    let b = seed_group(&storage, "alt.binaries.b").await?;

    for (guid, owner) in [("one", a.id), ("two", a.id), ("three", b.id)] {
        release::ActiveModel {
            name: Set(format!("release-{guid}")),
            guid: Set(guid.to_string()),
            groups_id: Set(owner),
            size: Set(512),
            post_date: Set(None),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    let deleted = ReleaseRepository::delete_for_groups(conn, &[a.id]).await?;
    assert_eq!(deleted, 2);
    assert_eq!(ReleaseRepository::count_for_group(conn, a.id).await?, 0);
    assert_eq!(ReleaseRepository::count_for_group(conn, b.id).await?, 1);

    Ok(())
}
