//! Release repository for database operations.
//!
//! Releases are owned by groups; only the surface needed by group removal
//! and bookkeeping lives here.

use anyhow::Result;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::entities::release;

/// Repository for release-related database operations.
pub struct ReleaseRepository;

impl ReleaseRepository {
    /// Get all releases belonging to a group, newest first.
    pub async fn get_for_group<C>(conn: &C, groups_id: i32) -> Result<Vec<release::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(release::Entity::find()
            .filter(release::Column::GroupsId.eq(groups_id))
            .order_by_desc(release::Column::PostDate)
            .all(conn)
            .await?)
    }

    /// Count the releases belonging to a group.
    pub async fn count_for_group<C>(conn: &C, groups_id: i32) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(release::Entity::find()
            .filter(release::Column::GroupsId.eq(groups_id))
            .count(conn)
            .await?)
    }

    /// Delete every release belonging to any of the given groups.
    pub async fn delete_for_groups<C>(conn: &C, group_ids: &[i32]) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(release::Entity::delete_many()
            .filter(release::Column::GroupsId.is_in(group_ids.iter().copied()))
            .exec(conn)
            .await?
            .rows_affected)
    }
}
