//! Group repository for database operations.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, TransactionTrait,
};

use crate::entities::group;
use crate::error::Error;
use crate::repositories::ReleaseRepository;

/// A name is well formed when it is two or more word/hyphen segments
/// joined by single dots.
static GROUP_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^([\w-]+\.)+[\w-]+$").unwrap());

/// Shorthand prefix rewritten to `alt.binaries.`.
static SHORTHAND: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^a\.b\.").unwrap());

/// Repository for group-related database operations.
pub struct GroupRepository;

impl GroupRepository {
    /// Get a single group by its id.
    pub async fn find_by_id<C>(conn: &C, id: i32) -> Result<Option<group::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(group::Entity::find_by_id(id).one(conn).await?)
    }

    /// Look up the id of the group with exactly the given name.
    ///
    /// When the group does not exist the outcome is caller-selectable:
    /// with `return_always` set this returns `Ok(None)`, otherwise it fails
    /// with [`Error::NoGroupEntry`].
    pub async fn find_id<C>(conn: &C, name: &str, return_always: bool) -> Result<Option<i32>>
    where
        C: ConnectionTrait,
    {
        let found = group::Entity::find()
            .filter(group::Column::Name.eq(name))
            .one(conn)
            .await?;

        match found {
            Some(g) => Ok(Some(g.id)),
            None if return_always => Ok(None),
            None => Err(Error::NoGroupEntry.into()),
        }
    }

    /// Get one page of groups ordered by name ascending.
    ///
    /// `page` is 1-based. A `name_filter` restricts the page to names
    /// containing the given substring; `active` restricts it to that
    /// activation state. Empty filter and `None` return the full set.
    pub async fn find_range<C>(
        conn: &C,
        page: u64,
        limit: u64,
        name_filter: &str,
        active: Option<bool>,
    ) -> Result<Vec<group::Model>>
    where
        C: ConnectionTrait,
    {
        let page = page.max(1);
        let limit = limit.max(1);

        Ok(Self::filtered(name_filter, active)
            .order_by_asc(group::Column::Name)
            .paginate(conn, limit)
            .fetch_page(page - 1)
            .await?)
    }

    /// Count groups matching the same filters as [`Self::find_range`].
    pub async fn count<C>(conn: &C, name_filter: &str, active: Option<bool>) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Self::filtered(name_filter, active).count(conn).await?)
    }

    /// Get all actively processed groups ordered by name.
    pub async fn find_active<C>(conn: &C) -> Result<Vec<group::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(group::Entity::find()
            .filter(group::Column::Active.eq(true))
            .order_by_asc(group::Column::Name)
            .all(conn)
            .await?)
    }

    /// Check that a group name is standard and replace the shorthand prefix.
    ///
    /// Returns the name with a leading `a.b.` rewritten to `alt.binaries.`,
    /// or `None` if the name is malformed. Malformed input is a routine
    /// outcome here, not an error.
    pub fn is_valid_group_name(name: &str) -> Option<String> {
        if GROUP_NAME.is_match(name) {
            return Some(SHORTHAND.replace(name, "alt.binaries.").into_owned());
        }

        None
    }

    /// Delete all groups matching `condition`, together with their releases.
    ///
    /// Releases are removed before their groups inside a single transaction.
    /// Returns the number of group rows deleted; matching nothing is a no-op
    /// returning 0.
    pub async fn remove<C>(conn: &C, condition: Condition) -> Result<u64>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let ids: Vec<i32> = group::Entity::find()
            .filter(condition)
            .select_only()
            .column(group::Column::Id)
            .into_tuple()
            .all(conn)
            .await?;

        if ids.is_empty() {
            return Ok(0);
        }

        let txn = conn.begin().await?;

        let releases = ReleaseRepository::delete_for_groups(&txn, &ids).await?;
        let groups = group::Entity::delete_many()
            .filter(group::Column::Id.is_in(ids))
            .exec(&txn)
            .await?
            .rows_affected;

        txn.commit().await?;
        log::info!("removed {groups} groups and {releases} releases");

        Ok(groups)
    }

    /// Delete a single group (and its releases) by id.
    pub async fn remove_by_id<C>(conn: &C, id: i32) -> Result<u64>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        Self::remove(conn, Condition::all().add(group::Column::Id.eq(id))).await
    }

    fn filtered(name_filter: &str, active: Option<bool>) -> Select<group::Entity> {
        let mut select = group::Entity::find();

        if let Some(active) = active {
            select = select.filter(group::Column::Active.eq(active));
        }

        if !name_filter.is_empty() {
            select = select.filter(group::Column::Name.contains(name_filter));
        }

        select
    }
}

#[cfg(test)]
mod tests {
    use super::GroupRepository;

    #[test]
    fn shorthand_prefix_is_expanded() {
        assert_eq!(
            GroupRepository::is_valid_group_name("a.b.test"),
            Some("alt.binaries.test".to_string())
        );
    }

    #[test]
    fn shorthand_prefix_matches_case_insensitively() {
        assert_eq!(
            GroupRepository::is_valid_group_name("A.B.Test"),
            Some("alt.binaries.Test".to_string())
        );
    }

    #[test]
    fn full_prefix_is_left_alone() {
        assert_eq!(
            GroupRepository::is_valid_group_name("alt.binaries.test"),
            Some("alt.binaries.test".to_string())
        );
    }

    #[test]
    fn prefix_is_only_replaced_at_the_start() {
        assert_eq!(
            GroupRepository::is_valid_group_name("alt.a.b.test"),
            Some("alt.a.b.test".to_string())
        );
    }

    #[test]
    fn hyphens_and_underscores_are_accepted() {
        assert_eq!(
            GroupRepository::is_valid_group_name("alt.binaries.e-book_flood"),
            Some("alt.binaries.e-book_flood".to_string())
        );
    }

    #[test]
    fn malformed_names_are_rejected() {
        for name in [
            "not valid!",
            "nodots",
            "a..b",
            ".leading.dot",
            "trailing.dot.",
            "spaces in.name",
            "",
        ] {
            assert_eq!(GroupRepository::is_valid_group_name(name), None, "{name:?}");
        }
    }
}
