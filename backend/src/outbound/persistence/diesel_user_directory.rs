//! PostgreSQL-backed `UserDirectoryRepository` implementation.
//!
//! Directory predicates are assembled from the typed filter only; there is no
//! pass-through of raw request parameters into SQL. The name search uses
//! `ILIKE` with its wildcard characters escaped so a search term is always a
//! literal substring.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AdminStoreError, UserDirectoryRepository};
use crate::domain::{UserAccount, UserListFilter, UserRole};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::UserRow;
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the `UserDirectoryRepository` port.
#[derive(Clone)]
pub struct DieselUserDirectoryRepository {
    pool: DbPool,
}

impl DieselUserDirectoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Turn a search term into a literal-substring `ILIKE` pattern. Postgres
/// treats backslash as the default escape character.
fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Apply the directory filter to a boxed users query. Both the count and the
/// page query go through here so their predicates cannot drift apart.
fn filtered(filter: &UserListFilter) -> users::BoxedQuery<'static, diesel::pg::Pg> {
    let mut query = users::table.into_boxed();
    if let Some(role) = filter.role {
        query = query.filter(users::role.eq(role.as_str()));
    }
    if let Some(search) = &filter.search {
        query = query.filter(users::name.ilike(contains_pattern(search)));
    }
    query
}

#[async_trait]
impl UserDirectoryRepository for DieselUserDirectoryRepository {
    async fn count_users(&self, role: Option<UserRole>) -> Result<i64, AdminStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = users::table.into_boxed();
        if let Some(role) = role {
            query = query.filter(users::role.eq(role.as_str()));
        }
        query
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn find_page(
        &self,
        filter: &UserListFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<UserAccount>, i64), AdminStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = filtered(filter)
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let rows: Vec<UserRow> = filtered(filter)
            .select(UserRow::as_select())
            .order(users::created_at.desc())
            .limit(limit)
            .offset(offset)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let accounts = rows
            .into_iter()
            .map(UserAccount::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((accounts, total))
    }
}
