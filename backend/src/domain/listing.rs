//! User directory listing and the recent-activity feed.
//!
//! Pagination inputs are normalized once at the edge of the domain:
//! out-of-range or absent values fall back to the defaults rather than
//! failing the request, and the page size is capped so a single call cannot
//! pull the whole directory.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ports::{
    ActivityFeedQuery, AppointmentRepository, UserDirectoryQuery, UserDirectoryRepository,
};
use super::{Error, RecentAppointment, UserAccount, UserRole, RECENT_FEED_SIZE};

/// Page used when the request omits one or supplies an unusable value.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the request omits one or supplies an unusable value.
pub const DEFAULT_PAGE_SIZE: i64 = 20;
/// Hard ceiling on the page size.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Predicates a directory page is filtered by. Both are optional and
/// independent; an empty filter selects every user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListFilter {
    /// Restrict to one role. `None` applies no role predicate.
    pub role: Option<UserRole>,
    /// Case-insensitive substring match on the display name.
    pub search: Option<String>,
}

/// A normalized directory page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListRequest {
    page: i64,
    limit: i64,
    filter: UserListFilter,
}

impl UserListRequest {
    /// Normalize raw pagination inputs. Pages below one and limits outside
    /// `1..=MAX_PAGE_SIZE` fall back silently; a blank search collapses to
    /// no predicate.
    pub fn new(
        page: Option<i64>,
        limit: Option<i64>,
        role: Option<UserRole>,
        search: Option<String>,
    ) -> Self {
        let page = page.filter(|&value| value >= 1).unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .filter(|&value| value >= 1)
            .map(|value| value.min(MAX_PAGE_SIZE))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let search = search
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        Self {
            page,
            limit,
            filter: UserListFilter { role, search },
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Zero-based row offset of this page. Saturates so an absurdly large
    /// page number stays a valid (empty) page instead of overflowing.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn filter(&self) -> &UserListFilter {
        &self.filter
    }
}

impl Default for UserListRequest {
    fn default() -> Self {
        Self::new(None, None, None, None)
    }
}

/// Number of pages needed to hold `total` rows at `limit` rows per page.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    (total + limit - 1) / limit
}

/// One page of the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserListPage {
    pub users: Vec<UserAccount>,
    /// Total rows matching the filter across all pages.
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

/// Directory listing service over the user repository.
#[derive(Clone)]
pub struct DirectoryService {
    users: Arc<dyn UserDirectoryRepository>,
}

impl DirectoryService {
    pub fn new(users: Arc<dyn UserDirectoryRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserDirectoryQuery for DirectoryService {
    async fn list_users(&self, request: UserListRequest) -> Result<UserListPage, Error> {
        let (users, total) = self
            .users
            .find_page(request.filter(), request.limit(), request.offset())
            .await?;

        // A page past the end is an empty page, not an error; the totals
        // still describe the filtered collection.
        Ok(UserListPage {
            users,
            total,
            page: request.page(),
            total_pages: total_pages(total, request.limit()),
        })
    }
}

/// Recent-appointments feed service.
#[derive(Clone)]
pub struct ActivityFeedService {
    appointments: Arc<dyn AppointmentRepository>,
}

impl ActivityFeedService {
    pub fn new(appointments: Arc<dyn AppointmentRepository>) -> Self {
        Self { appointments }
    }
}

#[async_trait]
impl ActivityFeedQuery for ActivityFeedService {
    async fn recent_appointments(&self) -> Result<Vec<RecentAppointment>, Error> {
        Ok(self.appointments.recent(RECENT_FEED_SIZE).await?)
    }
}
