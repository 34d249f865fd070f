//! CareGrid administrative backend.
//!
//! Read-only aggregation core for the platform's admin dashboard: user and
//! appointment metrics, the paginated user directory, the recent-appointment
//! activity feed, and inventory alerts. Presentation, authentication, and all
//! booking/mutation flows live elsewhere; this crate only queries the store
//! and shapes responses.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Request tracing middleware re-exported for app assembly.
pub use middleware::trace::Trace;
