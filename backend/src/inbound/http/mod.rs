//! HTTP adapter: handlers, request parsing, and the error surface.
//!
//! Handlers depend on the driving ports through [`state::AdminState`] and
//! return domain errors; `error` maps those to status codes and JSON bodies.

pub mod appointments;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod inventory;
pub mod state;
pub mod users;

pub use error::ApiResult;
pub use state::AdminState;
