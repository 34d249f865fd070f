//! PostgreSQL persistence adapters built on Diesel and `diesel-async`.
//!
//! Each repository owns a clone of the shared [`DbPool`] and maps pool and
//! Diesel failures into [`crate::domain::ports::AdminStoreError`] through the
//! shared helpers in `error_mapping`.

mod diesel_appointments;
mod diesel_inventory;
mod diesel_user_directory;
mod error_mapping;
mod models;
mod pool;
pub mod schema;

pub use diesel_appointments::DieselAppointmentRepository;
pub use diesel_inventory::DieselInventoryRepository;
pub use diesel_user_directory::DieselUserDirectoryRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
