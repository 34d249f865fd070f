//! Actix middleware shared by all inbound routes.

pub mod trace;
