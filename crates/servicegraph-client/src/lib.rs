//! Servicegraph Client — fetch boundary and catalog accessors

pub mod catalogs;
pub mod client;

pub use client::{FetchError, GraphClient, RefreshOutcome};
