//! cellcycle-common — Shared types used across the CellCycleDB crates.

pub mod error;

pub use error::ApiError;
