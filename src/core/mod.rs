//! Core components of the `biodesk` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`BdClient`] and its builder.
//! - The primary [`BdError`] type.
//! - Shared response models and internal networking helpers.

/// The main client (`BdClient`), builder, and configuration.
pub mod client;
/// The primary error type (`BdError`) for the crate.
pub mod error;
/// Response models shared by more than one API module.
pub mod models;
pub(crate) mod net;

pub use client::{BdClient, BdClientBuilder};
pub use error::BdError;
pub use models::RefreshOutcome;
