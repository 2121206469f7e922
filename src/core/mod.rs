//! Core components of the `newsdesk` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`NewsClient`] and its builder.
//! - The primary [`FeedError`] type.
//! - Shared data models like [`Article`] and [`MergedResult`].
//! - Internal networking and conversion helpers.

/// The main client (`NewsClient`), builder, and default configuration.
pub mod client;
/// The primary error type (`FeedError`) for the crate.
pub mod error;
/// Shared data models used across all provider modules.
pub mod models;

pub(crate) mod conversions;
pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::NewsClient`
pub use client::{NewsClient, NewsClientBuilder};
pub use error::FeedError;
pub use models::{Article, MergedResult, ProviderResult, Sentiment};
