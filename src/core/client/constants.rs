//! Centralized client defaults.

use std::time::Duration;

/// Identifies the crate to upstream APIs.
pub(crate) const USER_AGENT: &str = concat!("newsdesk/", env!("CARGO_PKG_VERSION"));

/// Bound on every outbound request; a source slower than this is treated as
/// failed for the cycle.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
