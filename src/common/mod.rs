//! Common utilities and shared functionality.
//!
//! This module contains helpers used across the cache, database and data
//! access layers.
//!
//! # Utilities
//!
//! - Logging setup (`fern` + `log`)
//! - Current unix time
//!
//! # Data Structures
//!
//! - `CustomError` - simple message carrying error used during boot
//! - `RequestContext` - per call deadline and cancellation signal
//! - `CancelHandle` - trigger side of a `RequestContext` cancellation
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use weaving_net::common::structs::request_context::RequestContext;
//!
//! let ctx = RequestContext::with_timeout(Duration::from_secs(3));
//! let education = educations.get_by_id(&ctx, 1).await?;
//! ```

/// Common data structures (errors, request context).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
