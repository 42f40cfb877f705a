//! # awsctl-core
//!
//! Shared library for the `awsctl` CLI. Two concerns live here:
//!
//! - [`config`]: named profile configuration (region, credentials profile,
//!   endpoint override) stored as TOML, plus resolution precedence.
//! - [`page`]: the generic paginated-fetch driver that all list-style
//!   commands are built on. Everything network-related stays in the
//!   caller-supplied closure; the driver owns only the continuation-token
//!   loop.

pub mod config;
pub mod error;
pub mod page;

pub use config::{Config, Profile};
pub use error::{ConfigError, Result};
pub use page::{fetch_all, Page};
