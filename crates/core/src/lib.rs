//! Comanda Core - Shared types library.
//!
//! This crate provides common types used across all Comanda components:
//! - `api` - The ordering REST API
//! - `integration-tests` - End-to-end tests against the full router
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP handlers. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the catalog item tag

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
