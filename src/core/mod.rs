//! Core components of the `moex-iss` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`IssClient`] handle and its builder.
//! - The primary [`IssError`] type.
//! - The table model ([`Tables`], [`Table`], [`TableRow`]) and request [`Query`].
//! - The [`Transport`] seam the paginated fetch client talks through.

/// The client handle (`IssClient`), builder, and configuration.
pub mod client;
/// The primary error type (`IssError`) for the crate.
pub mod error;
/// Tables, rows and query parameters shared by every endpoint.
pub mod models;
/// Service traits abstracting the HTTP transport.
pub mod services;
pub(crate) mod wire;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::IssClient`
pub use client::{IssClient, IssClientBuilder};
pub use error::IssError;
pub use models::{Query, Table, TableRow, Tables};
pub use services::{RawResponse, Transport};
