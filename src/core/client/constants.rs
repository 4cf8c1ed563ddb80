//! Centralized constants for the default endpoint and UA.

/// Identifies the crate to the ISS servers.
pub(crate) const USER_AGENT: &str = concat!("moex-iss/", env!("CARGO_PKG_VERSION"));

/// ISS root; every resource path is appended to it.
pub(crate) const DEFAULT_BASE_URL: &str = "https://iss.moex.com/iss";
