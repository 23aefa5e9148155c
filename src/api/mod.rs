/// REST API boundary
///
/// This module owns the one network call the dashboard makes:
/// fetching the employee list from the server.

pub mod client;

pub use client::{fetch_employees, FetchError, SERVER_BASE, USERS_ENDPOINT};
