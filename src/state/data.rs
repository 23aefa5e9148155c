/// Shared data structures for the application state
///
/// These structs represent the employee records that flow between
/// the API layer and the UI layer.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Deserialize;

/// A single employee record as returned by the server
///
/// Records are immutable from the dashboard's perspective. The server owns
/// them; the dashboard only displays the snapshot of its latest fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Employee {
    /// Unique, stable server-assigned ID
    pub id: i64,
    /// Full name (used as the card heading)
    pub name: String,
    /// Age in years
    pub age: i64,
    /// Phone number, displayed verbatim
    pub phone_number: String,
    /// Home address, displayed verbatim
    pub home_address: String,
    /// Server-assigned creation timestamp (ISO-8601)
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Creation timestamp as a short calendar date in the local timezone
    pub fn created_date(&self) -> String {
        format_short_date(self.created_at.with_timezone(&Local).date_naive())
    }
}

/// Format a calendar date in the short form shown on cards (e.g. "01/01/23")
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%x").to_string()
}

/// Parse a JSON response body into a list of employees
///
/// The server may include extra fields (e.g. `updated_at`); anything the
/// dashboard does not display is ignored.
pub fn parse_employees(body: &str) -> Result<Vec<Employee>, serde_json::Error> {
    serde_json::from_str(body)
}
