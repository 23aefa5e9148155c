/// Dashboard view state and the fetch-cycle state machine
///
/// One fetch cycle runs `idle -> loading -> {success, failure} -> idle`.
/// The timer and the refresh button both funnel into `begin_fetch`, which
/// keeps at most one cycle in flight and hands each spawned task a sequence
/// token so that late completions can be told apart from current ones.

use chrono::Local;

use super::data::Employee;
use crate::api::FetchError;

/// Fixed user-facing message shown for any failed fetch cycle
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch employee data. Please try again.";

/// Outcome of handing a completed fetch cycle to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The cycle was current and the state was updated
    Current,
    /// The cycle's sequence token was stale; the state is untouched
    Stale,
}

/// Snapshot of fetch status and employee data held between renders
///
/// Replaced-wholesale semantics: a successful fetch swaps the record list in
/// one assignment; nothing is patched incrementally.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Employee records in server response order
    pub employees: Vec<Employee>,
    /// True while a fetch cycle is outstanding
    pub loading: bool,
    /// Fixed user-facing message, set only after a failed cycle
    pub error: Option<String>,
    /// Local wall-clock stamp of the last successful fetch
    pub last_updated: Option<String>,
    /// Sequence token of the current fetch cycle
    fetch_seq: u64,
}

impl DashboardState {
    /// Start a fetch cycle: set loading, clear any prior error, and hand out
    /// the sequence token the spawned task must echo back.
    ///
    /// Returns `None` while a cycle is already outstanding; the trigger is
    /// coalesced into the in-flight cycle instead of racing it.
    pub fn begin_fetch(&mut self) -> Option<u64> {
        if self.loading {
            return None;
        }
        self.fetch_seq += 1;
        self.loading = true;
        self.error = None;
        Some(self.fetch_seq)
    }

    /// Apply the outcome of a fetch cycle.
    ///
    /// A completion whose token does not match the current cycle is
    /// discarded without touching the state. On success the record list is
    /// replaced and the last-updated stamp set; on failure the fixed error
    /// message is shown and the previously displayed records stay visible.
    /// Loading is cleared on both exit paths.
    pub fn apply_fetch_result(
        &mut self,
        seq: u64,
        result: Result<Vec<Employee>, FetchError>,
    ) -> Applied {
        if seq != self.fetch_seq {
            return Applied::Stale;
        }

        match result {
            Ok(employees) => {
                self.employees = employees;
                self.last_updated = Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
            }
            Err(_) => {
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
        Applied::Current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ann() -> Employee {
        Employee {
            id: 1,
            name: "Ann".into(),
            age: 30,
            phone_number: "555-1111".into(),
            home_address: "1 Main St".into(),
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn bob() -> Employee {
        Employee {
            id: 2,
            name: "Bob".into(),
            age: 41,
            phone_number: "555-2222".into(),
            home_address: "2 Side St".into(),
            created_at: Utc.with_ymd_and_hms(2023, 3, 5, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_begin_fetch_sets_loading_and_clears_error() {
        let mut state = DashboardState::default();
        state.error = Some(FETCH_ERROR_MESSAGE.to_string());

        let seq = state.begin_fetch();

        assert_eq!(seq, Some(1));
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_trigger_coalesced_while_cycle_outstanding() {
        let mut state = DashboardState::default();
        let seq = state.begin_fetch().unwrap();

        // Timer tick or button press while the fetch is still in flight
        assert_eq!(state.begin_fetch(), None);

        // The outstanding cycle's token is still the current one
        let applied = state.apply_fetch_result(seq, Ok(vec![ann()]));
        assert_eq!(applied, Applied::Current);
    }

    #[test]
    fn test_success_replaces_records_and_stamps() {
        let mut state = DashboardState::default();
        let seq = state.begin_fetch().unwrap();

        let applied = state.apply_fetch_result(seq, Ok(vec![ann(), bob()]));

        assert_eq!(applied, Applied::Current);
        assert_eq!(state.employees, vec![ann(), bob()]);
        assert!(state.last_updated.is_some());
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_success_replaces_wholesale() {
        let mut state = DashboardState::default();
        let seq = state.begin_fetch().unwrap();
        state.apply_fetch_result(seq, Ok(vec![ann(), bob()]));

        let seq = state.begin_fetch().unwrap();
        state.apply_fetch_result(seq, Ok(vec![bob()]));

        assert_eq!(state.employees, vec![bob()]);
    }

    #[test]
    fn test_failure_keeps_previous_records_visible() {
        let mut state = DashboardState::default();
        let seq = state.begin_fetch().unwrap();
        state.apply_fetch_result(seq, Ok(vec![ann()]));

        let seq = state.begin_fetch().unwrap();
        let applied = state.apply_fetch_result(seq, Err(FetchError::Status(500)));

        assert_eq!(applied, Applied::Current);
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert_eq!(state.employees, vec![ann()]);
        assert!(!state.loading);
    }

    #[test]
    fn test_failure_on_first_load_shows_no_cards() {
        let mut state = DashboardState::default();
        let seq = state.begin_fetch().unwrap();

        state.apply_fetch_result(seq, Err(FetchError::Transport("refused".into())));

        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert!(state.employees.is_empty());
        assert!(state.last_updated.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_loading_cleared_on_every_exit_path() {
        let mut state = DashboardState::default();

        let seq = state.begin_fetch().unwrap();
        state.apply_fetch_result(seq, Ok(vec![]));
        assert!(!state.loading);

        let seq = state.begin_fetch().unwrap();
        state.apply_fetch_result(seq, Err(FetchError::Decode("bad body".into())));
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_completion_discarded() {
        let mut state = DashboardState::default();
        let first = state.begin_fetch().unwrap();
        state.apply_fetch_result(first, Ok(vec![ann()]));

        let second = state.begin_fetch().unwrap();

        // A late duplicate of the first cycle arrives while the second runs
        let applied = state.apply_fetch_result(first, Ok(vec![]));

        assert_eq!(applied, Applied::Stale);
        assert_eq!(state.employees, vec![ann()]);
        assert!(state.loading);

        // The current cycle still lands normally afterwards
        assert_eq!(
            state.apply_fetch_result(second, Ok(vec![bob()])),
            Applied::Current
        );
        assert_eq!(state.employees, vec![bob()]);
    }

    #[test]
    fn test_refresh_blanks_grid_while_loading() {
        // Pins the literal render rule: loading replaces the grid on every
        // refresh, not just the first load
        let mut state = DashboardState::default();
        let seq = state.begin_fetch().unwrap();
        state.apply_fetch_result(seq, Ok(vec![ann()]));

        state.begin_fetch().unwrap();

        assert!(state.loading);
        assert!(!state.employees.is_empty());
    }
}
