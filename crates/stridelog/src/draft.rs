//! The add-walk flow for stridelog.
//!
//! A draft walk lives in memory only: it is created when the add flow is
//! entered, persisted exactly once on a valid submit, and simply dropped if
//! the flow is abandoned. Because nothing touches the store before submit,
//! an abandoned draft can never leak into a later list fetch.
//!
//! States: `Draft -> {Invalid, Saved}` or `Draft -> Discarded`. An `Invalid`
//! flow keeps its draft and error string so the user can correct the input
//! and resubmit.

use chrono::{Days, Local, NaiveDate};
use tracing::debug;

use crate::error::{Error, Result};
use crate::store::Store;
use crate::walk::{Mood, Walk};

/// The state of an add-walk flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    /// A fresh draft, not yet submitted.
    #[default]
    Draft,
    /// The last submit failed validation; the draft is kept for correction.
    Invalid,
    /// The draft was persisted and assigned an identifier.
    Saved,
    /// The draft was abandoned without being persisted.
    Discarded,
}

/// The in-memory fields of a draft walk.
///
/// Every field starts unset; the submit path checks presence of all four,
/// so there is no partial-record state in the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftWalk {
    /// The calendar date the walk took place.
    pub date_walked: Option<NaiveDate>,
    /// Distance covered, in kilometers.
    pub distance_km: Option<f64>,
    /// Time taken, in minutes.
    pub minutes_taken: Option<f64>,
    /// How the walk felt.
    pub mood: Option<Mood>,
}

impl DraftWalk {
    /// Check whether all four fields have been provided.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.date_walked.is_some()
            && self.distance_km.is_some()
            && self.minutes_taken.is_some()
            && self.mood.is_some()
    }
}

/// The add-walk flow state machine.
#[derive(Debug, Default)]
pub struct AddWalkFlow {
    /// The draft being edited.
    pub draft: DraftWalk,
    state: FlowState,
    error: Option<String>,
}

impl AddWalkFlow {
    /// Start a new add-walk flow with an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current flow state.
    #[must_use]
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Get the user-visible error from the last failed submit, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the draft.
    ///
    /// If any of the four fields is unset, the flow transitions to
    /// [`FlowState::Invalid`], the user-visible error is set, and nothing is
    /// persisted. If the duration is not positive the submit is likewise
    /// rejected. Otherwise the walk is persisted, the error is cleared, and
    /// the saved walk (with its assigned id) is returned.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an incomplete or invalid draft, or a
    /// storage error if the insert fails.
    pub fn submit(&mut self, store: &Store) -> Result<Walk> {
        match self.state {
            FlowState::Draft | FlowState::Invalid => {}
            FlowState::Saved | FlowState::Discarded => {
                return Err(Error::internal("add-walk flow already finished"));
            }
        }

        let (Some(date_walked), Some(distance_km), Some(minutes_taken), Some(mood)) = (
            self.draft.date_walked,
            self.draft.distance_km,
            self.draft.minutes_taken,
            self.draft.mood,
        ) else {
            return Err(self.reject(Error::FieldsMissing));
        };

        if minutes_taken <= 0.0 {
            return Err(self.reject(Error::InvalidMinutes {
                value: minutes_taken,
            }));
        }

        let mut walk = Walk::new(date_walked, distance_km, minutes_taken, mood);
        let id = store.insert(&walk)?;
        walk.id = Some(id);

        self.state = FlowState::Saved;
        self.error = None;
        debug!("Saved walk {} from add flow", id);
        Ok(walk)
    }

    /// Record a validation failure and return the error to propagate.
    fn reject(&mut self, err: Error) -> Error {
        self.state = FlowState::Invalid;
        self.error = Some(err.to_string());
        err
    }

    /// Abandon the flow.
    ///
    /// The draft was never written to the store, so discarding it is purely
    /// an in-memory transition. Abandoning an already-saved flow is a no-op.
    pub fn abandon(mut self) {
        if self.state != FlowState::Saved {
            self.state = FlowState::Discarded;
            debug!("Discarded unsaved walk draft");
        }
    }
}

/// Normalize user date input into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `today`, or `yesterday`.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] for anything else.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    parse_date_from(input, Local::now().date_naive())
}

/// [`parse_date`] with an explicit "today" for deterministic tests.
fn parse_date_from(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    match input {
        "today" => Ok(today),
        "yesterday" => today
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| Error::invalid_date(input)),
        _ => NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map_err(|_| Error::invalid_date(input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn complete_draft() -> DraftWalk {
        DraftWalk {
            date_walked: Some(date(2026, 8, 10)),
            distance_km: Some(4.5),
            minutes_taken: Some(55.0),
            mood: Some(Mood::Good),
        }
    }

    fn test_store() -> Store {
        Store::open_in_memory().expect("failed to create test store")
    }

    #[test]
    fn test_new_flow_starts_as_draft() {
        let flow = AddWalkFlow::new();
        assert_eq!(flow.state(), FlowState::Draft);
        assert!(flow.error().is_none());
        assert!(!flow.draft.is_complete());
    }

    #[test]
    fn test_submit_with_all_fields_saves_one_record() {
        let store = test_store();
        let mut flow = AddWalkFlow::new();
        flow.draft = complete_draft();

        let walk = flow.submit(&store).unwrap();

        assert_eq!(flow.state(), FlowState::Saved);
        assert!(flow.error().is_none());
        assert!(walk.is_saved());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_submit_with_missing_field_sets_error_and_saves_nothing() {
        let store = test_store();

        // Each of the four fields missing in turn
        let incomplete = [
            DraftWalk {
                date_walked: None,
                ..complete_draft()
            },
            DraftWalk {
                distance_km: None,
                ..complete_draft()
            },
            DraftWalk {
                minutes_taken: None,
                ..complete_draft()
            },
            DraftWalk {
                mood: None,
                ..complete_draft()
            },
        ];

        for draft in incomplete {
            let mut flow = AddWalkFlow::new();
            flow.draft = draft;

            let result = flow.submit(&store);
            assert!(matches!(result, Err(Error::FieldsMissing)));
            assert_eq!(flow.state(), FlowState::Invalid);
            assert_eq!(flow.error(), Some("Please populate all the fields"));
        }

        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_invalid_flow_can_be_corrected_and_resubmitted() {
        let store = test_store();
        let mut flow = AddWalkFlow::new();
        flow.draft = DraftWalk {
            mood: None,
            ..complete_draft()
        };

        assert!(flow.submit(&store).is_err());
        assert_eq!(flow.state(), FlowState::Invalid);

        flow.draft.mood = Some(Mood::Ok);
        let walk = flow.submit(&store).unwrap();

        assert_eq!(flow.state(), FlowState::Saved);
        assert!(flow.error().is_none());
        assert_eq!(walk.mood, Mood::Ok);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_submit_rejects_zero_minutes() {
        let store = test_store();
        let mut flow = AddWalkFlow::new();
        flow.draft = DraftWalk {
            minutes_taken: Some(0.0),
            ..complete_draft()
        };

        let result = flow.submit(&store);
        assert!(matches!(result, Err(Error::InvalidMinutes { .. })));
        assert_eq!(flow.state(), FlowState::Invalid);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_submit_rejects_negative_minutes() {
        let store = test_store();
        let mut flow = AddWalkFlow::new();
        flow.draft = DraftWalk {
            minutes_taken: Some(-5.0),
            ..complete_draft()
        };

        assert!(flow.submit(&store).is_err());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_abandoned_draft_never_appears_in_list() {
        let store = test_store();
        let mut flow = AddWalkFlow::new();
        flow.draft = complete_draft();
        // Navigate away without submitting
        flow.abandon();

        assert!(store.all().unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_submit_after_save_is_rejected() {
        let store = test_store();
        let mut flow = AddWalkFlow::new();
        flow.draft = complete_draft();

        flow.submit(&store).unwrap();
        let result = flow.submit(&store);

        assert!(matches!(result, Err(Error::Internal(_))));
        // No duplicate record
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_saved_walk_appears_in_list() {
        let store = test_store();
        let mut flow = AddWalkFlow::new();
        flow.draft = complete_draft();
        let saved = flow.submit(&store).unwrap();

        let walks = store.all().unwrap();
        assert_eq!(walks.len(), 1);
        assert_eq!(walks[0].id, saved.id);
    }

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(
            parse_date_from("2026-08-10", date(2026, 8, 24)).unwrap(),
            date(2026, 8, 10)
        );
    }

    #[test]
    fn test_parse_date_today_and_yesterday() {
        let today = date(2026, 8, 24);
        assert_eq!(parse_date_from("today", today).unwrap(), today);
        assert_eq!(
            parse_date_from("yesterday", today).unwrap(),
            date(2026, 8, 23)
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let today = date(2026, 8, 24);
        assert!(parse_date_from("not-a-date", today).is_err());
        assert!(parse_date_from("24/08/2026", today).is_err());
        assert!(parse_date_from("", today).is_err());
    }

    #[test]
    fn test_draft_is_complete() {
        assert!(complete_draft().is_complete());
        assert!(!DraftWalk::default().is_complete());
    }
}
