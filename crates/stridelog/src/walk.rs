//! Core walk types for stridelog.
//!
//! This module defines the single domain entity, a [`Walk`], together with
//! its mood classification and the properties derived from its stored fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the walker felt about a walk.
///
/// Mood is a closed set of variants rather than a free-form string; any value
/// outside the three recognized moods collapses into [`Mood::Unknown`] so the
/// fallback is exhaustive and explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// The walk felt good.
    Good,
    /// The walk was unremarkable.
    Ok,
    /// The walk felt bad.
    Bad,
    /// Any unrecognized mood value.
    Unknown,
}

impl Mood {
    /// Parse a mood from its stored string form.
    ///
    /// Matching is exact: case-sensitive, no trimming. Anything other than
    /// `"good"`, `"ok"`, or `"bad"` maps to [`Mood::Unknown`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "good" => Self::Good,
            "ok" => Self::Ok,
            "bad" => Self::Bad,
            _ => Self::Unknown,
        }
    }

    /// Get the fixed asset identifier for this mood's display image.
    #[must_use]
    pub fn image_ref(self) -> &'static str {
        match self {
            Self::Good => "assets/mood-good.png",
            Self::Ok => "assets/mood-ok.png",
            Self::Bad => "assets/mood-bad.png",
            Self::Unknown => "assets/mood-unknown.png",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Ok => write!(f, "ok"),
            Self::Bad => write!(f, "bad"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A single recorded walk.
///
/// The four stored fields are exactly what the user entered; everything else
/// (speed, the good-mood flag, the mood image) is recomputed from them on
/// every read and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walk {
    /// Unique identifier for this walk (assigned by the store on insert).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The calendar date the walk took place.
    pub date_walked: NaiveDate,

    /// Distance covered, in kilometers.
    pub distance_km: f64,

    /// Time taken, in minutes.
    pub minutes_taken: f64,

    /// How the walk felt.
    pub mood: Mood,
}

impl Walk {
    /// Create a new, not-yet-persisted walk.
    #[must_use]
    pub fn new(date_walked: NaiveDate, distance_km: f64, minutes_taken: f64, mood: Mood) -> Self {
        Self {
            id: None,
            date_walked,
            distance_km,
            minutes_taken,
            mood,
        }
    }

    /// Average speed in kilometers per hour.
    ///
    /// Defined as `0.0` when `minutes_taken` is not positive, so a malformed
    /// record renders as zero speed instead of propagating a NaN or infinity
    /// into aggregate views.
    #[must_use]
    pub fn speed_kmh(&self) -> f64 {
        if self.minutes_taken > 0.0 {
            60.0 * self.distance_km / self.minutes_taken
        } else {
            0.0
        }
    }

    /// Whether this walk was a good-mood walk.
    #[must_use]
    pub fn is_good(&self) -> bool {
        self.mood == Mood::Good
    }

    /// Whether this walk has been persisted and assigned an identifier.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_mood_parse_recognized() {
        assert_eq!(Mood::parse("good"), Mood::Good);
        assert_eq!(Mood::parse("ok"), Mood::Ok);
        assert_eq!(Mood::parse("bad"), Mood::Bad);
    }

    #[test]
    fn test_mood_parse_is_case_sensitive() {
        assert_eq!(Mood::parse("Good"), Mood::Unknown);
        assert_eq!(Mood::parse("OK"), Mood::Unknown);
        assert_eq!(Mood::parse("BAD"), Mood::Unknown);
    }

    #[test]
    fn test_mood_parse_does_not_trim() {
        assert_eq!(Mood::parse(" good"), Mood::Unknown);
        assert_eq!(Mood::parse("good "), Mood::Unknown);
    }

    #[test]
    fn test_mood_parse_unrecognized() {
        assert_eq!(Mood::parse("great"), Mood::Unknown);
        assert_eq!(Mood::parse(""), Mood::Unknown);
    }

    #[test]
    fn test_mood_display_roundtrip() {
        for mood in [Mood::Good, Mood::Ok, Mood::Bad] {
            assert_eq!(Mood::parse(&mood.to_string()), mood);
        }
        assert_eq!(Mood::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_mood_image_ref_matches_mood() {
        assert_eq!(Mood::Good.image_ref(), "assets/mood-good.png");
        assert_eq!(Mood::Ok.image_ref(), "assets/mood-ok.png");
        assert_eq!(Mood::Bad.image_ref(), "assets/mood-bad.png");
    }

    #[test]
    fn test_mood_image_ref_unknown_fallback() {
        assert_eq!(
            Mood::parse("elated").image_ref(),
            "assets/mood-unknown.png"
        );
    }

    #[test]
    fn test_walk_new_is_unsaved() {
        let walk = Walk::new(date(2026, 8, 1), 5.0, 50.0, Mood::Ok);
        assert!(walk.id.is_none());
        assert!(!walk.is_saved());
    }

    #[test]
    fn test_speed_kmh() {
        let walk = Walk::new(date(2026, 8, 1), 6.0, 60.0, Mood::Good);
        assert!((walk.speed_kmh() - 6.0).abs() < f64::EPSILON);

        let walk = Walk::new(date(2026, 8, 1), 2.5, 30.0, Mood::Ok);
        assert!((walk.speed_kmh() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_speed_kmh_zero_minutes() {
        let walk = Walk::new(date(2026, 8, 1), 6.0, 0.0, Mood::Good);
        assert!((walk.speed_kmh() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_speed_kmh_negative_minutes() {
        let walk = Walk::new(date(2026, 8, 1), 6.0, -10.0, Mood::Good);
        assert!((walk.speed_kmh() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_is_good() {
        assert!(Walk::new(date(2026, 8, 1), 1.0, 10.0, Mood::Good).is_good());
        assert!(!Walk::new(date(2026, 8, 1), 1.0, 10.0, Mood::Ok).is_good());
        assert!(!Walk::new(date(2026, 8, 1), 1.0, 10.0, Mood::Bad).is_good());
        assert!(!Walk::new(date(2026, 8, 1), 1.0, 10.0, Mood::Unknown).is_good());
    }

    #[test]
    fn test_walk_serialization() {
        let walk = Walk::new(date(2026, 8, 15), 4.2, 45.0, Mood::Good);

        let json = serde_json::to_string(&walk).unwrap();
        assert!(json.contains("\"mood\":\"good\""));
        assert!(json.contains("2026-08-15"));
        // Unsaved walks serialize without an id field
        assert!(!json.contains("\"id\""));

        let deserialized: Walk = serde_json::from_str(&json).unwrap();
        assert_eq!(walk, deserialized);
    }
}
