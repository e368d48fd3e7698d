//! # Time Windows
//!
//! [`RawTimeWindows`] is what upstream providers give us: six optional dates
//! in whatever representation they happen to use. [`HackathonTimeWindows`]
//! is the normalized form every computation runs on.

use hx_core::{normalize_opt, RawInstant, Timestamp};
use serde::{Deserialize, Serialize};

use crate::status::{derive_status_with, LifecycleStatus, PhaseBuffers};

/// Provider-shaped schedule. Accepts camelCase keys (the frontend's shape)
/// and snake_case keys (database column names).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimeWindows {
    #[serde(default, alias = "registration_start")]
    pub registration_start: Option<RawInstant>,
    #[serde(default, alias = "registration_end")]
    pub registration_end: Option<RawInstant>,
    #[serde(default, alias = "hackathon_start")]
    pub hackathon_start: Option<RawInstant>,
    #[serde(default, alias = "hackathon_end")]
    pub hackathon_end: Option<RawInstant>,
    #[serde(default, alias = "voting_start")]
    pub voting_start: Option<RawInstant>,
    #[serde(default, alias = "voting_end")]
    pub voting_end: Option<RawInstant>,
}

impl RawTimeWindows {
    /// Normalize every field. Unparseable values become absent.
    pub fn normalize(&self) -> HackathonTimeWindows {
        HackathonTimeWindows {
            registration_start: normalize_opt(self.registration_start.as_ref()),
            registration_end: normalize_opt(self.registration_end.as_ref()),
            hackathon_start: normalize_opt(self.hackathon_start.as_ref()),
            hackathon_end: normalize_opt(self.hackathon_end.as_ref()),
            voting_start: normalize_opt(self.voting_start.as_ref()),
            voting_end: normalize_opt(self.voting_end.as_ref()),
        }
    }
}

/// Normalized registration, hacking, and voting windows.
///
/// Each window is `[start, end)`. Any bound may be absent; an absent bound
/// does not gate the derived status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HackathonTimeWindows {
    pub registration_start: Option<Timestamp>,
    pub registration_end: Option<Timestamp>,
    pub hackathon_start: Option<Timestamp>,
    pub hackathon_end: Option<Timestamp>,
    pub voting_start: Option<Timestamp>,
    pub voting_end: Option<Timestamp>,
}

impl HackathonTimeWindows {
    /// Whether no bound at all is configured.
    pub fn is_unscheduled(&self) -> bool {
        self.bounds().iter().all(|(_, bound)| bound.is_none())
    }

    /// Status at `now` with the given buffers.
    pub fn status_at(&self, now: Timestamp, buffers: &PhaseBuffers) -> LifecycleStatus {
        derive_status_with(self, now, buffers)
    }

    /// All six bounds in lifecycle order, labelled by field name.
    pub fn bounds(&self) -> [(&'static str, Option<Timestamp>); 6] {
        [
            ("registration_start", self.registration_start),
            ("registration_end", self.registration_end),
            ("hackathon_start", self.hackathon_start),
            ("hackathon_end", self.hackathon_end),
            ("voting_start", self.voting_start),
            ("voting_end", self.voting_end),
        ]
    }
}

impl From<&RawTimeWindows> for HackathonTimeWindows {
    fn from(raw: &RawTimeWindows) -> Self {
        raw.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_camel_case_deserializes() {
        let raw: RawTimeWindows = serde_json::from_str(
            r#"{
                "registrationStart": "2026-01-01T00:00:00Z",
                "registrationEnd": 1768435200000,
                "hackathonStart": null,
                "votingEnd": "not a date"
            }"#,
        )
        .unwrap();
        let windows = raw.normalize();
        assert!(windows.registration_start.is_some());
        assert_eq!(
            windows.registration_end.map(|t| t.epoch_millis()),
            Some(1_768_435_200_000)
        );
        assert_eq!(windows.hackathon_start, None);
        assert_eq!(windows.hackathon_end, None);
        assert_eq!(windows.voting_end, None);
    }

    #[test]
    fn test_raw_snake_case_alias() {
        let raw: RawTimeWindows =
            serde_json::from_str(r#"{ "hackathon_start": "2026-02-01" }"#).unwrap();
        assert!(raw.normalize().hackathon_start.is_some());
    }

    #[test]
    fn test_empty_object_is_unscheduled() {
        let raw: RawTimeWindows = serde_json::from_str("{}").unwrap();
        assert!(raw.normalize().is_unscheduled());
    }

    #[test]
    fn test_bounds_order() {
        let names: Vec<_> = HackathonTimeWindows::default()
            .bounds()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(
            names,
            [
                "registration_start",
                "registration_end",
                "hackathon_start",
                "hackathon_end",
                "voting_start",
                "voting_end"
            ]
        );
    }
}
