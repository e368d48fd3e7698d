//! # Lifecycle Status Derivation
//!
//! Maps a hackathon's windows and an instant to exactly one
//! [`LifecycleStatus`]. The mapping is a list of ordered guards, each an
//! upper bound paired with the status that holds before it:
//!
//! ```text
//!  #  bound                                   status while now < bound
//!  1  registration_start                      Coming Soon
//!  2  registration_end                        Registration Open
//!  3  hackathon_start - submission buffer     Registration Closed
//!  4  hackathon_start                         Submission Starting
//!  5  hackathon_end                           Live
//!  6  voting_start - judging buffer           Submission Ended
//!  7  voting_start                            Judging Starting
//!  8  voting_end                              Voting
//!  -  (no guard matched)                      Ended
//! ```
//!
//! The first guard whose bound is present and still ahead of `now` wins.
//! Absent bounds are skipped. Reaching guard *n* means every earlier present
//! bound has already passed, so each row reads as a `[start, end)` window.
//!
//! ## Invariants
//!
//! - Total: every input yields a status; nothing here can fail or panic.
//! - Monotone: for fixed windows, a later `now` never yields an earlier
//!   status. The guard statuses are non-decreasing in guard order and the set
//!   of guards still ahead of `now` only shrinks.
//! - Inconsistent window ordering is neither detected nor repaired here.
//!   See [`crate::schedule`] for creation-time validation.

use std::str::FromStr;

use chrono::Duration;
use hx_core::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::windows::HackathonTimeWindows;

// ─── Lifecycle Status ────────────────────────────────────────────────

/// The derived phase of a hackathon at one instant.
///
/// Variants are declared in lifecycle order; [`LifecycleStatus::rank()`]
/// and the derived `Ord` follow that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    /// Registration has not opened yet.
    ComingSoon,
    /// Registration window is open.
    RegistrationOpen,
    /// Registration closed; hacking has not begun.
    RegistrationClosed,
    /// Hacking begins within the submission-starting buffer.
    SubmissionStarting,
    /// Hacking window is open; submissions accepted.
    Live,
    /// Hacking closed; judging has not begun.
    SubmissionEnded,
    /// Voting begins within the judging-starting buffer.
    JudgingStarting,
    /// Voting window is open.
    Voting,
    /// Everything is over, or nothing was ever scheduled.
    Ended,
}

impl LifecycleStatus {
    /// All statuses in lifecycle order.
    pub fn all() -> &'static [LifecycleStatus] {
        &[
            Self::ComingSoon,
            Self::RegistrationOpen,
            Self::RegistrationClosed,
            Self::SubmissionStarting,
            Self::Live,
            Self::SubmissionEnded,
            Self::JudgingStarting,
            Self::Voting,
            Self::Ended,
        ]
    }

    /// Zero-based position in the lifecycle.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Human-readable label, as shown on hackathon cards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ComingSoon => "Coming Soon",
            Self::RegistrationOpen => "Registration Open",
            Self::RegistrationClosed => "Registration Closed",
            Self::SubmissionStarting => "Submission Starting",
            Self::Live => "Live",
            Self::SubmissionEnded => "Submission Ended",
            Self::JudgingStarting => "Judging Starting",
            Self::Voting => "Voting",
            Self::Ended => "Ended",
        }
    }

    /// The snake_case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ComingSoon => "coming_soon",
            Self::RegistrationOpen => "registration_open",
            Self::RegistrationClosed => "registration_closed",
            Self::SubmissionStarting => "submission_starting",
            Self::Live => "live",
            Self::SubmissionEnded => "submission_ended",
            Self::JudgingStarting => "judging_starting",
            Self::Voting => "voting",
            Self::Ended => "ended",
        }
    }

    /// Whether the hackathon is still upcoming or running, i.e. a project
    /// can still be created against it.
    pub fn accepts_submissions(&self) -> bool {
        matches!(
            self,
            Self::ComingSoon
                | Self::RegistrationOpen
                | Self::RegistrationClosed
                | Self::SubmissionStarting
                | Self::Live
        )
    }

    /// Whether new participants may register.
    pub fn accepts_registrations(&self) -> bool {
        matches!(self, Self::RegistrationOpen)
    }

    /// Whether hacking is over (judging, voting, or finished).
    pub fn is_past_or_judging(&self) -> bool {
        !self.accepts_submissions()
    }
}

impl std::fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unrecognized status string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown lifecycle status: {0:?}")]
pub struct StatusParseError(pub String);

impl FromStr for LifecycleStatus {
    type Err = StatusParseError;

    /// Accepts the label (`"Registration Open"`), the wire name
    /// (`"registration_open"`), or the variant name (`"RegistrationOpen"`),
    /// ignoring case, spaces, hyphens, and underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str().replace('_', "") == key)
            .ok_or_else(|| StatusParseError(s.to_string()))
    }
}

// ─── Buffers ─────────────────────────────────────────────────────────

/// Lengths of the two "starting soon" windows carved out of the tail of the
/// preceding phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseBuffers {
    /// Window before `hackathon_start` reported as Submission Starting.
    pub submission_starting: Duration,
    /// Window before `voting_start` reported as Judging Starting.
    pub judging_starting: Duration,
}

impl PhaseBuffers {
    /// Buffers given in whole minutes.
    pub fn from_minutes(submission_starting: u32, judging_starting: u32) -> Self {
        Self {
            submission_starting: Duration::minutes(i64::from(submission_starting)),
            judging_starting: Duration::minutes(i64::from(judging_starting)),
        }
    }

    /// No buffers: the starting-soon statuses are never reported.
    pub fn none() -> Self {
        Self::from_minutes(0, 0)
    }
}

impl Default for PhaseBuffers {
    fn default() -> Self {
        Self::from_minutes(60, 60)
    }
}

// ─── Derivation ──────────────────────────────────────────────────────

/// Derive the status at `now` using [`PhaseBuffers::default()`].
pub fn derive_status(windows: &HackathonTimeWindows, now: Timestamp) -> LifecycleStatus {
    derive_status_with(windows, now, &PhaseBuffers::default())
}

/// Derive the status at `now` with explicit buffers.
pub fn derive_status_with(
    windows: &HackathonTimeWindows,
    now: Timestamp,
    buffers: &PhaseBuffers,
) -> LifecycleStatus {
    guards(windows, buffers)
        .into_iter()
        .find_map(|(bound, status)| match bound {
            Some(bound) if now < bound => Some(status),
            _ => None,
        })
        .unwrap_or(LifecycleStatus::Ended)
}

/// The ordered guard table for one set of windows.
fn guards(
    windows: &HackathonTimeWindows,
    buffers: &PhaseBuffers,
) -> [(Option<Timestamp>, LifecycleStatus); 8] {
    use LifecycleStatus::*;

    // With no registration end, registration runs until the submission
    // buffer; with no registration at all the hackathon is just upcoming.
    let before_hacking = if windows.registration_end.is_some() {
        RegistrationClosed
    } else if windows.registration_start.is_some() {
        RegistrationOpen
    } else {
        ComingSoon
    };

    [
        (windows.registration_start, ComingSoon),
        (windows.registration_end, RegistrationOpen),
        (
            windows
                .hackathon_start
                .map(|start| start.saturating_sub(buffers.submission_starting)),
            before_hacking,
        ),
        (windows.hackathon_start, SubmissionStarting),
        (windows.hackathon_end, Live),
        (
            windows
                .voting_start
                .map(|start| start.saturating_sub(buffers.judging_starting)),
            SubmissionEnded,
        ),
        (windows.voting_start, JudgingStarting),
        (windows.voting_end, Voting),
    ]
}

// ─── Next Transition ─────────────────────────────────────────────────

/// The next change of derived status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Instant at which the new status takes effect.
    pub at: Timestamp,
    /// Status from `at` onward.
    pub status: LifecycleStatus,
}

/// When the status derived at `now` will next change, and to what.
///
/// Returns `None` if no later guard bound changes the status (typically
/// once the hackathon has ended).
pub fn next_transition(
    windows: &HackathonTimeWindows,
    now: Timestamp,
    buffers: &PhaseBuffers,
) -> Option<Transition> {
    let current = derive_status_with(windows, now, buffers);

    let mut upcoming: Vec<Timestamp> = guards(windows, buffers)
        .iter()
        .filter_map(|(bound, _)| *bound)
        .filter(|bound| *bound > now)
        .collect();
    upcoming.sort();
    upcoming.dedup();

    upcoming.into_iter().find_map(|at| {
        let status = derive_status_with(windows, at, buffers);
        (status != current).then_some(Transition { at, status })
    })
}
