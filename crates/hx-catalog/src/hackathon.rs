//! # Hackathon Record
//!
//! [`HackathonInput`] is the provider/wire shape: camelCase keys, schedule
//! fields inline, dates in any representation. [`Hackathon`] is the
//! normalized record the rest of the stack works with.

use hx_core::{HackathonId, Timestamp};
use hx_lifecycle::{HackathonTimeWindows, LifecycleStatus, PhaseBuffers, RawTimeWindows};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lenient;
use crate::prize::{total_prize, PrizeCohort};

/// Hackathon as supplied by a data provider or an API client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonInput {
    /// Existing identifier; generated when absent.
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
    #[serde(default, deserialize_with = "lenient::option")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub organizer: Option<String>,
    #[serde(default, alias = "tech_stack", deserialize_with = "lenient::or_default")]
    pub tech_stack: Vec<String>,
    #[serde(flatten)]
    pub windows: RawTimeWindows,
    #[serde(default, alias = "prize_cohorts")]
    pub prize_cohorts: Vec<PrizeCohort>,
}

/// A hackathon with a normalized schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hackathon {
    pub id: HackathonId,
    pub title: String,
    pub tagline: Option<String>,
    pub organizer: Option<String>,
    pub tech_stack: Vec<String>,
    pub windows: HackathonTimeWindows,
    pub prize_cohorts: Vec<PrizeCohort>,
}

impl Hackathon {
    /// Normalize an input record. Unparseable dates become absent windows.
    pub fn from_input(input: HackathonInput) -> Self {
        let windows = input.windows.normalize();
        Self {
            id: input.id.map(HackathonId).unwrap_or_default(),
            title: input.title,
            tagline: input.tagline,
            organizer: input.organizer,
            tech_stack: input.tech_stack,
            windows,
            prize_cohorts: input.prize_cohorts,
        }
    }

    /// Derived status at `now`.
    pub fn status_at(&self, now: Timestamp, buffers: &PhaseBuffers) -> LifecycleStatus {
        self.windows.status_at(now, buffers)
    }

    /// Sum of listed cohort amounts.
    pub fn total_prize(&self) -> f64 {
        total_prize(&self.prize_cohorts)
    }
}

impl From<HackathonInput> for Hackathon {
    fn from(input: HackathonInput) -> Self {
        Self::from_input(input)
    }
}
