//! # Explore Queries
//!
//! [`Snapshot`] fixes the evaluation instant (and buffers) for one listing
//! pass. [`ExploreQuery`] bundles the optional explore-page filters and
//! applies them by sequential AND. [`HackathonView`] is a hackathon paired
//! with what was derived for it in that pass.

use std::collections::BTreeMap;
use std::str::FromStr;

use hx_core::Timestamp;
use hx_lifecycle::{LifecycleStatus, PhaseBuffers};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::filter::{
    filter_accepting_registrations, filter_accepting_submissions, filter_by_exact_status,
    filter_by_minimum_prize, filter_by_tech_stack, filter_past_or_judging,
};
use crate::hackathon::Hackathon;

// ─── Snapshot ────────────────────────────────────────────────────────

/// One evaluation instant, shared by every item in a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub now: Timestamp,
    pub buffers: PhaseBuffers,
}

impl Snapshot {
    /// Snapshot at `now` with default buffers.
    pub fn new(now: Timestamp) -> Self {
        Self::with_buffers(now, PhaseBuffers::default())
    }

    pub fn with_buffers(now: Timestamp, buffers: PhaseBuffers) -> Self {
        Self { now, buffers }
    }

    /// Sample the wall clock once.
    pub fn now() -> Self {
        Self::new(Timestamp::now())
    }

    /// Derived status of one hackathon at this snapshot.
    pub fn status_of(&self, hackathon: &Hackathon) -> LifecycleStatus {
        hackathon.status_at(self.now, &self.buffers)
    }
}

impl From<Timestamp> for Snapshot {
    fn from(now: Timestamp) -> Self {
        Self::new(now)
    }
}

// ─── Phase ───────────────────────────────────────────────────────────

/// Coarse listing tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Upcoming or running: still accepting submissions.
    Live,
    /// Hacking over: judging, voting, or ended.
    Past,
    /// Registration currently open.
    Registration,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Past => "past",
            Self::Registration => "registration",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" | "upcoming" | "submissions" => Ok(Self::Live),
            "past" | "judging" => Ok(Self::Past),
            "registration" | "open" => Ok(Self::Registration),
            _ => Err(CatalogError::UnknownPhase(s.to_string())),
        }
    }
}

// ─── Explore Query ───────────────────────────────────────────────────

/// Optional explore-page filters. Absent fields do not filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExploreQuery {
    pub phase: Option<Phase>,
    pub status: Option<LifecycleStatus>,
    pub tech: Option<String>,
    pub min_prize: Option<f64>,
}

impl ExploreQuery {
    /// Apply phase, status, tech, then minimum prize. Input order is kept.
    pub fn apply<'a, I>(&self, hackathons: I, snapshot: Snapshot) -> Vec<&'a Hackathon>
    where
        I: IntoIterator<Item = &'a Hackathon>,
    {
        let mut selected: Vec<&'a Hackathon> = match self.phase {
            Some(Phase::Live) => filter_accepting_submissions(hackathons, snapshot),
            Some(Phase::Past) => filter_past_or_judging(hackathons, snapshot),
            Some(Phase::Registration) => filter_accepting_registrations(hackathons, snapshot),
            None => hackathons.into_iter().collect(),
        };
        if let Some(status) = self.status {
            selected = filter_by_exact_status(selected, status, snapshot);
        }
        if let Some(tech) = &self.tech {
            selected = filter_by_tech_stack(selected, tech);
        }
        if let Some(threshold) = self.min_prize {
            selected = filter_by_minimum_prize(selected, threshold);
        }
        selected
    }
}

// ─── Views ───────────────────────────────────────────────────────────

/// A hackathon with its derived status and prize total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HackathonView {
    #[serde(flatten)]
    pub hackathon: Hackathon,
    pub status: LifecycleStatus,
    pub status_label: String,
    pub total_prize: f64,
}

impl HackathonView {
    pub fn new(hackathon: &Hackathon, snapshot: Snapshot) -> Self {
        let status = snapshot.status_of(hackathon);
        Self {
            hackathon: hackathon.clone(),
            status,
            status_label: status.label().to_string(),
            total_prize: hackathon.total_prize(),
        }
    }
}

/// Views for a list, all at the same snapshot.
pub fn evaluate<'a, I>(hackathons: I, snapshot: Snapshot) -> Vec<HackathonView>
where
    I: IntoIterator<Item = &'a Hackathon>,
{
    hackathons
        .into_iter()
        .map(|h| HackathonView::new(h, snapshot))
        .collect()
}

/// Number of hackathons in each status, in lifecycle order. Statuses with no
/// hackathons are omitted.
pub fn status_counts<'a, I>(hackathons: I, snapshot: Snapshot) -> BTreeMap<LifecycleStatus, usize>
where
    I: IntoIterator<Item = &'a Hackathon>,
{
    let mut counts = BTreeMap::new();
    for hackathon in hackathons {
        *counts.entry(snapshot.status_of(hackathon)).or_insert(0) += 1;
    }
    counts
}
