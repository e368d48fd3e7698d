//! # hx-catalog: Hackathon Listings
//!
//! Everything a listing view needs on top of the lifecycle engine:
//!
//! - [`hackathon`]: the [`Hackathon`] record and its provider-shaped input.
//! - [`prize`]: prize cohorts and [`total_prize()`].
//! - [`filter`]: order-preserving classifiers that compose by nesting.
//! - [`query`]: [`ExploreQuery`], [`Snapshot`], and per-item views.
//! - [`catalog`]: JSON/YAML catalog documents.
//!
//! Every status-based function takes a [`Snapshot`] (or a bare
//! [`Timestamp`](hx_core::Timestamp), which converts into one), so one
//! listing pass is judged against one instant.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod hackathon;
mod lenient;
pub mod prize;
pub mod query;

pub use catalog::{load_catalog, parse_catalog, CatalogFormat};
pub use error::CatalogError;
pub use filter::{
    filter_accepting_registrations, filter_accepting_submissions, filter_by_exact_status,
    filter_by_minimum_prize, filter_by_tech_stack, filter_past_or_judging, partition_by_phase,
    PhasePartition,
};
pub use hackathon::{Hackathon, HackathonInput};
pub use prize::{parse_prize_amount, total_prize, PrizeAmount, PrizeCohort};
pub use query::{evaluate, status_counts, ExploreQuery, HackathonView, Phase, Snapshot};
