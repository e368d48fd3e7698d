//! # hx-lifecycle: Hackathon Lifecycle Engine
//!
//! A hackathon has no stored status. Its status is a pure function of its
//! configured time windows and an instant supplied by the caller:
//!
//! ```text
//! Coming Soon ─▶ Registration Open ─▶ Registration Closed ─▶ Submission Starting
//!     ─▶ Live ─▶ Submission Ended ─▶ Judging Starting ─▶ Voting ─▶ Ended
//! ```
//!
//! ## Modules
//!
//! - **Windows** (`windows.rs`): raw provider-shaped windows and their
//!   normalized form.
//! - **Status** (`status.rs`): the [`LifecycleStatus`] enumeration,
//!   [`derive_status()`], and [`next_transition()`].
//! - **Schedule** (`schedule.rs`): ordering validation used when a hackathon
//!   is created. Derivation never consults it.
//!
//! ## Design
//!
//! Every function takes `now` explicitly. Callers sample the clock once per
//! evaluation pass so that all hackathons in one listing are judged against
//! the same instant.

pub mod schedule;
pub mod status;
pub mod windows;

pub use schedule::{validate_schedule, ScheduleError};
pub use status::{
    derive_status, derive_status_with, next_transition, LifecycleStatus, PhaseBuffers,
    StatusParseError, Transition,
};
pub use windows::{HackathonTimeWindows, RawTimeWindows};
