//! # API Route Modules
//!
//! - `hackathons`: explore listing, creation, per-hackathon detail and
//!   status.
//! - `dashboard`: live/past partition, open registrations, and status
//!   counts in one response.

pub mod dashboard;
pub mod hackathons;
