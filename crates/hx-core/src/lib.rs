//! # hx-core: Foundational Types for the Hackathon Stack
//!
//! Every other `hx-*` crate depends on this one; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **One comparable instant.** All schedule arithmetic goes through
//!    [`Timestamp`]: UTC, millisecond precision, totally ordered.
//!
//! 2. **Tolerant boundary, strict interior.** Data providers hand us dates as
//!    ISO strings, epoch milliseconds, native date-times, or nothing at all.
//!    [`RawInstant`] captures that shape and [`normalize()`] collapses it to
//!    `Option<Timestamp>`. Nothing past the normalizer sees a string date.
//!
//! 3. **Newtype identifiers.** [`HackathonId`] instead of a bare `Uuid`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hx-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod temporal;

pub use error::HxError;
pub use identity::HackathonId;
pub use temporal::{normalize, normalize_opt, RawInstant, Timestamp};
