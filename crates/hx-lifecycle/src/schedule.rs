//! # Schedule Validation
//!
//! Creation-time check that a hackathon's windows are in lifecycle order:
//!
//! ```text
//! registration_start <= registration_end <= hackathon_start
//!     <= hackathon_end <= voting_start <= voting_end
//! ```
//!
//! Only present bounds are compared. Status derivation never calls this;
//! a stored hackathon with a broken schedule still gets a status.

use thiserror::Error;

use crate::windows::HackathonTimeWindows;

/// Why a schedule was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A later bound comes before an earlier one.
    #[error("{later} must not be before {earlier}")]
    OutOfOrder {
        /// Field that should come first.
        earlier: &'static str,
        /// Field that is too early.
        later: &'static str,
    },

    /// A phase has an end but no start.
    #[error("{phase} window has an end but no start")]
    EndWithoutStart {
        /// Phase name (`registration`, `hackathon`, `voting`).
        phase: &'static str,
    },
}

/// Validate window ordering, reporting the first violation found.
pub fn validate_schedule(windows: &HackathonTimeWindows) -> Result<(), ScheduleError> {
    let phases = [
        ("registration", windows.registration_start, windows.registration_end),
        ("hackathon", windows.hackathon_start, windows.hackathon_end),
        ("voting", windows.voting_start, windows.voting_end),
    ];
    for (phase, start, end) in phases {
        if start.is_none() && end.is_some() {
            return Err(ScheduleError::EndWithoutStart { phase });
        }
    }

    // Adjacent present bounds suffice: ordering is transitive.
    let mut previous = None;
    for (name, bound) in windows.bounds() {
        let Some(bound) = bound else { continue };
        if let Some((earlier, earlier_bound)) = previous {
            if bound < earlier_bound {
                return Err(ScheduleError::OutOfOrder {
                    earlier,
                    later: name,
                });
            }
        }
        previous = Some((name, bound));
    }
    Ok(())
}
