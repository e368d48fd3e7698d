//! # List Classifiers
//!
//! Pure, order-preserving filters over hackathon lists. Each takes anything
//! iterable over `&Hackathon` and returns `Vec<&Hackathon>`, so filters nest
//! and nesting is logical AND:
//!
//! ```ignore
//! let shown = filter_by_minimum_prize(filter_accepting_submissions(&all, now), 10_000.0);
//! ```
//!
//! Status-based filters take a [`Snapshot`] (or a bare `Timestamp`). Pass
//! the same one to every filter in a pass.

use hx_lifecycle::LifecycleStatus;

use crate::hackathon::Hackathon;
use crate::query::Snapshot;

/// Hackathons split into the two explore-page tabs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhasePartition<'a> {
    /// Upcoming or running.
    pub live: Vec<&'a Hackathon>,
    /// Judging, voting, or ended.
    pub past: Vec<&'a Hackathon>,
}

/// Split into live and past in one pass. Every input lands in exactly one
/// side.
pub fn partition_by_phase<'a, I>(hackathons: I, at: impl Into<Snapshot>) -> PhasePartition<'a>
where
    I: IntoIterator<Item = &'a Hackathon>,
{
    let snapshot = at.into();
    let (live, past): (Vec<&'a Hackathon>, Vec<&'a Hackathon>) = hackathons
        .into_iter()
        .partition(|h| snapshot.status_of(h).accepts_submissions());
    PhasePartition { live, past }
}

/// Keep hackathons that still accept submissions: Coming Soon through Live.
pub fn filter_accepting_submissions<'a, I>(hackathons: I, at: impl Into<Snapshot>) -> Vec<&'a Hackathon>
where
    I: IntoIterator<Item = &'a Hackathon>,
{
    filter_by_status(hackathons, at.into(), LifecycleStatus::accepts_submissions)
}

/// Keep hackathons whose hacking phase is over.
pub fn filter_past_or_judging<'a, I>(hackathons: I, at: impl Into<Snapshot>) -> Vec<&'a Hackathon>
where
    I: IntoIterator<Item = &'a Hackathon>,
{
    filter_by_status(hackathons, at.into(), LifecycleStatus::is_past_or_judging)
}

/// Keep hackathons with registration currently open.
pub fn filter_accepting_registrations<'a, I>(
    hackathons: I,
    at: impl Into<Snapshot>,
) -> Vec<&'a Hackathon>
where
    I: IntoIterator<Item = &'a Hackathon>,
{
    filter_by_status(hackathons, at.into(), LifecycleStatus::accepts_registrations)
}

/// Keep hackathons whose derived status equals `status`.
pub fn filter_by_exact_status<'a, I>(
    hackathons: I,
    status: LifecycleStatus,
    at: impl Into<Snapshot>,
) -> Vec<&'a Hackathon>
where
    I: IntoIterator<Item = &'a Hackathon>,
{
    filter_by_status(hackathons, at.into(), |s| *s == status)
}

/// Keep hackathons whose prize total is at least `threshold`.
pub fn filter_by_minimum_prize<'a, I>(hackathons: I, threshold: f64) -> Vec<&'a Hackathon>
where
    I: IntoIterator<Item = &'a Hackathon>,
{
    hackathons
        .into_iter()
        .filter(|h| h.total_prize() >= threshold)
        .collect()
}

/// Keep hackathons with a tech-stack entry containing `tech`, ignoring case.
/// A blank `tech` keeps everything.
pub fn filter_by_tech_stack<'a, I>(hackathons: I, tech: &str) -> Vec<&'a Hackathon>
where
    I: IntoIterator<Item = &'a Hackathon>,
{
    let needle = tech.trim().to_lowercase();
    if needle.is_empty() {
        return hackathons.into_iter().collect();
    }
    hackathons
        .into_iter()
        .filter(|h| {
            h.tech_stack
                .iter()
                .any(|entry| entry.to_lowercase().contains(&needle))
        })
        .collect()
}

fn filter_by_status<'a, I>(
    hackathons: I,
    snapshot: Snapshot,
    keep: impl Fn(&LifecycleStatus) -> bool,
) -> Vec<&'a Hackathon>
where
    I: IntoIterator<Item = &'a Hackathon>,
{
    let kept: Vec<&'a Hackathon> = hackathons
        .into_iter()
        .filter(|h| keep(&snapshot.status_of(h)))
        .collect();
    tracing::trace!(now = %snapshot.now, kept = kept.len(), "status filter applied");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prize::PrizeCohort;
    use hx_core::{HackathonId, Timestamp};
    use hx_lifecycle::HackathonTimeWindows;

    const DAY_MS: i64 = 86_400_000;
    const BASE_MS: i64 = 1_767_225_600_000;

    fn day(n: i64) -> Timestamp {
        Timestamp::from_epoch_millis(BASE_MS + n * DAY_MS).unwrap()
    }

    fn hackathon(title: &str, hacking: Option<(i64, i64)>, tech: &[&str], prizes: &[&str]) -> Hackathon {
        Hackathon {
            id: HackathonId::new(),
            title: title.to_string(),
            tagline: None,
            organizer: None,
            tech_stack: tech.iter().map(|t| t.to_string()).collect(),
            windows: HackathonTimeWindows {
                hackathon_start: hacking.map(|(s, _)| day(s)),
                hackathon_end: hacking.map(|(_, e)| day(e)),
                ..Default::default()
            },
            prize_cohorts: prizes.iter().map(|p| PrizeCohort::new("cohort", *p)).collect(),
        }
    }

    fn fixture() -> Vec<Hackathon> {
        vec![
            hackathon("upcoming-rich", Some((5, 7)), &["Rust", "WASM"], &["$10,000", "2500"]),
            hackathon("running-poor", Some((-1, 1)), &["Next.js"], &["500"]),
            hackathon("over-rich", Some((-9, -7)), &["TypeScript", "Solidity"], &["$25,000"]),
            hackathon("unscheduled", None, &["rust-lang"], &["12000"]),
            hackathon("running-rich", Some((-2, 3)), &["Python"], &["$9,500", "500"]),
        ]
    }

    fn titles<'a>(hs: &[&'a Hackathon]) -> Vec<&'a str> {
        hs.iter().map(|h| h.title.as_str()).collect()
    }

    #[test]
    fn test_partition_by_phase() {
        let hs = fixture();
        let split = partition_by_phase(&hs, day(0));
        assert_eq!(titles(&split.live), ["upcoming-rich", "running-poor", "running-rich"]);
        assert_eq!(titles(&split.past), ["over-rich", "unscheduled"]);
    }

    #[test]
    fn test_accepting_and_past_are_complements() {
        let hs = fixture();
        let now = day(0);
        let accepting = filter_accepting_submissions(&hs, now);
        let past = filter_past_or_judging(&hs, now);
        assert_eq!(accepting.len() + past.len(), hs.len());
        assert!(accepting.iter().all(|a| !past.iter().any(|p| p.id == a.id)));
    }

    #[test]
    fn test_unscheduled_is_never_accepting() {
        let hs = fixture();
        for n in [-100, 0, 100] {
            assert!(!titles(&filter_accepting_submissions(&hs, day(n))).contains(&"unscheduled"));
        }
    }

    #[test]
    fn test_accepting_registrations() {
        let mut hs = fixture();
        hs[0].windows.registration_start = Some(day(-3));
        hs[0].windows.registration_end = Some(day(3));
        assert_eq!(
            titles(&filter_accepting_registrations(&hs, day(0))),
            ["upcoming-rich"]
        );
    }

    #[test]
    fn test_minimum_prize_is_inclusive() {
        let hs = fixture();
        assert_eq!(
            titles(&filter_by_minimum_prize(&hs, 10_000.0)),
            ["upcoming-rich", "over-rich", "unscheduled", "running-rich"]
        );
        assert_eq!(titles(&filter_by_minimum_prize(&hs, 25_000.0)), ["over-rich"]);
    }

    #[test]
    fn test_tech_stack_substring_case_insensitive() {
        let hs = fixture();
        assert_eq!(titles(&filter_by_tech_stack(&hs, "RUST")), ["upcoming-rich", "unscheduled"]);
        assert_eq!(titles(&filter_by_tech_stack(&hs, "script")), ["over-rich"]);
        assert_eq!(filter_by_tech_stack(&hs, "  ").len(), hs.len());
        assert!(filter_by_tech_stack(&hs, "cobol").is_empty());
    }

    #[test]
    fn test_exact_status() {
        let hs = fixture();
        assert_eq!(
            titles(&filter_by_exact_status(&hs, LifecycleStatus::Live, day(0))),
            ["running-poor", "running-rich"]
        );
        assert_eq!(
            titles(&filter_by_exact_status(&hs, LifecycleStatus::ComingSoon, day(0))),
            ["upcoming-rich"]
        );
    }

    #[test]
    fn test_filters_compose_and_commute() {
        let hs = fixture();
        let now = day(0);
        let a = filter_by_minimum_prize(filter_accepting_submissions(&hs, now), 10_000.0);
        let b = filter_accepting_submissions(filter_by_minimum_prize(&hs, 10_000.0), now);
        assert_eq!(a, b);
        assert_eq!(titles(&a), ["upcoming-rich", "running-rich"]);
    }

    #[test]
    fn test_filters_preserve_order() {
        let hs = fixture();
        let reversed: Vec<&Hackathon> = hs.iter().rev().collect();
        let kept = filter_by_minimum_prize(reversed, 0.0);
        assert_eq!(
            titles(&kept),
            ["running-rich", "unscheduled", "over-rich", "running-poor", "upcoming-rich"]
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arbitrary_hackathon() -> impl Strategy<Value = Hackathon> {
            (
                prop::option::of((-20i64..20, 0i64..10)),
                prop::sample::subsequence(vec!["Rust", "Go", "React", "Solidity"], 0..4),
                prop::collection::vec(0u32..30_000, 0..3),
            )
                .prop_map(|(hacking, tech, prizes)| {
                    let prizes: Vec<String> = prizes.iter().map(|p| format!("${p}")).collect();
                    let prizes: Vec<&str> = prizes.iter().map(String::as_str).collect();
                    hackathon(
                        "generated",
                        hacking.map(|(s, len)| (s, s + len)),
                        &tech,
                        &prizes,
                    )
                })
        }

        proptest! {
            /// Nesting order of the prize and submission filters does not matter.
            #[test]
            fn prize_and_phase_filters_commute(
                hs in prop::collection::vec(arbitrary_hackathon(), 0..12),
                now in -30i64..30,
                threshold in 0u32..40_000,
            ) {
                let t = f64::from(threshold);
                let a = filter_by_minimum_prize(filter_accepting_submissions(&hs, day(now)), t);
                let b = filter_accepting_submissions(filter_by_minimum_prize(&hs, t), day(now));
                prop_assert_eq!(a, b);
            }

            /// The partition covers the input exactly once, in order.
            #[test]
            fn partition_is_exhaustive(
                hs in prop::collection::vec(arbitrary_hackathon(), 0..12),
                now in -30i64..30,
            ) {
                let split = partition_by_phase(&hs, day(now));
                prop_assert_eq!(split.live.len() + split.past.len(), hs.len());
                prop_assert_eq!(split.live, filter_accepting_submissions(&hs, day(now)));
                prop_assert_eq!(split.past, filter_past_or_judging(&hs, day(now)));
            }
        }
    }
}
