// SPDX-License-Identifier: AGPL-3.0-or-later

//! Precedence resolution between the temporal and sanctoral cycles.
//!
//! When both cycles claim a date, the higher-ranked celebration governs the
//! day and the loser is either retained as a commemoration or suppressed.
//! Two first-class celebrations cannot share a day at all: the loser must be
//! transferred to the next free date.

use chrono::{Duration, NaiveDate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::celebration::{Celebration, Commemoration, Rank};
use crate::error::{OrdoError, Result};

/// Upper bound on the forward scan in [`transfer_date`].  A transfer target
/// is always found within the following year on real calendars; the bound
/// exists so pathological occupied-date input fails instead of spinning.
pub const TRANSFER_WINDOW_DAYS: u32 = 366;

/// How the losing candidate (if any) was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrecedenceAction {
    /// Only one candidate existed; it governs the day outright.
    Primary,
    /// Both candidates were first class; the loser should be transferred.
    Transfer,
    /// The loser is retained as a commemoration.
    Commemorate,
    /// The loser was dropped entirely.
    Suppress,
}

/// The result of a precedence contest: exactly one primary celebration and
/// zero or more commemorations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PrecedenceOutcome {
    pub primary: Celebration,
    pub commemorations: Vec<Commemoration>,
    pub action: PrecedenceAction,
}

/// Resolves the temporal and sanctoral candidates for a day into a single
/// outcome.
///
/// Rank comparison is inverted: the numerically *smaller* class wins.  When
/// the ranks are exactly equal the sanctoral candidate wins; the temporal
/// cycle only prevails with a strictly higher rank.  A loser of third class
/// or better is kept as a commemoration; a fourth-class or commemoration-rank
/// loser is suppressed.  The one exception to the tie rule is a collision of
/// two first-class celebrations: the temporal day holds its date, the action
/// is [`PrecedenceAction::Transfer`], and the displaced feast is expected to
/// be moved to a free date via [`transfer_date`] rather than commemorated.
///
/// # Errors
///
/// [`OrdoError::MissingCandidates`] if both inputs are `None` — a caller
/// contract violation, since the temporal cascade always produces at least
/// a feria.
pub fn determine_precedence(
    temporal: Option<Celebration>,
    sanctoral: Option<Celebration>,
) -> Result<PrecedenceOutcome> {
    let (temporal, sanctoral) = match (temporal, sanctoral) {
        (None, None) => return Err(OrdoError::MissingCandidates),
        (Some(t), None) => {
            return Ok(PrecedenceOutcome {
                primary: t,
                commemorations: Vec::new(),
                action: PrecedenceAction::Primary,
            })
        }
        (None, Some(s)) => {
            return Ok(PrecedenceOutcome {
                primary: s,
                commemorations: Vec::new(),
                action: PrecedenceAction::Primary,
            })
        }
        (Some(t), Some(s)) => (t, s),
    };

    // Two first-class candidates cannot share the day: the temporal cycle
    // (Holy Week, the great octaves) holds its date and the fixed feast is
    // the one that moves.
    if temporal.rank == Rank::FirstClass && sanctoral.rank == Rank::FirstClass {
        return Ok(PrecedenceOutcome {
            primary: temporal,
            commemorations: Vec::new(),
            action: PrecedenceAction::Transfer,
        });
    }

    // Smaller class number outranks; ties go to the sanctoral feast.
    let (winner, loser) = if temporal.rank < sanctoral.rank {
        (temporal, sanctoral)
    } else {
        (sanctoral, temporal)
    };

    if loser.rank <= Rank::ThirdClass {
        Ok(PrecedenceOutcome {
            commemorations: vec![Commemoration::from(&loser)],
            primary: winner,
            action: PrecedenceAction::Commemorate,
        })
    } else {
        Ok(PrecedenceOutcome {
            primary: winner,
            commemorations: Vec::new(),
            action: PrecedenceAction::Suppress,
        })
    }
}

/// Whether a displaced celebration must be transferred to a later date
/// instead of being commemorated.  True only for first-class feasts.
pub fn should_transfer(celebration: &Celebration) -> bool {
    celebration.rank == Rank::FirstClass
}

/// First free date after `start` for a transferred celebration.
///
/// Scans forward one day at a time from `start + 1`, skipping any date in
/// `occupied`.  The scan is bounded at [`TRANSFER_WINDOW_DAYS`] probes.
///
/// # Errors
///
/// [`OrdoError::NoTransferDate`] when every probed date is occupied.
pub fn transfer_date(
    celebration: &Celebration,
    start: NaiveDate,
    occupied: &[NaiveDate],
) -> Result<NaiveDate> {
    let mut candidate = start + Duration::days(1);
    for _ in 0..TRANSFER_WINDOW_DAYS {
        if !occupied.contains(&candidate) {
            return Ok(candidate);
        }
        candidate += Duration::days(1);
    }
    Err(OrdoError::NoTransferDate {
        name: celebration.name.clone(),
        start,
        window: TRANSFER_WINDOW_DAYS,
    })
}
