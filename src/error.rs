// SPDX-License-Identifier: AGPL-3.0-or-later

//! Error type for the calendar engine.
//!
//! Almost every operation in this crate is total: season lookup, the temporal
//! cascade and the sanctoral table cannot fail for a valid Gregorian date.
//! The two fallible operations are precedence resolution called with no
//! candidates at all (a caller contract violation) and the bounded transfer
//! scan running out of free dates.

use chrono::NaiveDate;
use thiserror::Error;

/// Standard result type for the crate.
pub type Result<T> = std::result::Result<T, OrdoError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrdoError {
    /// `determine_precedence` was called with neither a temporal nor a
    /// sanctoral candidate.
    #[error("no temporal or sanctoral candidate was supplied")]
    MissingCandidates,

    /// The forward scan for a transfer target found every probed date
    /// occupied within the search window.
    #[error("no free date within {window} days after {start} to transfer {name}")]
    NoTransferDate {
        name: String,
        start: NaiveDate,
        window: u32,
    },

    /// A year/month/day triple that does not name a real calendar date.
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
