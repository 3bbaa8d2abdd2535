// SPDX-License-Identifier: AGPL-3.0-or-later

//! Ordo — traditional (1962) Roman liturgical calendar engine.
//!
//! Given any Gregorian calendar date, this crate resolves the applicable
//! liturgical observance: the season the date falls in, the fixed-date or
//! moveable celebration that governs it, the rank and color that celebration
//! carries, and which competing celebrations are reduced to commemorations
//! or suppressed.
//!
//! # Core types
//!
//! - [`LiturgicalDay`] — the externally-consumed result record.
//! - [`Celebration`] — one temporal or sanctoral candidate for a date.
//! - [`Commemoration`] — the reduced projection of a displaced celebration.
//! - [`LiturgicalSeason`] / [`SeasonKind`] — a dated season instance.
//! - [`Rank`] — precedence class; **smaller class number wins**.
//! - [`Color`] — liturgical vestment color.
//!
//! # Pipeline
//!
//! The components are consumed bottom-up:
//!
//! | Stage | Entry point |
//! |-------|-------------|
//! | Computus | [`easter`], [`date_relative_to_easter`], [`days_from_easter`] |
//! | Seasons | [`seasons_for_year`], [`season_for_date`] |
//! | Sanctoral cycle | [`sanctoral_celebration`], [`all_sanctoral_celebrations`] |
//! | Temporal cycle | [`temporal_celebration`] |
//! | Precedence | [`determine_precedence`], [`should_transfer`], [`transfer_date`] |
//! | Orchestration | [`liturgical_day`] and the batch variants |
//!
//! Every public function is a pure function of its date/year argument plus
//! one static read-only sanctoral table: identical input always yields a
//! structurally identical output, and everything is freely callable from
//! multiple threads without synchronization.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use ordo::{liturgical_day, Color, Rank};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();
//! let day = liturgical_day(date);
//!
//! assert_eq!(day.celebration, "Easter Sunday");
//! assert_eq!(day.rank, Rank::FirstClass);
//! assert_eq!(day.color, Color::White);
//! ```

mod celebration;
mod day;
mod easter;
mod error;
mod precedence;
mod sanctoral;
mod season;
mod temporal;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use celebration::{Celebration, Color, Commemoration, Cycle, Rank};
pub use day::{
    liturgical_day, liturgical_day_at, liturgical_days_in_month, liturgical_days_in_range,
    liturgical_days_in_week, liturgical_days_in_year, LiturgicalDay,
};
pub use easter::{date_relative_to_easter, days_from_easter, easter, easter_range, is_easter_sunday};
pub use error::{OrdoError, Result};
pub use precedence::{
    determine_precedence, should_transfer, transfer_date, PrecedenceAction, PrecedenceOutcome,
    TRANSFER_WINDOW_DAYS,
};
pub use sanctoral::{all_sanctoral_celebrations, sanctoral_celebration};
pub use season::{advent_start, season_for_date, seasons_for_year, LiturgicalSeason, SeasonKind};
pub use temporal::temporal_celebration;
