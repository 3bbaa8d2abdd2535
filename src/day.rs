// SPDX-License-Identifier: AGPL-3.0-or-later

//! The externally-consumed liturgical day record and batch queries.
//!
//! [`liturgical_day`] is the orchestrator: it resolves the season and both
//! cycle candidates for a date, runs the precedence contest, and assembles
//! the single [`LiturgicalDay`] record that persistence and presentation
//! layers consume.  The batch variants iterate it once per day while sharing
//! per-year season tables across iterations — a pure, year-keyed cache local
//! to the call, so the functions stay freely callable from any thread.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::celebration::{Color, Commemoration, Rank};
use crate::error::{OrdoError, Result};
use crate::precedence::{determine_precedence, PrecedenceOutcome};
use crate::sanctoral::sanctoral_celebration;
use crate::season::{seasons_for_year, LiturgicalSeason};
use crate::temporal::{feria_of, temporal_celebration};

/// The resolved observance for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LiturgicalDay {
    pub date: NaiveDate,
    pub season: LiturgicalSeason,
    /// Name of the primary celebration governing the day.
    pub celebration: String,
    pub rank: Rank,
    pub color: Color,
    pub commemorations: Vec<Commemoration>,
    pub is_holy_day: bool,
    pub is_feast_day: bool,
    pub proper_texts: bool,
    pub common_texts: Option<String>,
    pub description: Option<String>,
    /// ISO `YYYY-MM-DD` rendering of the (timezone-naive) date.
    pub display_date: String,
}

/// Resolves the liturgical day for a calendar date.
pub fn liturgical_day(date: NaiveDate) -> LiturgicalDay {
    Resolver::new().resolve(date)
}

/// Resolves the liturgical day for a timestamp.
///
/// The instant is first normalized to its naive calendar date, so a
/// time-of-day component can never shift the result by a day.
pub fn liturgical_day_at(instant: DateTime<Utc>) -> LiturgicalDay {
    liturgical_day(instant.date_naive())
}

/// Liturgical days for every date in `start..=end` (empty when
/// `start > end`).
pub fn liturgical_days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<LiturgicalDay> {
    let mut resolver = Resolver::new();
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| resolver.resolve(date))
        .collect()
}

/// Liturgical days for every date of a month.
///
/// # Errors
///
/// [`OrdoError::InvalidDate`] if `month` is not 1–12.
pub fn liturgical_days_in_month(year: i32, month: u32) -> Result<Vec<LiturgicalDay>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(OrdoError::InvalidDate {
        year,
        month,
        day: 1,
    })?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("first of a month is always valid");
    Ok(liturgical_days_in_range(
        first,
        next_month - Duration::days(1),
    ))
}

/// Liturgical days for the seven dates starting at `start`.
pub fn liturgical_days_in_week(start: NaiveDate) -> Vec<LiturgicalDay> {
    liturgical_days_in_range(start, start + Duration::days(6))
}

/// Liturgical days for every date of a civil year.
pub fn liturgical_days_in_year(year: i32) -> Vec<LiturgicalDay> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).expect("January 1 is always valid");
    let last = NaiveDate::from_ymd_opt(year, 12, 31).expect("December 31 is always valid");
    liturgical_days_in_range(first, last)
}

/// Per-call resolution context: caches season tables by year so batch
/// queries do not recompute Easter and the nine season boundaries for every
/// single day.
struct Resolver {
    seasons: HashMap<i32, Vec<LiturgicalSeason>>,
}

impl Resolver {
    fn new() -> Self {
        Resolver {
            seasons: HashMap::new(),
        }
    }

    /// Cross-year season lookup backed by the per-year table cache.
    fn season(&mut self, date: NaiveDate) -> LiturgicalSeason {
        for year in [date.year(), date.year() - 1, date.year() + 1] {
            let table = self
                .seasons
                .entry(year)
                .or_insert_with(|| seasons_for_year(year));
            if let Some(season) = table.iter().find(|s| s.contains(date)) {
                return *season;
            }
        }
        unreachable!("no liturgical season covers {date}; the season table is defective")
    }

    fn resolve(&mut self, date: NaiveDate) -> LiturgicalDay {
        let season = self.season(date);
        let temporal = temporal_celebration(date);
        let sanctoral = sanctoral_celebration(date);

        let outcome = match (temporal, sanctoral) {
            // Defensive fallback: the temporal cascade always yields at
            // least a feria, so this branch is unreachable in practice.
            (None, None) => PrecedenceOutcome {
                primary: feria_of(date, &season),
                commemorations: Vec::new(),
                action: crate::precedence::PrecedenceAction::Primary,
            },
            (temporal, sanctoral) => determine_precedence(temporal, sanctoral)
                .expect("at least one candidate is present"),
        };

        let primary = outcome.primary;
        LiturgicalDay {
            date,
            season,
            celebration: primary.name,
            rank: primary.rank,
            color: primary.color,
            commemorations: outcome.commemorations,
            is_holy_day: primary.is_holy_day,
            is_feast_day: primary.is_feast_day,
            proper_texts: primary.proper_texts,
            common_texts: primary.common_texts,
            description: primary.description,
            display_date: date.format("%Y-%m-%d").to_string(),
        }
    }
}
