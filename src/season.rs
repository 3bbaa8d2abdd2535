// SPDX-License-Identifier: AGPL-3.0-or-later

//! Liturgical seasons of the 1962 calendar.
//!
//! A calendar year is partitioned into nine [`LiturgicalSeason`]s.  Most
//! boundaries are Easter-relative; the Christmas cycle (Advent and
//! Christmastide) is anchored on December 25 and spills across the civil
//! year seam, so a date lookup must consult up to three per-year tables
//! (the date's year, the year before and the year after).

use chrono::{Datelike, Duration, NaiveDate};
use strum::EnumIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::celebration::Color;
use crate::easter::easter;

/// The nine seasons of the 1962 liturgical year, in liturgical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SeasonKind {
    Advent,
    Christmastide,
    Epiphanytide,
    Septuagesima,
    Lent,
    Passiontide,
    Eastertide,
    PentecostOctave,
    TimeAfterPentecost,
}

impl SeasonKind {
    /// Stable kebab-case identifier.
    pub const fn id(self) -> &'static str {
        match self {
            SeasonKind::Advent => "advent",
            SeasonKind::Christmastide => "christmastide",
            SeasonKind::Epiphanytide => "epiphanytide",
            SeasonKind::Septuagesima => "septuagesima",
            SeasonKind::Lent => "lent",
            SeasonKind::Passiontide => "passiontide",
            SeasonKind::Eastertide => "eastertide",
            SeasonKind::PentecostOctave => "pentecost-octave",
            SeasonKind::TimeAfterPentecost => "time-after-pentecost",
        }
    }

    /// English display name.
    pub const fn name(self) -> &'static str {
        match self {
            SeasonKind::Advent => "Advent",
            SeasonKind::Christmastide => "Christmastide",
            SeasonKind::Epiphanytide => "Epiphanytide",
            SeasonKind::Septuagesima => "Septuagesima",
            SeasonKind::Lent => "Lent",
            SeasonKind::Passiontide => "Passiontide",
            SeasonKind::Eastertide => "Eastertide",
            SeasonKind::PentecostOctave => "Pentecost Octave",
            SeasonKind::TimeAfterPentecost => "Time after Pentecost",
        }
    }

    /// Default vestment color of the season.
    pub const fn color(self) -> Color {
        match self {
            SeasonKind::Advent => Color::Purple,
            SeasonKind::Christmastide => Color::White,
            SeasonKind::Epiphanytide => Color::Green,
            SeasonKind::Septuagesima => Color::Purple,
            SeasonKind::Lent => Color::Purple,
            SeasonKind::Passiontide => Color::Purple,
            SeasonKind::Eastertide => Color::White,
            SeasonKind::PentecostOctave => Color::Red,
            SeasonKind::TimeAfterPentecost => Color::Green,
        }
    }
}

/// A dated season instance: one row of a per-year season table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LiturgicalSeason {
    pub kind: SeasonKind,
    /// First day of the season, inclusive.
    pub start: NaiveDate,
    /// Last day of the season, inclusive.
    pub end: NaiveDate,
    pub color: Color,
}

impl LiturgicalSeason {
    fn new(kind: SeasonKind, start: NaiveDate, end: NaiveDate) -> Self {
        LiturgicalSeason {
            kind,
            start,
            end,
            color: kind.color(),
        }
    }

    /// English display name of the season.
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Whether `date` falls within the season (inclusive bounds).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// First Sunday of Advent for `year`: the fourth Sunday before Christmas,
/// i.e. the Sunday falling 22 to 28 days before December 25.
pub fn advent_start(year: i32) -> NaiveDate {
    let christmas = ymd(year, 12, 25);
    let weekday = christmas.weekday().num_days_from_sunday() as i64;
    // Sunday strictly before Christmas is 1..=7 days back, then three more weeks.
    let days_back = 22 + (weekday + 6) % 7;
    christmas - Duration::days(days_back)
}

/// Season table for `year`: the nine seasons in liturgical order.
///
/// The table is anchored on Easter of `year` and on the Christmas cycle
/// ending that civil year, so its coverage runs from January 6 of `year`
/// through January 5 of `year + 1`; January 1–5 of `year` itself belongs
/// to the previous year's Christmastide.
pub fn seasons_for_year(year: i32) -> Vec<LiturgicalSeason> {
    let easter = easter(year);
    let advent = advent_start(year);
    let septuagesima = easter - Duration::days(63);
    let lent = easter - Duration::days(46);
    let passiontide = easter - Duration::days(14);
    let pentecost_octave = easter + Duration::days(49);
    let time_after_pentecost = easter + Duration::days(56);

    vec![
        LiturgicalSeason::new(SeasonKind::Advent, advent, ymd(year, 12, 24)),
        LiturgicalSeason::new(SeasonKind::Christmastide, ymd(year, 12, 25), ymd(year + 1, 1, 5)),
        LiturgicalSeason::new(
            SeasonKind::Epiphanytide,
            ymd(year, 1, 6),
            septuagesima - Duration::days(1),
        ),
        LiturgicalSeason::new(
            SeasonKind::Septuagesima,
            septuagesima,
            lent - Duration::days(1),
        ),
        LiturgicalSeason::new(SeasonKind::Lent, lent, passiontide - Duration::days(1)),
        LiturgicalSeason::new(
            SeasonKind::Passiontide,
            passiontide,
            easter - Duration::days(1),
        ),
        LiturgicalSeason::new(
            SeasonKind::Eastertide,
            easter,
            pentecost_octave - Duration::days(1),
        ),
        LiturgicalSeason::new(
            SeasonKind::PentecostOctave,
            pentecost_octave,
            time_after_pentecost - Duration::days(1),
        ),
        LiturgicalSeason::new(
            SeasonKind::TimeAfterPentecost,
            time_after_pentecost,
            advent - Duration::days(1),
        ),
    ]
}

/// The season containing `date`.
///
/// Searches the date's own year table first, then the previous year's
/// (January 1–5 belongs to the previous Christmastide), then the next
/// year's.  The three tables partition every Gregorian date, so a triple
/// miss is an internal invariant violation and panics.
pub fn season_for_date(date: NaiveDate) -> LiturgicalSeason {
    for year in [date.year(), date.year() - 1, date.year() + 1] {
        if let Some(season) = seasons_for_year(year).into_iter().find(|s| s.contains(date)) {
            return season;
        }
    }
    unreachable!("no liturgical season covers {date}; the season table is defective")
}

/// First Sunday strictly after September 14, anchoring the September Ember
/// week.
pub(crate) fn september_ember_sunday(year: i32) -> NaiveDate {
    let holy_cross = ymd(year, 9, 14);
    let weekday = holy_cross.weekday().num_days_from_sunday() as i64;
    holy_cross + Duration::days(7 - weekday)
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixed month-day is always valid")
}
