// SPDX-License-Identifier: AGPL-3.0-or-later

//! Core liturgical value types: ranks, colors and celebrations.
//!
//! A [`Celebration`] is one candidate observance for a calendar date.  It
//! comes from either the temporal cycle (Easter- and Christmas-anchored
//! moveable days) or the sanctoral cycle (fixed-date saints' feasts); the
//! two are structurally identical and distinguished by the [`Cycle`] tag.
//! A [`Commemoration`] is the reduced projection of a celebration that lost
//! a precedence contest but is still remembered on the day.

use chrono::NaiveDate;
use std::fmt;
use strum::EnumIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precedence class of a celebration under the 1962 rubrics.
///
/// The numeric class is inverted with respect to importance: **a smaller
/// number outranks a larger one**.  First class (1) is the highest rank,
/// a bare commemoration (5) the lowest.  The variants are declared in
/// class order so the derived `Ord` agrees with the numeric class: for two
/// ranks `a` and `b`, `a < b` means `a` takes precedence over `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u8)]
pub enum Rank {
    /// First class: the greatest feasts and privileged days (Easter, the
    /// Sundays of Advent and Lent, holy days of obligation).
    FirstClass = 1,
    /// Second class: major feasts and ordinary Sundays.
    SecondClass = 2,
    /// Third class: lesser feasts of saints.
    ThirdClass = 3,
    /// Fourth class: ordinary ferias.
    FourthClass = 4,
    /// A commemoration only, with no liturgy of its own.
    Commemoration = 5,
}

impl Rank {
    /// The numeric class, 1 (highest precedence) through 5 (lowest).
    #[inline]
    pub const fn class(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rank::FirstClass => "1st Class",
            Rank::SecondClass => "2nd Class",
            Rank::ThirdClass => "3rd Class",
            Rank::FourthClass => "4th Class",
            Rank::Commemoration => "Commemoration",
        };
        f.write_str(label)
    }
}

/// Liturgical color of a celebration or season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    White,
    Red,
    Green,
    Purple,
    Rose,
    Black,
    Gold,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
            Color::Rose => "rose",
            Color::Black => "black",
            Color::Gold => "gold",
        };
        f.write_str(label)
    }
}

/// Which of the two cycles a celebration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Cycle {
    /// Easter- and Christmas-anchored moveable days, Sundays and ferias.
    Temporal,
    /// Fixed-date feasts of the saints.
    Sanctoral,
}

/// One candidate observance for a concrete calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Celebration {
    /// Stable kebab-case identifier, e.g. `"easter-sunday"`.
    pub id: String,
    /// English display name.
    pub name: String,
    pub rank: Rank,
    pub color: Color,
    /// The concrete date this candidate was resolved for.
    pub date: NaiveDate,
    pub cycle: Cycle,
    /// Whether the day has its own proper Mass texts.
    pub proper_texts: bool,
    /// The "common" the texts are borrowed from when there are no propers.
    pub common_texts: Option<String>,
    /// Holy day of obligation.
    pub is_holy_day: bool,
    /// A named feast, as opposed to a feria, Ember day or plain Sunday.
    pub is_feast_day: bool,
    /// Free-form note; traditionally carries the Latin title.
    pub description: Option<String>,
}

/// A demoted celebration retained alongside the day's primary one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Commemoration {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<&Celebration> for Commemoration {
    fn from(celebration: &Celebration) -> Self {
        Commemoration {
            id: celebration.id.clone(),
            name: celebration.name.clone(),
            description: celebration.description.clone(),
        }
    }
}
