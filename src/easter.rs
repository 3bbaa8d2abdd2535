// SPDX-License-Identifier: AGPL-3.0-or-later

//! Gregorian Computus and Easter-relative date arithmetic.
//!
//! Everything downstream of this module — season boundaries, the moveable
//! feast table, Ember weeks — is anchored on [`easter`].  The computation is
//! the anonymous Gregorian algorithm built on the 19-year Metonic cycle,
//! valid for any year of the Gregorian calendar (1583 onward).

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Calculates the date of Easter Sunday for a Gregorian calendar year.
///
/// Uses the anonymous Gregorian (Meeus/Butcher) Computus with integer
/// division throughout.  The result always falls between March 22 and
/// April 25 inclusive.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ordo::easter;
///
/// assert_eq!(easter(2025), NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// ```
pub fn easter(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("Computus always yields a valid March or April date")
}

/// Easter of `year` shifted by `offset_days`.  Negative offsets precede
/// Easter.
pub fn date_relative_to_easter(year: i32, offset_days: i64) -> NaiveDate {
    easter(year) + Duration::days(offset_days)
}

/// Signed day difference between `date` and Easter of `date`'s year.
///
/// Negative before Easter, zero on Easter Sunday, positive after.
pub fn days_from_easter(date: NaiveDate) -> i64 {
    date.signed_duration_since(easter(date.year())).num_days()
}

/// Whether `date` is Easter Sunday of its own year.
pub fn is_easter_sunday(date: NaiveDate) -> bool {
    days_from_easter(date) == 0
}

/// Easter Sunday for every year in `first_year..=last_year`.
pub fn easter_range(first_year: i32, last_year: i32) -> BTreeMap<i32, NaiveDate> {
    (first_year..=last_year)
        .map(|year| (year, easter(year)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn known_easter_dates() {
        let cases = [
            (2000, 4, 23),
            (2008, 3, 23),
            (2011, 4, 24),
            (2016, 3, 27),
            (2020, 4, 12),
            (2021, 4, 4),
            (2022, 4, 17),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
            (2027, 3, 28),
            (2030, 4, 21),
            (2038, 4, 25),
        ];
        for (year, month, day) in cases {
            assert_eq!(
                easter(year),
                NaiveDate::from_ymd_opt(year, month, day).unwrap(),
                "Easter {}",
                year
            );
        }
    }

    #[test]
    fn easter_bounds_and_weekday_over_broad_range() {
        for year in 1583..=2300 {
            let date = easter(year);
            let month_day = (date.month(), date.day());
            assert!(
                month_day >= (3, 22) && month_day <= (4, 25),
                "Easter {} out of bounds: {}",
                year,
                date
            );
            assert_eq!(date.weekday(), Weekday::Sun, "Easter {} not a Sunday", year);
            assert!(is_easter_sunday(date));
        }
    }

    #[test]
    fn relative_dates_and_signed_offsets() {
        // Ash Wednesday 2025 = Easter − 46 = March 5.
        let ash_wednesday = date_relative_to_easter(2025, -46);
        assert_eq!(ash_wednesday, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(days_from_easter(ash_wednesday), -46);

        // Pentecost 2025 = Easter + 49 = June 8.
        let pentecost = date_relative_to_easter(2025, 49);
        assert_eq!(pentecost, NaiveDate::from_ymd_opt(2025, 6, 8).unwrap());
        assert_eq!(days_from_easter(pentecost), 49);
    }

    #[test]
    fn easter_range_maps_each_year() {
        let range = easter_range(2023, 2025);
        assert_eq!(range.len(), 3);
        assert_eq!(range[&2023], NaiveDate::from_ymd_opt(2023, 4, 9).unwrap());
        assert_eq!(range[&2024], NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(range[&2025], NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
    }

    #[test]
    fn is_easter_sunday_rejects_neighbors() {
        let easter_2025 = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();
        assert!(is_easter_sunday(easter_2025));
        assert!(!is_easter_sunday(easter_2025 - Duration::days(1)));
        assert!(!is_easter_sunday(easter_2025 + Duration::days(7)));
    }
}
