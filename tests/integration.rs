use chrono::{Datelike, Duration, NaiveDate, Weekday};
use ordo::{
    determine_precedence, easter, is_easter_sunday, liturgical_day, liturgical_days_in_range,
    sanctoral_celebration, season_for_date, seasons_for_year, temporal_celebration, Color,
    PrecedenceAction, Rank, SeasonKind,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn computus_matches_published_easter_dates() {
    assert_eq!(easter(2023), ymd(2023, 4, 9));
    assert_eq!(easter(2024), ymd(2024, 3, 31));
    assert_eq!(easter(2025), ymd(2025, 4, 20));
    assert!(is_easter_sunday(easter(2025)));
}

#[test]
fn easter_stays_in_bounds_for_two_centuries() {
    for year in 1900..=2100 {
        let date = easter(year);
        let month_day = (date.month(), date.day());
        assert!(month_day >= (3, 22) && month_day <= (4, 25), "{}", date);
        assert_eq!(date.weekday(), Weekday::Sun);
    }
}

#[test]
fn seasons_partition_the_year_across_the_seam() {
    // Every date of 2025 is covered by exactly one season drawn from the
    // 2024, 2025 and 2026 tables.
    let tables: Vec<_> = [2024, 2025, 2026]
        .iter()
        .flat_map(|&y| seasons_for_year(y))
        .collect();
    let mut date = ymd(2025, 1, 1);
    while date <= ymd(2025, 12, 31) {
        let hits = tables.iter().filter(|s| s.contains(date)).count();
        assert_eq!(hits, 1, "{} covered {} times", date, hits);
        date += Duration::days(1);
    }
}

#[test]
fn season_lookup_handles_january_spill() {
    let season = season_for_date(ymd(2025, 1, 3));
    assert_eq!(season.kind, SeasonKind::Christmastide);
    assert_eq!(season.start.year(), 2024);
}

#[test]
fn cycle_lookups_are_referentially_transparent() {
    for date in [ymd(2025, 4, 20), ymd(2025, 8, 15), ymd(2025, 7, 8)] {
        assert_eq!(temporal_celebration(date), temporal_celebration(date));
        assert_eq!(sanctoral_celebration(date), sanctoral_celebration(date));
        assert_eq!(liturgical_day(date), liturgical_day(date));
    }
}

#[test]
fn easter_day_record_is_fully_populated() {
    let day = liturgical_day(ymd(2025, 4, 20));
    assert_eq!(day.celebration, "Easter Sunday");
    assert_eq!(day.rank.class(), 1);
    assert_eq!(day.color, Color::White);
    assert_eq!(day.display_date, "2025-04-20");
}

#[test]
fn precedence_rules_end_to_end() {
    // 1st class vs 3rd class: commemorate.
    let temporal = temporal_celebration(ymd(2025, 4, 20)); // Easter Sunday
    let sanctoral = sanctoral_celebration(ymd(2025, 1, 21)); // St. Agnes, 3rd class
    let outcome = determine_precedence(temporal, sanctoral).unwrap();
    assert_eq!(outcome.action, PrecedenceAction::Commemorate);
    assert_eq!(outcome.primary.name, "Easter Sunday");
    assert_eq!(outcome.commemorations.len(), 1);

    // 2nd class vs 4th class: suppress.
    let temporal = temporal_celebration(ymd(2025, 8, 10)); // a 2nd class Sunday
    let feria = temporal_celebration(ymd(2025, 7, 8)); // 4th class feria
    assert_eq!(temporal.as_ref().unwrap().rank, Rank::SecondClass);
    let outcome = determine_precedence(temporal, feria).unwrap();
    assert_eq!(outcome.action, PrecedenceAction::Suppress);
    assert!(outcome.commemorations.is_empty());
}

#[test]
fn commemorations_agree_with_an_independent_precedence_run() {
    let days = liturgical_days_in_range(ymd(2025, 12, 1), ymd(2025, 12, 31));
    for day in days {
        let independent = determine_precedence(
            temporal_celebration(day.date),
            sanctoral_celebration(day.date),
        )
        .unwrap();
        assert_eq!(day.celebration, independent.primary.name, "{}", day.date);
        assert_eq!(day.commemorations, independent.commemorations, "{}", day.date);
    }
}

#[test]
fn a_full_year_resolves_without_gaps() {
    let days = liturgical_days_in_range(ymd(2026, 1, 1), ymd(2026, 12, 31));
    assert_eq!(days.len(), 365);
    for day in &days {
        assert!(!day.celebration.is_empty());
        assert!(day.season.contains(day.date), "{}", day.date);
    }
}
