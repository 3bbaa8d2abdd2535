// SPDX-License-Identifier: AGPL-3.0-or-later

//! The temporal cycle: moveable feasts, Sundays, Ember days and ferias.
//!
//! [`temporal_celebration`] resolves a date through an ordered cascade;
//! the first stage that matches wins:
//!
//! 1. the Easter-offset moveable feast table (Holy Week, the octaves of
//!    Easter and Pentecost, Ascension, Corpus Christi, ...);
//! 2. Christ the King on the last Sunday of October;
//! 3. a synthesized Sunday with season-specific ordinal counting;
//! 4. the Ember days of the Advent, Lent and September Ember weeks (the
//!    Pentecost Ember days are already covered by the octave table);
//! 5. the ferial office of the current season.
//!
//! The ferial stage is total, so the cascade always produces a celebration;
//! the `Option` return type is the contract with the precedence resolver,
//! which treats each cycle as an optional candidate.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::celebration::{Celebration, Color, Cycle, Rank};
use crate::easter::{days_from_easter, easter};
use crate::season::{advent_start, season_for_date, september_ember_sunday, LiturgicalSeason, SeasonKind};

/// One row of the Easter-relative moveable feast table.
struct MovableFeast {
    /// Day offset from Easter Sunday; negative offsets precede Easter.
    offset: i64,
    id: &'static str,
    name: &'static str,
    rank: Rank,
    color: Color,
    is_holy_day: bool,
    description: Option<&'static str>,
}

impl MovableFeast {
    fn bind(&self, date: NaiveDate) -> Celebration {
        Celebration {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            rank: self.rank,
            color: self.color,
            date,
            cycle: Cycle::Temporal,
            proper_texts: true,
            common_texts: None,
            is_holy_day: self.is_holy_day,
            is_feast_day: true,
            description: self.description.map(str::to_owned),
        }
    }
}

const fn movable(
    offset: i64,
    id: &'static str,
    name: &'static str,
    rank: Rank,
    color: Color,
) -> MovableFeast {
    MovableFeast {
        offset,
        id,
        name,
        rank,
        color,
        is_holy_day: false,
        description: None,
    }
}

const fn movable_holy_day(
    offset: i64,
    id: &'static str,
    name: &'static str,
    color: Color,
) -> MovableFeast {
    MovableFeast {
        is_holy_day: true,
        ..movable(offset, id, name, Rank::FirstClass, color)
    }
}

impl MovableFeast {
    const fn described(self, text: &'static str) -> Self {
        Self {
            description: Some(text),
            ..self
        }
    }
}

/// The moveable feast table, ordered by offset.  Offsets are unique
/// (asserted in tests), so lookup is a plain equality scan.
#[rustfmt::skip]
const MOVABLE_FEASTS: &[MovableFeast] = &[
    movable(-63, "septuagesima-sunday", "Septuagesima Sunday", Rank::SecondClass, Color::Purple),
    movable(-56, "sexagesima-sunday", "Sexagesima Sunday", Rank::SecondClass, Color::Purple),
    movable(-49, "quinquagesima-sunday", "Quinquagesima Sunday", Rank::SecondClass, Color::Purple),
    movable(-46, "ash-wednesday", "Ash Wednesday", Rank::FirstClass, Color::Purple)
        .described("Feria IV Cinerum"),
    movable(-14, "passion-sunday", "Passion Sunday", Rank::FirstClass, Color::Purple)
        .described("Dominica I Passionis"),
    movable(-7, "palm-sunday", "Palm Sunday", Rank::FirstClass, Color::Purple)
        .described("Dominica II Passionis seu in Palmis"),
    movable(-3, "holy-thursday", "Holy Thursday", Rank::FirstClass, Color::White)
        .described("Feria V in Cena Domini (Maundy Thursday)"),
    movable(-2, "good-friday", "Good Friday", Rank::FirstClass, Color::Black)
        .described("Feria VI in Parasceve"),
    movable(-1, "holy-saturday", "Holy Saturday", Rank::FirstClass, Color::Purple)
        .described("Sabbato Sancto"),
    movable_holy_day(0, "easter-sunday", "Easter Sunday", Color::White)
        .described("Dominica Resurrectionis"),
    movable(1, "easter-monday", "Easter Monday", Rank::FirstClass, Color::White),
    movable(2, "easter-tuesday", "Easter Tuesday", Rank::FirstClass, Color::White),
    movable(3, "easter-wednesday", "Wednesday in the Octave of Easter", Rank::FirstClass, Color::White),
    movable(4, "easter-thursday", "Thursday in the Octave of Easter", Rank::FirstClass, Color::White),
    movable(5, "easter-friday", "Friday in the Octave of Easter", Rank::FirstClass, Color::White),
    movable(6, "easter-saturday", "Saturday in the Octave of Easter", Rank::FirstClass, Color::White)
        .described("Sabbato in Albis"),
    movable(7, "low-sunday", "Low Sunday", Rank::FirstClass, Color::White)
        .described("Dominica in Albis (Divine Mercy Sunday)"),
    movable_holy_day(39, "ascension", "Ascension of the Lord", Color::White)
        .described("In Ascensione Domini"),
    movable_holy_day(49, "pentecost-sunday", "Pentecost Sunday", Color::Red)
        .described("Dominica Pentecostes (Whitsunday)"),
    movable(50, "pentecost-monday", "Monday in the Octave of Pentecost", Rank::FirstClass, Color::Red),
    movable(51, "pentecost-tuesday", "Tuesday in the Octave of Pentecost", Rank::FirstClass, Color::Red),
    movable(52, "pentecost-ember-wednesday", "Ember Wednesday in the Octave of Pentecost", Rank::FirstClass, Color::Red),
    movable(53, "pentecost-thursday", "Thursday in the Octave of Pentecost", Rank::FirstClass, Color::Red),
    movable(54, "pentecost-ember-friday", "Ember Friday in the Octave of Pentecost", Rank::FirstClass, Color::Red),
    movable(55, "pentecost-ember-saturday", "Ember Saturday in the Octave of Pentecost", Rank::FirstClass, Color::Red),
    movable(56, "trinity-sunday", "Trinity Sunday", Rank::FirstClass, Color::White)
        .described("In Festo Sanctissimae Trinitatis"),
    movable_holy_day(60, "corpus-christi", "Corpus Christi", Color::White)
        .described("In Festo Sanctissimi Corporis Christi"),
    movable(68, "sacred-heart", "Sacred Heart of Jesus", Rank::FirstClass, Color::White)
        .described("Sacratissimi Cordis Iesu"),
];

/// Resolves the temporal celebration governing `date`.
///
/// Always yields a celebration: when no moveable feast, Sunday or Ember day
/// applies, the seasonal feria does.
pub fn temporal_celebration(date: NaiveDate) -> Option<Celebration> {
    let offset = days_from_easter(date);
    if let Some(feast) = MOVABLE_FEASTS.iter().find(|f| f.offset == offset) {
        return Some(feast.bind(date));
    }
    if let Some(feast) = christ_the_king(date) {
        return Some(feast);
    }

    let season = season_for_date(date);
    if date.weekday() == Weekday::Sun {
        if let Some(sunday) = sunday_celebration(date, &season) {
            return Some(sunday);
        }
    }
    if let Some(ember) = ember_day(date, &season) {
        return Some(ember);
    }
    Some(feria_of(date, &season))
}

/// Christ the King: the last Sunday of October (1962 calendar).
fn christ_the_king(date: NaiveDate) -> Option<Celebration> {
    if date.month() == 10 && date.weekday() == Weekday::Sun && date.day() >= 25 {
        Some(Celebration {
            id: "christ-the-king".to_owned(),
            name: "Christ the King".to_owned(),
            rank: Rank::FirstClass,
            color: Color::White,
            date,
            cycle: Cycle::Temporal,
            proper_texts: true,
            common_texts: None,
            is_holy_day: false,
            is_feast_day: true,
            description: Some("D.N. Iesu Christi Regis".to_owned()),
        })
    } else {
        None
    }
}

/// Synthesizes the Sunday celebration for seasons whose Sundays carry no
/// entry in the moveable feast table.
///
/// `None` when the Sunday coincides with a fixed feast that owns the date
/// outright (Epiphany, Christmas, the Circumcision); the cascade then falls
/// through to the feria, which the feast suppresses.
fn sunday_celebration(date: NaiveDate, season: &LiturgicalSeason) -> Option<Celebration> {
    let weeks_since_start = (date.signed_duration_since(season.start).num_days() / 7 + 1) as u32;

    let (name, rank, color, description) = match season.kind {
        SeasonKind::Advent => {
            // Gaudete Sunday (3rd of Advent) takes rose vestments.
            let color = if weeks_since_start == 3 { Color::Rose } else { Color::Purple };
            (
                format!("{} Sunday of Advent", ordinal(weeks_since_start)),
                Rank::FirstClass,
                color,
                None,
            )
        }
        SeasonKind::Lent => {
            // Laetare Sunday (4th of Lent) takes rose vestments.
            let color = if weeks_since_start == 4 { Color::Rose } else { Color::Purple };
            (
                format!("{} Sunday of Lent", ordinal(weeks_since_start)),
                Rank::FirstClass,
                color,
                None,
            )
        }
        SeasonKind::Eastertide => {
            let weeks = (days_from_easter(date) / 7) as u32;
            (
                format!("{} Sunday after Easter", ordinal(weeks)),
                Rank::SecondClass,
                Color::White,
                None,
            )
        }
        SeasonKind::TimeAfterPentecost => {
            let weeks = ((days_from_easter(date) - 49) / 7) as u32;
            (
                format!("{} Sunday after Pentecost", ordinal(weeks)),
                Rank::SecondClass,
                Color::Green,
                None,
            )
        }
        SeasonKind::Epiphanytide => {
            // Sundays are counted strictly after January 6; when Epiphany
            // itself falls on a Sunday the count starts the following week.
            let weeks =
                ((date.signed_duration_since(season.start).num_days() + 6) / 7) as u32;
            if weeks == 0 {
                return None;
            }
            (
                format!("{} Sunday after Epiphany", ordinal(weeks)),
                Rank::SecondClass,
                Color::Green,
                None,
            )
        }
        SeasonKind::Christmastide => {
            if (date.month() == 12 && date.day() == 25)
                || (date.month() == 1 && date.day() == 1)
            {
                return None;
            }
            if date.month() == 12 {
                (
                    "Sunday within the Octave of Christmas".to_owned(),
                    Rank::SecondClass,
                    Color::White,
                    None,
                )
            } else {
                // A Sunday falling January 2-5 is the feast of the Holy Name.
                (
                    "Feast of the Holy Name of Jesus".to_owned(),
                    Rank::SecondClass,
                    Color::White,
                    Some("Sanctissimi Nominis Iesu".to_owned()),
                )
            }
        }
        // Every Sunday of Septuagesima, Passiontide and the Pentecost octave
        // is covered by the moveable feast table; these arms keep the
        // synthesis total.
        SeasonKind::Septuagesima | SeasonKind::Passiontide | SeasonKind::PentecostOctave => (
            format!("{} Sunday of {}", ordinal(weeks_since_start), season.name()),
            Rank::SecondClass,
            season.color,
            None,
        ),
    };

    let is_feast_day = name.starts_with("Feast");
    Some(Celebration {
        id: slugify(&name),
        name,
        rank,
        color,
        date,
        cycle: Cycle::Temporal,
        proper_texts: true,
        common_texts: None,
        is_holy_day: false,
        is_feast_day,
        description,
    })
}

/// Matches `date` against the Advent, Lent and September Ember weeks.
///
/// Ember days are the Wednesday, Friday and Saturday following the anchor
/// Sunday of each Ember week.  The fourth Ember week, after Pentecost,
/// falls inside the Pentecost octave and is resolved by the moveable feast
/// table before this stage runs.
fn ember_day(date: NaiveDate, season: &LiturgicalSeason) -> Option<Celebration> {
    if !matches!(date.weekday(), Weekday::Wed | Weekday::Fri | Weekday::Sat) {
        return None;
    }

    let year = date.year();
    let anchors = [
        (advent_start(year) + Duration::days(14), "Advent"), // Gaudete Sunday
        (easter(year) - Duration::days(42), "Lent"),         // 1st Sunday of Lent
        (september_ember_sunday(year), "September"),
    ];

    for (sunday, label) in anchors {
        let into_week = date.signed_duration_since(sunday).num_days();
        if (1..=6).contains(&into_week) {
            let weekday = weekday_name(date.weekday());
            let name = format!("Ember {} of {}", weekday, label);
            return Some(Celebration {
                id: slugify(&name),
                name,
                rank: Rank::SecondClass,
                color: season.color,
                date,
                cycle: Cycle::Temporal,
                proper_texts: true,
                common_texts: None,
                is_holy_day: false,
                is_feast_day: false,
                description: None,
            });
        }
    }
    None
}

/// The ferial office of the current season; the floor of the cascade.
pub(crate) fn feria_of(date: NaiveDate, season: &LiturgicalSeason) -> Celebration {
    Celebration {
        id: format!("feria-{}", season.kind.id()),
        name: format!("Feria of {}", season.name()),
        rank: Rank::FourthClass,
        color: season.color,
        date,
        cycle: Cycle::Temporal,
        proper_texts: false,
        common_texts: Some("Mass of the preceding Sunday".to_owned()),
        is_holy_day: false,
        is_feast_day: false,
        description: None,
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// English ordinal word for a Sunday count.
fn ordinal(n: u32) -> String {
    const WORDS: [&str; 20] = [
        "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
        "Tenth", "Eleventh", "Twelfth", "Thirteenth", "Fourteenth", "Fifteenth", "Sixteenth",
        "Seventeenth", "Eighteenth", "Nineteenth", "Twentieth",
    ];
    match n {
        1..=20 => WORDS[(n - 1) as usize].to_owned(),
        21..=29 => format!("Twenty-{}", WORDS[(n - 21) as usize].to_lowercase()),
        _ => format!("{n}th"),
    }
}

fn slugify(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            'a'..='z' | '0'..='9' => Some(c),
            'A'..='Z' => Some(c.to_ascii_lowercase()),
            ' ' | '-' => Some('-'),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn movable_offsets_are_unique() {
        let mut seen = HashSet::new();
        for feast in MOVABLE_FEASTS {
            assert!(seen.insert(feast.offset), "duplicate offset {}", feast.offset);
        }
    }

    #[test]
    fn easter_sunday_2025() {
        let day = temporal_celebration(ymd(2025, 4, 20)).unwrap();
        assert_eq!(day.name, "Easter Sunday");
        assert_eq!(day.rank, Rank::FirstClass);
        assert_eq!(day.color, Color::White);
        assert!(day.is_holy_day);
    }

    #[test]
    fn holy_week_2025() {
        assert_eq!(
            temporal_celebration(ymd(2025, 4, 13)).unwrap().name,
            "Palm Sunday"
        );
        let good_friday = temporal_celebration(ymd(2025, 4, 18)).unwrap();
        assert_eq!(good_friday.name, "Good Friday");
        assert_eq!(good_friday.color, Color::Black);
        assert_eq!(
            temporal_celebration(ymd(2025, 3, 5)).unwrap().name,
            "Ash Wednesday"
        );
    }

    #[test]
    fn pre_lenten_sundays_2025() {
        // Easter 2025 is April 20; Septuagesima is February 16.
        assert_eq!(
            temporal_celebration(ymd(2025, 2, 16)).unwrap().name,
            "Septuagesima Sunday"
        );
        assert_eq!(
            temporal_celebration(ymd(2025, 2, 23)).unwrap().name,
            "Sexagesima Sunday"
        );
        assert_eq!(
            temporal_celebration(ymd(2025, 3, 2)).unwrap().name,
            "Quinquagesima Sunday"
        );
    }

    #[test]
    fn pentecost_octave_and_derivatives_2025() {
        let pentecost = temporal_celebration(ymd(2025, 6, 8)).unwrap();
        assert_eq!(pentecost.name, "Pentecost Sunday");
        assert_eq!(pentecost.color, Color::Red);

        assert_eq!(
            temporal_celebration(ymd(2025, 6, 11)).unwrap().name,
            "Ember Wednesday in the Octave of Pentecost"
        );
        assert_eq!(
            temporal_celebration(ymd(2025, 6, 15)).unwrap().name,
            "Trinity Sunday"
        );
        assert_eq!(
            temporal_celebration(ymd(2025, 6, 19)).unwrap().name,
            "Corpus Christi"
        );
        assert_eq!(
            temporal_celebration(ymd(2025, 6, 27)).unwrap().name,
            "Sacred Heart of Jesus"
        );
    }

    #[test]
    fn advent_sundays_2024() {
        // Advent 2024 begins December 1.
        let first = temporal_celebration(ymd(2024, 12, 1)).unwrap();
        assert_eq!(first.name, "First Sunday of Advent");
        assert_eq!(first.rank, Rank::FirstClass);
        assert_eq!(first.color, Color::Purple);

        let gaudete = temporal_celebration(ymd(2024, 12, 15)).unwrap();
        assert_eq!(gaudete.name, "Third Sunday of Advent");
        assert_eq!(gaudete.color, Color::Rose);

        let fourth = temporal_celebration(ymd(2024, 12, 22)).unwrap();
        assert_eq!(fourth.name, "Fourth Sunday of Advent");
    }

    #[test]
    fn lent_sundays_2025() {
        let first = temporal_celebration(ymd(2025, 3, 9)).unwrap();
        assert_eq!(first.name, "First Sunday of Lent");
        assert_eq!(first.rank, Rank::FirstClass);

        let laetare = temporal_celebration(ymd(2025, 3, 30)).unwrap();
        assert_eq!(laetare.name, "Fourth Sunday of Lent");
        assert_eq!(laetare.color, Color::Rose);
    }

    #[test]
    fn counted_sundays_after_easter_and_pentecost() {
        // 2025: Low Sunday is April 27, so May 4 is the Second Sunday after
        // Easter; Pentecost is June 8, Trinity June 15, so June 29 counts as
        // the Third Sunday after Pentecost.
        assert_eq!(
            temporal_celebration(ymd(2025, 4, 27)).unwrap().name,
            "Low Sunday"
        );
        assert_eq!(
            temporal_celebration(ymd(2025, 5, 4)).unwrap().name,
            "Second Sunday after Easter"
        );
        let sunday = temporal_celebration(ymd(2025, 6, 29)).unwrap();
        assert_eq!(sunday.name, "Third Sunday after Pentecost");
        assert_eq!(sunday.rank, Rank::SecondClass);
        assert_eq!(sunday.color, Color::Green);
    }

    #[test]
    fn epiphanytide_and_christmastide_sundays() {
        // January 12, 2025 is the First Sunday after Epiphany.
        assert_eq!(
            temporal_celebration(ymd(2025, 1, 12)).unwrap().name,
            "First Sunday after Epiphany"
        );
        // December 28, 2025 is a Sunday within the Christmas octave.
        assert_eq!(
            temporal_celebration(ymd(2025, 12, 28)).unwrap().name,
            "Sunday within the Octave of Christmas"
        );
        // January 2, 2022 is a Sunday between January 2 and 5: Holy Name.
        assert_eq!(
            temporal_celebration(ymd(2022, 1, 2)).unwrap().name,
            "Feast of the Holy Name of Jesus"
        );
    }

    #[test]
    fn epiphany_sundays_counted_strictly_after_january_6() {
        // 2030: January 6 is itself a Sunday.  The feast owns the date, so
        // the temporal cycle yields the feria, and the First Sunday after
        // Epiphany is January 13.
        assert_eq!(
            temporal_celebration(ymd(2030, 1, 6)).unwrap().name,
            "Feria of Epiphanytide"
        );
        assert_eq!(
            temporal_celebration(ymd(2030, 1, 13)).unwrap().name,
            "First Sunday after Epiphany"
        );
        assert_eq!(
            temporal_celebration(ymd(2030, 1, 20)).unwrap().name,
            "Second Sunday after Epiphany"
        );
    }

    #[test]
    fn christmas_and_circumcision_sundays_fall_to_the_feria() {
        // December 25, 2022 and January 1, 2023 are both Sundays; the feasts
        // own those dates, so no octave Sunday is synthesized under them.
        assert_eq!(
            temporal_celebration(ymd(2022, 12, 25)).unwrap().name,
            "Feria of Christmastide"
        );
        assert_eq!(
            temporal_celebration(ymd(2023, 1, 1)).unwrap().name,
            "Feria of Christmastide"
        );
    }

    #[test]
    fn christ_the_king_last_sunday_of_october() {
        let feast = temporal_celebration(ymd(2025, 10, 26)).unwrap();
        assert_eq!(feast.name, "Christ the King");
        assert_eq!(feast.rank, Rank::FirstClass);
        // October 19, 2025 is a Sunday but not the last of the month.
        assert_eq!(
            temporal_celebration(ymd(2025, 10, 19)).unwrap().name,
            "Nineteenth Sunday after Pentecost"
        );
    }

    #[test]
    fn ember_days_2025() {
        // Lenten Ember week follows the First Sunday of Lent (March 9).
        let ember = temporal_celebration(ymd(2025, 3, 12)).unwrap();
        assert_eq!(ember.name, "Ember Wednesday of Lent");
        assert_eq!(ember.rank, Rank::SecondClass);
        assert_eq!(ember.color, Color::Purple);
        assert_eq!(
            temporal_celebration(ymd(2025, 3, 14)).unwrap().name,
            "Ember Friday of Lent"
        );
        assert_eq!(
            temporal_celebration(ymd(2025, 3, 15)).unwrap().name,
            "Ember Saturday of Lent"
        );

        // September Ember week 2025 follows September 21.
        let september = temporal_celebration(ymd(2025, 9, 24)).unwrap();
        assert_eq!(september.name, "Ember Wednesday of September");
        assert_eq!(september.color, Color::Green);

        // Advent Ember week 2025 follows Gaudete Sunday (December 14).
        assert_eq!(
            temporal_celebration(ymd(2025, 12, 17)).unwrap().name,
            "Ember Wednesday of Advent"
        );
    }

    #[test]
    fn ferias_fall_through_the_cascade() {
        // An ordinary Tuesday in Time after Pentecost.
        let feria = temporal_celebration(ymd(2025, 7, 8)).unwrap();
        assert_eq!(feria.name, "Feria of Time after Pentecost");
        assert_eq!(feria.rank, Rank::FourthClass);
        assert_eq!(feria.color, Color::Green);
        assert!(!feria.proper_texts);
        assert_eq!(
            feria.common_texts.as_deref(),
            Some("Mass of the preceding Sunday")
        );

        // A Lenten weekday outside the Ember week.
        assert_eq!(
            temporal_celebration(ymd(2025, 3, 19)).unwrap().name,
            "Feria of Lent"
        );
    }

    #[test]
    fn referential_transparency() {
        let date = ymd(2025, 6, 8);
        assert_eq!(temporal_celebration(date), temporal_celebration(date));
    }

    #[test]
    fn ordinal_words() {
        assert_eq!(ordinal(1), "First");
        assert_eq!(ordinal(4), "Fourth");
        assert_eq!(ordinal(21), "Twenty-first");
        assert_eq!(ordinal(24), "Twenty-fourth");
        assert_eq!(ordinal(40), "40th");
    }

    #[test]
    fn slugs_are_kebab_case() {
        assert_eq!(slugify("Third Sunday after Pentecost"), "third-sunday-after-pentecost");
        assert_eq!(slugify("Ember Wednesday of September"), "ember-wednesday-of-september");
    }
}
