// SPDX-License-Identifier: AGPL-3.0-or-later

//! The sanctoral cycle: fixed-date feasts of the 1962 universal calendar.
//!
//! The table is process-wide read-only state, keyed by `(month, day)` and
//! built once on first use.  Every entry carries its rank, color, text
//! provenance and obligation flags; the Latin title travels in the
//! description where customary.  There is at most one entry per month-day.

use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::celebration::{Celebration, Color, Cycle, Rank};

/// One row of the static sanctoral table.
#[derive(Debug, Clone, Copy)]
struct SanctoralEntry {
    month: u32,
    day: u32,
    id: &'static str,
    name: &'static str,
    rank: Rank,
    color: Color,
    proper_texts: bool,
    common_texts: Option<&'static str>,
    is_holy_day: bool,
    is_feast_day: bool,
    description: Option<&'static str>,
}

impl SanctoralEntry {
    /// Binds the static entry to a concrete date.
    fn bind(&self, date: NaiveDate) -> Celebration {
        Celebration {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            rank: self.rank,
            color: self.color,
            date,
            cycle: Cycle::Sanctoral,
            proper_texts: self.proper_texts,
            common_texts: self.common_texts.map(str::to_owned),
            is_holy_day: self.is_holy_day,
            is_feast_day: self.is_feast_day,
            description: self.description.map(str::to_owned),
        }
    }

    const fn described(self, text: &'static str) -> Self {
        Self {
            description: Some(text),
            ..self
        }
    }
}

/// A feast with its own proper texts.
const fn feast(
    month: u32,
    day: u32,
    id: &'static str,
    name: &'static str,
    rank: Rank,
    color: Color,
) -> SanctoralEntry {
    SanctoralEntry {
        month,
        day,
        id,
        name,
        rank,
        color,
        proper_texts: true,
        common_texts: None,
        is_holy_day: false,
        is_feast_day: true,
        description: None,
    }
}

/// A first-class feast that is also a holy day of obligation.
const fn holy_day(
    month: u32,
    day: u32,
    id: &'static str,
    name: &'static str,
    color: Color,
) -> SanctoralEntry {
    SanctoralEntry {
        is_holy_day: true,
        ..feast(month, day, id, name, Rank::FirstClass, color)
    }
}

/// A lesser feast borrowing its texts from a common.
const fn from_common(
    month: u32,
    day: u32,
    id: &'static str,
    name: &'static str,
    rank: Rank,
    color: Color,
    common: &'static str,
) -> SanctoralEntry {
    SanctoralEntry {
        proper_texts: false,
        common_texts: Some(common),
        ..feast(month, day, id, name, rank, color)
    }
}

/// A bare commemoration with no liturgy of its own.
const fn commemoration(
    month: u32,
    day: u32,
    id: &'static str,
    name: &'static str,
    color: Color,
    common: &'static str,
) -> SanctoralEntry {
    SanctoralEntry {
        is_feast_day: false,
        ..from_common(month, day, id, name, Rank::Commemoration, color, common)
    }
}

/// The fixed-date calendar, in month-day order.  Exactly one entry per
/// month-day (asserted in tests).
#[rustfmt::skip]
const ENTRIES: &[SanctoralEntry] = &[
    // January
    holy_day(1, 1, "circumcision", "Circumcision of the Lord", Color::White)
        .described("In Circumcisione Domini, octave day of Christmas"),
    holy_day(1, 6, "epiphany", "Epiphany of the Lord", Color::White)
        .described("In Epiphania Domini"),
    feast(1, 13, "baptism-of-the-lord", "Commemoration of the Baptism of Our Lord", Rank::SecondClass, Color::White),
    from_common(1, 17, "st-anthony-abbot", "St. Anthony, Abbot", Rank::ThirdClass, Color::White, "Common of Abbots"),
    feast(1, 21, "st-agnes", "St. Agnes, Virgin and Martyr", Rank::ThirdClass, Color::Red),
    feast(1, 25, "conversion-of-st-paul", "Conversion of St. Paul the Apostle", Rank::ThirdClass, Color::White)
        .described("In Conversione S. Pauli Apostoli"),
    from_common(1, 29, "st-francis-de-sales", "St. Francis de Sales, Bishop and Doctor", Rank::ThirdClass, Color::White, "Common of Doctors"),

    // February
    feast(2, 2, "purification", "Purification of the Blessed Virgin Mary", Rank::SecondClass, Color::White)
        .described("In Purificatione B. Mariae V. (Candlemas)"),
    commemoration(2, 3, "st-blaise", "St. Blaise, Bishop and Martyr", Color::Red, "Common of One Martyr"),
    feast(2, 11, "our-lady-of-lourdes", "Apparition of Our Lady at Lourdes", Rank::ThirdClass, Color::White),
    feast(2, 22, "chair-of-st-peter", "Chair of St. Peter the Apostle", Rank::SecondClass, Color::White),
    feast(2, 24, "st-matthias", "St. Matthias, Apostle", Rank::SecondClass, Color::Red),

    // March
    from_common(3, 7, "st-thomas-aquinas", "St. Thomas Aquinas, Confessor and Doctor", Rank::ThirdClass, Color::White, "Common of Doctors"),
    from_common(3, 17, "st-patrick", "St. Patrick, Bishop and Confessor", Rank::ThirdClass, Color::White, "Common of Confessor Bishops"),
    holy_day(3, 19, "st-joseph", "St. Joseph, Spouse of the Blessed Virgin Mary", Color::White)
        .described("S. Ioseph Sponsi B.M.V."),
    feast(3, 25, "annunciation", "Annunciation of the Blessed Virgin Mary", Rank::FirstClass, Color::White)
        .described("In Annuntiatione B. Mariae V."),

    // April
    from_common(4, 11, "st-leo-i", "St. Leo I, Pope and Doctor", Rank::ThirdClass, Color::White, "Common of Popes"),
    commemoration(4, 23, "st-george", "St. George, Martyr", Color::Red, "Common of One Martyr"),
    feast(4, 25, "st-mark", "St. Mark, Evangelist", Rank::SecondClass, Color::Red),
    from_common(4, 29, "st-peter-of-verona", "St. Peter of Verona, Martyr", Rank::ThirdClass, Color::Red, "Common of One Martyr"),
    feast(4, 30, "st-catherine-of-siena", "St. Catherine of Siena, Virgin", Rank::ThirdClass, Color::White),

    // May
    feast(5, 1, "st-joseph-the-worker", "St. Joseph the Worker", Rank::FirstClass, Color::White)
        .described("S. Ioseph Opificis"),
    feast(5, 11, "sts-philip-and-james", "Sts. Philip and James, Apostles", Rank::SecondClass, Color::Red),
    feast(5, 26, "st-philip-neri", "St. Philip Neri, Confessor", Rank::ThirdClass, Color::White),
    feast(5, 31, "queenship-of-mary", "Queenship of the Blessed Virgin Mary", Rank::SecondClass, Color::White)
        .described("B. Mariae V. Reginae"),

    // June
    from_common(6, 11, "st-barnabas", "St. Barnabas, Apostle", Rank::ThirdClass, Color::Red, "Common of Apostles"),
    feast(6, 13, "st-anthony-of-padua", "St. Anthony of Padua, Confessor and Doctor", Rank::ThirdClass, Color::White),
    feast(6, 24, "nativity-of-st-john-baptist", "Nativity of St. John the Baptist", Rank::FirstClass, Color::White)
        .described("In Nativitate S. Ioannis Baptistae"),
    holy_day(6, 29, "sts-peter-and-paul", "Sts. Peter and Paul, Apostles", Color::Red)
        .described("Ss. Petri et Pauli Apostolorum"),
    feast(6, 30, "commemoration-of-st-paul", "Commemoration of St. Paul the Apostle", Rank::ThirdClass, Color::Red),

    // July
    feast(7, 1, "precious-blood", "Most Precious Blood of Our Lord", Rank::FirstClass, Color::Red)
        .described("Pretiosissimi Sanguinis D.N. Iesu Christi"),
    feast(7, 2, "visitation", "Visitation of the Blessed Virgin Mary", Rank::SecondClass, Color::White),
    feast(7, 22, "st-mary-magdalene", "St. Mary Magdalene, Penitent", Rank::ThirdClass, Color::White),
    feast(7, 25, "st-james", "St. James, Apostle", Rank::SecondClass, Color::Red),
    feast(7, 26, "st-anne", "St. Anne, Mother of the Blessed Virgin Mary", Rank::SecondClass, Color::White),
    feast(7, 31, "st-ignatius-of-loyola", "St. Ignatius of Loyola, Confessor", Rank::ThirdClass, Color::White),

    // August
    feast(8, 6, "transfiguration", "Transfiguration of Our Lord", Rank::SecondClass, Color::White)
        .described("In Transfiguratione D.N. Iesu Christi"),
    feast(8, 10, "st-lawrence", "St. Lawrence, Martyr", Rank::SecondClass, Color::Red),
    holy_day(8, 15, "assumption", "Assumption of the Blessed Virgin Mary", Color::White)
        .described("In Assumptione B. Mariae V."),
    from_common(8, 20, "st-bernard", "St. Bernard, Abbot and Doctor", Rank::ThirdClass, Color::White, "Common of Doctors"),
    feast(8, 22, "immaculate-heart", "Immaculate Heart of Mary", Rank::SecondClass, Color::White),
    feast(8, 24, "st-bartholomew", "St. Bartholomew, Apostle", Rank::SecondClass, Color::Red),
    from_common(8, 28, "st-augustine", "St. Augustine, Bishop and Doctor", Rank::ThirdClass, Color::White, "Common of Doctors"),

    // September
    feast(9, 8, "nativity-of-mary", "Nativity of the Blessed Virgin Mary", Rank::SecondClass, Color::White),
    feast(9, 14, "exaltation-of-the-cross", "Exaltation of the Holy Cross", Rank::SecondClass, Color::Red)
        .described("In Exaltatione S. Crucis"),
    feast(9, 15, "seven-sorrows", "Seven Sorrows of the Blessed Virgin Mary", Rank::SecondClass, Color::White),
    feast(9, 21, "st-matthew", "St. Matthew, Apostle and Evangelist", Rank::SecondClass, Color::Red),
    feast(9, 29, "st-michael", "Dedication of St. Michael the Archangel", Rank::FirstClass, Color::White)
        .described("In Dedicatione S. Michaelis Archangeli (Michaelmas)"),
    from_common(9, 30, "st-jerome", "St. Jerome, Priest and Doctor", Rank::ThirdClass, Color::White, "Common of Doctors"),

    // October
    feast(10, 2, "guardian-angels", "Holy Guardian Angels", Rank::ThirdClass, Color::White),
    feast(10, 4, "st-francis-of-assisi", "St. Francis of Assisi, Confessor", Rank::ThirdClass, Color::White),
    feast(10, 7, "our-lady-of-the-rosary", "Our Lady of the Rosary", Rank::SecondClass, Color::White),
    feast(10, 11, "maternity-of-mary", "Maternity of the Blessed Virgin Mary", Rank::SecondClass, Color::White),
    feast(10, 15, "st-teresa-of-avila", "St. Teresa of Avila, Virgin", Rank::ThirdClass, Color::White),
    feast(10, 18, "st-luke", "St. Luke, Evangelist", Rank::SecondClass, Color::Red),
    feast(10, 28, "sts-simon-and-jude", "Sts. Simon and Jude, Apostles", Rank::SecondClass, Color::Red),

    // November
    holy_day(11, 1, "all-saints", "All Saints", Color::White)
        .described("In Festo Omnium Sanctorum"),
    feast(11, 2, "all-souls", "Commemoration of All the Faithful Departed", Rank::FirstClass, Color::Black)
        .described("In Commemoratione Omnium Fidelium Defunctorum"),
    feast(11, 9, "dedication-of-the-lateran", "Dedication of the Archbasilica of the Most Holy Savior", Rank::SecondClass, Color::White)
        .described("St. John Lateran"),
    from_common(11, 21, "presentation-of-mary", "Presentation of the Blessed Virgin Mary", Rank::ThirdClass, Color::White, "Common of Feasts of Our Lady"),
    feast(11, 22, "st-cecilia", "St. Cecilia, Virgin and Martyr", Rank::ThirdClass, Color::Red),
    feast(11, 30, "st-andrew", "St. Andrew, Apostle", Rank::SecondClass, Color::Red),

    // December
    feast(12, 3, "st-francis-xavier", "St. Francis Xavier, Confessor", Rank::ThirdClass, Color::White),
    from_common(12, 6, "st-nicholas", "St. Nicholas, Bishop and Confessor", Rank::ThirdClass, Color::White, "Common of Confessor Bishops"),
    from_common(12, 7, "st-ambrose", "St. Ambrose, Bishop and Doctor", Rank::ThirdClass, Color::White, "Common of Doctors"),
    holy_day(12, 8, "immaculate-conception", "Immaculate Conception of the Blessed Virgin Mary", Color::White)
        .described("In Conceptione Immaculata B. Mariae V."),
    feast(12, 13, "st-lucy", "St. Lucy, Virgin and Martyr", Rank::ThirdClass, Color::Red),
    feast(12, 21, "st-thomas", "St. Thomas, Apostle", Rank::SecondClass, Color::Red),
    holy_day(12, 25, "christmas", "Nativity of the Lord", Color::White)
        .described("In Nativitate Domini (Christmas)"),
    feast(12, 26, "st-stephen", "St. Stephen, Protomartyr", Rank::SecondClass, Color::Red),
    feast(12, 27, "st-john-evangelist", "St. John, Apostle and Evangelist", Rank::SecondClass, Color::White),
    feast(12, 28, "holy-innocents", "Holy Innocents", Rank::SecondClass, Color::Red),
    feast(12, 31, "st-sylvester", "St. Sylvester I, Pope", Rank::ThirdClass, Color::White),
];

static TABLE: LazyLock<HashMap<(u32, u32), &'static SanctoralEntry>> = LazyLock::new(|| {
    ENTRIES.iter().map(|e| ((e.month, e.day), e)).collect()
});

/// The fixed-date celebration for `date`'s month-day, if the calendar has
/// one.  February 29 never has an entry.
pub fn sanctoral_celebration(date: NaiveDate) -> Option<Celebration> {
    TABLE
        .get(&(date.month(), date.day()))
        .map(|entry| entry.bind(date))
}

/// Every table entry bound to its concrete date in `year`, in month-day
/// order.
pub fn all_sanctoral_celebrations(year: i32) -> Vec<Celebration> {
    ENTRIES
        .iter()
        .filter_map(|entry| {
            NaiveDate::from_ymd_opt(year, entry.month, entry.day).map(|date| entry.bind(date))
        })
        .collect()
}
