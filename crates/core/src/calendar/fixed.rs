use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::{validate_year, ymd};
use super::error::Result;
use super::types::FeastRank::{self, Feast, LesserFeast, PrincipalFeast};
use super::types::LiturgicalColor::{self, Red, White};

/// A feast observed on the same (month, day) every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFeastDef {
    pub month: u32,
    pub day: u32,
    pub name: &'static str,
    pub rank: FeastRank,
    pub color: LiturgicalColor,
}

const fn feast(
    month: u32,
    day: u32,
    name: &'static str,
    rank: FeastRank,
    color: LiturgicalColor,
) -> FixedFeastDef {
    FixedFeastDef {
        month,
        day,
        name,
        rank,
        color,
    }
}

/// Calendar-fixed feasts, in civil-year order.
pub const FIXED_FEASTS: &[FixedFeastDef] = &[
    feast(1, 1, "Holy Name of Jesus", Feast, White),
    feast(1, 6, "Epiphany", PrincipalFeast, White),
    feast(1, 18, "Confession of Saint Peter", LesserFeast, White),
    feast(1, 25, "Conversion of Saint Paul", LesserFeast, White),
    feast(2, 2, "Presentation of the Lord", Feast, White),
    feast(3, 19, "Saint Joseph", LesserFeast, White),
    feast(3, 25, "Annunciation", Feast, White),
    feast(4, 25, "Saint Mark", LesserFeast, Red),
    feast(5, 31, "Visitation", LesserFeast, White),
    feast(6, 24, "Nativity of Saint John the Baptist", LesserFeast, White),
    feast(6, 29, "Saints Peter and Paul", LesserFeast, Red),
    feast(8, 6, "Transfiguration", Feast, White),
    feast(8, 15, "Saint Mary the Virgin", LesserFeast, White),
    feast(9, 14, "Holy Cross", Feast, Red),
    feast(9, 29, "Saint Michael and All Angels", LesserFeast, White),
    feast(11, 1, "All Saints", PrincipalFeast, White),
    feast(12, 24, "Christmas Eve", Feast, White),
    feast(12, 25, "Christmas", PrincipalFeast, White),
    feast(12, 26, "Saint Stephen", LesserFeast, Red),
    feast(12, 27, "Saint John", LesserFeast, White),
    feast(12, 28, "Holy Innocents", LesserFeast, Red),
];

/// A fixed feast resolved to a concrete date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedFeast {
    pub date: NaiveDate,
    pub name: String,
    pub rank: FeastRank,
    pub color: LiturgicalColor,
}

impl FixedFeastDef {
    /// Resolves the definition in a civil year.
    pub fn in_year(&self, year: i32) -> Result<FixedFeast> {
        validate_year(year)?;
        Ok(FixedFeast {
            date: ymd(year, self.month, self.day)?,
            name: self.name.to_string(),
            rank: self.rank,
            color: self.color,
        })
    }
}

/// Resolves every fixed feast in a civil year.
pub fn calculate_fixed_feasts(year: i32) -> Result<Vec<FixedFeast>> {
    validate_year(year)?;
    FIXED_FEASTS.iter().map(|def| def.in_year(year)).collect()
}

/// Looks up a fixed feast by name.
pub fn find_fixed_feast(name: &str) -> Option<&'static FixedFeastDef> {
    FIXED_FEASTS
        .iter()
        .find(|def| def.name.eq_ignore_ascii_case(name))
}
