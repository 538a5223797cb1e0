use serde::{Deserialize, Serialize};
use std::fmt;

/// Canadian provinces and territories tracked by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Province {
    NewfoundlandAndLabrador,
    PrinceEdwardIsland,
    NovaScotia,
    NewBrunswick,
    Quebec,
    Ontario,
    Manitoba,
    Saskatchewan,
    Alberta,
    BritishColumbia,
    Yukon,
    Nunavut,
}

impl Province {
    /// Every tracked region, in the dataset's canonical east-to-west order.
    pub const ALL: [Province; 12] = [
        Province::NewfoundlandAndLabrador,
        Province::PrinceEdwardIsland,
        Province::NovaScotia,
        Province::NewBrunswick,
        Province::Quebec,
        Province::Ontario,
        Province::Manitoba,
        Province::Saskatchewan,
        Province::Alberta,
        Province::BritishColumbia,
        Province::Yukon,
        Province::Nunavut,
    ];

    /// Name exactly as it appears in the `GEO` column.
    pub fn name(self) -> &'static str {
        match self {
            Province::NewfoundlandAndLabrador => "Newfoundland and Labrador",
            Province::PrinceEdwardIsland => "Prince Edward Island",
            Province::NovaScotia => "Nova Scotia",
            Province::NewBrunswick => "New Brunswick",
            Province::Quebec => "Quebec",
            Province::Ontario => "Ontario",
            Province::Manitoba => "Manitoba",
            Province::Saskatchewan => "Saskatchewan",
            Province::Alberta => "Alberta",
            Province::BritishColumbia => "British Columbia",
            Province::Yukon => "Yukon",
            Province::Nunavut => "Nunavut",
        }
    }

    /// Exact, case-sensitive lookup of a `GEO` value.
    pub fn from_name(name: &str) -> Option<Province> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the tourism dataset.
///
/// Fields are kept as the raw strings read from the CSV so that malformed
/// rows survive loading; the processor decides what is usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouristRecord {
    /// Reference period, `YYYY-MM` or `YYYY-MM-DD`.
    #[serde(rename = "REF_DATE", alias = "\u{feff}REF_DATE", default)]
    pub ref_date: String,
    /// Region name.
    #[serde(rename = "GEO", default)]
    pub geo: String,
    /// Visitor count, string-encoded.
    #[serde(rename = "VALUE", default)]
    pub value: String,
    /// Traveller-characteristic label.
    #[serde(rename = "Traveller characteristics", default)]
    pub traveller_characteristics: String,
    /// Seasonal-adjustment label.
    #[serde(rename = "Seasonal adjustment", default)]
    pub seasonal_adjustment: String,
}

impl TouristRecord {
    /// Build a record from its five columns.
    pub fn new(
        ref_date: impl Into<String>,
        geo: impl Into<String>,
        value: impl Into<String>,
        traveller_characteristics: impl Into<String>,
        seasonal_adjustment: impl Into<String>,
    ) -> Self {
        Self {
            ref_date: ref_date.into(),
            geo: geo.into(),
            value: value.into(),
            traveller_characteristics: traveller_characteristics.into(),
            seasonal_adjustment: seasonal_adjustment.into(),
        }
    }

    /// Parsed visitor count, or `None` when `VALUE` is not a non-negative integer.
    pub fn visitors(&self) -> Option<u64> {
        self.value.trim().parse::<u64>().ok()
    }

    /// The tracked region this record belongs to, if any.
    pub fn province(&self) -> Option<Province> {
        Province::from_name(&self.geo)
    }
}
