//! US state reference table
//!
//! The catalog matches jurisdiction codes exactly. This table is the
//! normalization aid for callers that only have a state name (reverse
//! geocoders usually return "Texas" rather than "TX").

use serde::{Deserialize, Serialize};

/// US state codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    // Northeast
    CT,
    ME,
    MA,
    NH,
    NJ,
    NY,
    PA,
    RI,
    VT,
    // Southeast
    AL,
    AR,
    DE,
    FL,
    GA,
    KY,
    LA,
    MD,
    MS,
    NC,
    SC,
    TN,
    VA,
    WV,
    DC,
    // Midwest
    IL,
    IN,
    IA,
    KS,
    MI,
    MN,
    MO,
    NE,
    ND,
    OH,
    SD,
    WI,
    // Southwest
    AZ,
    NM,
    OK,
    TX,
    // West
    AK,
    CA,
    CO,
    HI,
    ID,
    MT,
    NV,
    OR,
    UT,
    WA,
    WY,
}

/// Census-style region grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Northeast,
    Southeast,
    Midwest,
    Southwest,
    West,
}

impl State {
    pub fn all() -> &'static [State] {
        &[
            State::CT,
            State::ME,
            State::MA,
            State::NH,
            State::NJ,
            State::NY,
            State::PA,
            State::RI,
            State::VT,
            State::AL,
            State::AR,
            State::DE,
            State::FL,
            State::GA,
            State::KY,
            State::LA,
            State::MD,
            State::MS,
            State::NC,
            State::SC,
            State::TN,
            State::VA,
            State::WV,
            State::DC,
            State::IL,
            State::IN,
            State::IA,
            State::KS,
            State::MI,
            State::MN,
            State::MO,
            State::NE,
            State::ND,
            State::OH,
            State::SD,
            State::WI,
            State::AZ,
            State::NM,
            State::OK,
            State::TX,
            State::AK,
            State::CA,
            State::CO,
            State::HI,
            State::ID,
            State::MT,
            State::NV,
            State::OR,
            State::UT,
            State::WA,
            State::WY,
        ]
    }

    /// Two-letter postal code, the key used by the law catalog
    pub fn code(&self) -> &'static str {
        match self {
            State::CT => "CT",
            State::ME => "ME",
            State::MA => "MA",
            State::NH => "NH",
            State::NJ => "NJ",
            State::NY => "NY",
            State::PA => "PA",
            State::RI => "RI",
            State::VT => "VT",
            State::AL => "AL",
            State::AR => "AR",
            State::DE => "DE",
            State::FL => "FL",
            State::GA => "GA",
            State::KY => "KY",
            State::LA => "LA",
            State::MD => "MD",
            State::MS => "MS",
            State::NC => "NC",
            State::SC => "SC",
            State::TN => "TN",
            State::VA => "VA",
            State::WV => "WV",
            State::DC => "DC",
            State::IL => "IL",
            State::IN => "IN",
            State::IA => "IA",
            State::KS => "KS",
            State::MI => "MI",
            State::MN => "MN",
            State::MO => "MO",
            State::NE => "NE",
            State::ND => "ND",
            State::OH => "OH",
            State::SD => "SD",
            State::WI => "WI",
            State::AZ => "AZ",
            State::NM => "NM",
            State::OK => "OK",
            State::TX => "TX",
            State::AK => "AK",
            State::CA => "CA",
            State::CO => "CO",
            State::HI => "HI",
            State::ID => "ID",
            State::MT => "MT",
            State::NV => "NV",
            State::OR => "OR",
            State::UT => "UT",
            State::WA => "WA",
            State::WY => "WY",
        }
    }

    /// Get the full state name
    pub fn name(&self) -> &'static str {
        match self {
            State::CT => "Connecticut",
            State::ME => "Maine",
            State::MA => "Massachusetts",
            State::NH => "New Hampshire",
            State::NJ => "New Jersey",
            State::NY => "New York",
            State::PA => "Pennsylvania",
            State::RI => "Rhode Island",
            State::VT => "Vermont",
            State::AL => "Alabama",
            State::AR => "Arkansas",
            State::DE => "Delaware",
            State::FL => "Florida",
            State::GA => "Georgia",
            State::KY => "Kentucky",
            State::LA => "Louisiana",
            State::MD => "Maryland",
            State::MS => "Mississippi",
            State::NC => "North Carolina",
            State::SC => "South Carolina",
            State::TN => "Tennessee",
            State::VA => "Virginia",
            State::WV => "West Virginia",
            State::DC => "District of Columbia",
            State::IL => "Illinois",
            State::IN => "Indiana",
            State::IA => "Iowa",
            State::KS => "Kansas",
            State::MI => "Michigan",
            State::MN => "Minnesota",
            State::MO => "Missouri",
            State::NE => "Nebraska",
            State::ND => "North Dakota",
            State::OH => "Ohio",
            State::SD => "South Dakota",
            State::WI => "Wisconsin",
            State::AZ => "Arizona",
            State::NM => "New Mexico",
            State::OK => "Oklahoma",
            State::TX => "Texas",
            State::AK => "Alaska",
            State::CA => "California",
            State::CO => "Colorado",
            State::HI => "Hawaii",
            State::ID => "Idaho",
            State::MT => "Montana",
            State::NV => "Nevada",
            State::OR => "Oregon",
            State::UT => "Utah",
            State::WA => "Washington",
            State::WY => "Wyoming",
        }
    }

    pub fn region(&self) -> Region {
        match self {
            State::CT
            | State::ME
            | State::MA
            | State::NH
            | State::NJ
            | State::NY
            | State::PA
            | State::RI
            | State::VT => Region::Northeast,
            State::AL
            | State::AR
            | State::DE
            | State::FL
            | State::GA
            | State::KY
            | State::LA
            | State::MD
            | State::MS
            | State::NC
            | State::SC
            | State::TN
            | State::VA
            | State::WV
            | State::DC => Region::Southeast,
            State::IL
            | State::IN
            | State::IA
            | State::KS
            | State::MI
            | State::MN
            | State::MO
            | State::NE
            | State::ND
            | State::OH
            | State::SD
            | State::WI => Region::Midwest,
            State::AZ | State::NM | State::OK | State::TX => Region::Southwest,
            State::AK
            | State::CA
            | State::CO
            | State::HI
            | State::ID
            | State::MT
            | State::NV
            | State::OR
            | State::UT
            | State::WA
            | State::WY => Region::West,
        }
    }

    /// Parse from state code or name (case-insensitive, surrounding whitespace ignored)
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim();
        Self::all().iter().copied().find(|state| {
            state.code().eq_ignore_ascii_case(needle) || state.name().eq_ignore_ascii_case(needle)
        })
    }

    pub fn in_region(region: Region) -> Vec<Self> {
        Self::all()
            .iter()
            .copied()
            .filter(|state| state.region() == region)
            .collect()
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
