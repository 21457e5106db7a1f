use crate::error::KnowledgeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use tabled::Tabled;

pub type AirportCode = Arc<str>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct AirportRecord {
    pub iata: AirportCode,
    pub icao: AirportCode,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub tz: String,
}

impl AirportRecord {
    pub fn continent(&self) -> Result<Option<Continent>, KnowledgeError> {
        continent_of(&self.tz)
    }
}

impl fmt::Display for AirportRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.iata, self.icao)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Continent {
    #[serde(rename = "EU")]
    Europe,
    #[serde(rename = "NA")]
    NorthAmerica,
    #[serde(rename = "SA")]
    SouthAmerica,
    #[serde(rename = "AS")]
    Asia,
    #[serde(rename = "OC")]
    Oceania,
}

impl Continent {
    pub fn code(&self) -> &'static str {
        match self {
            Continent::Europe => "EU",
            Continent::NorthAmerica => "NA",
            Continent::SouthAmerica => "SA",
            Continent::Asia => "AS",
            Continent::Oceania => "OC",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// Cities of the America/ zones that lie in South America.
const SOUTH_AMERICAN_ZONES: &[&str] = &[
    "Araguaina",
    "Asuncion",
    "Bahia",
    "Belem",
    "Boa_Vista",
    "Bogota",
    "Campo_Grande",
    "Caracas",
    "Cayenne",
    "Coyhaique",
    "Cuiaba",
    "Eirunepe",
    "Fortaleza",
    "Guayaquil",
    "Guyana",
    "La_Paz",
    "Lima",
    "Maceio",
    "Manaus",
    "Montevideo",
    "Noronha",
    "Paramaribo",
    "Porto_Velho",
    "Punta_Arenas",
    "Recife",
    "Rio_Branco",
    "Santarem",
    "Santiago",
    "Sao_Paulo",
];

/// Derives the two-letter continent code from an IANA zone identifier.
///
/// `Atlantic/Reykjavik` counts as Europe, every other Atlantic zone has no
/// continent. Zones outside Europe, America, Atlantic, Asia and Australia
/// are rejected.
pub fn continent_of(zone: &str) -> Result<Option<Continent>, KnowledgeError> {
    let (region, city) = zone.split_once('/').unwrap_or((zone, ""));
    match region {
        "Europe" => Ok(Some(Continent::Europe)),
        "Asia" => Ok(Some(Continent::Asia)),
        "Australia" => Ok(Some(Continent::Oceania)),
        "Atlantic" if city == "Reykjavik" => Ok(Some(Continent::Europe)),
        "Atlantic" => Ok(None),
        "America" => {
            let south = city.starts_with("Argentina/") || SOUTH_AMERICAN_ZONES.contains(&city);
            Ok(Some(if south {
                Continent::SouthAmerica
            } else {
                Continent::NorthAmerica
            }))
        }
        _ => Err(KnowledgeError::UnknownContinent(zone.to_owned())),
    }
}
