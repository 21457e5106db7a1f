use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use tabled::Tabled;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
pub struct AirlineRecord {
    #[serde(default)]
    pub iata: String,
    #[serde(default)]
    pub icao: String,
    #[serde(rename = "airline")]
    pub name: String,
}

impl fmt::Display for AirlineRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.iata, self.icao)
    }
}
