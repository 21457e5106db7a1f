use crate::aircraft::AircraftTypeRecord;
use crate::airline::AirlineRecord;
use crate::airport::AirportRecord;
use crate::error::LoadError;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const AIRPORTS_FILE: &str = "airports.csv";
pub const AIRLINES_FILE: &str = "airline_codes.csv";
pub const AIRCRAFT_FILE: &str = "aircrafts.json";

/// The three reference tables, fully loaded.
#[derive(Debug, Default)]
pub struct ReferenceData {
    pub airports: Vec<AirportRecord>,
    pub airlines: Vec<AirlineRecord>,
    pub aircraft: Vec<AircraftTypeRecord>,
}

impl ReferenceData {
    pub fn load_from_dir(dir: &Path) -> Result<Self, LoadError> {
        let airports = read_airports(open(&dir.join(AIRPORTS_FILE))?)?;
        let airlines = read_airlines(open(&dir.join(AIRLINES_FILE))?)?;
        let aircraft = read_aircraft(open(&dir.join(AIRCRAFT_FILE))?)?;
        log::info!(
            "loaded {} airports, {} airlines, {} aircraft types from {}",
            airports.len(),
            airlines.len(),
            aircraft.len(),
            dir.display()
        );
        Ok(ReferenceData {
            airports,
            airlines,
            aircraft,
        })
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_csv<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>, LoadError> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(LoadError::from)
}

/// Airports without an IATA code are dropped.
pub fn read_airports<R: Read>(reader: R) -> Result<Vec<AirportRecord>, LoadError> {
    let mut airports: Vec<AirportRecord> = read_csv(reader)?;
    airports.retain(|a| !a.iata.is_empty());
    Ok(airports)
}

pub fn read_airlines<R: Read>(reader: R) -> Result<Vec<AirlineRecord>, LoadError> {
    read_csv(reader)
}

pub fn read_aircraft<R: Read>(reader: R) -> Result<Vec<AircraftTypeRecord>, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}
