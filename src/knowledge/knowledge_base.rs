use crate::aircraft::{AircraftMatch, AircraftTypeRecord, match_aircraft};
use crate::airline::AirlineRecord;
use crate::airport::{AirportCode, AirportRecord};
use crate::error::{KnowledgeError, RecordKind};
use crate::flight::{FlightyRow, ResolvedFlightLeg};
use crate::reference::ReferenceData;
use crate::time::{self, FlightDuration};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::cell::RefCell;
use std::collections::HashMap;

/// Read-only view over the reference tables, plus a lazily filled cache of
/// parsed time zones keyed by airport ICAO code.
///
/// One instance serves one conversion run. The zone cache lives in a
/// `RefCell`, so the type is not `Sync`.
#[derive(Debug)]
pub struct KnowledgeBase {
    airports: Vec<AirportRecord>,
    airlines: Vec<AirlineRecord>,
    aircraft: Vec<AircraftTypeRecord>,
    zones: RefCell<HashMap<AirportCode, Tz>>,
}

fn exactly_one<'a, T>(
    kind: RecordKind,
    code: &str,
    found: impl Iterator<Item = &'a T>,
) -> Result<&'a T, KnowledgeError> {
    let found = found.collect::<Vec<&T>>();
    match found.as_slice() {
        [record] => Ok(*record),
        [] => Err(KnowledgeError::NotFound {
            kind,
            code: code.to_owned(),
        }),
        _ => Err(KnowledgeError::Ambiguous {
            kind,
            code: code.to_owned(),
            count: found.len(),
        }),
    }
}

impl KnowledgeBase {
    pub fn new(
        mut airports: Vec<AirportRecord>,
        airlines: Vec<AirlineRecord>,
        aircraft: Vec<AircraftTypeRecord>,
    ) -> KnowledgeBase {
        let total = airports.len();
        airports.retain(|a| !a.iata.trim().is_empty());
        log::debug!(
            "knowledge base: {} airports ({} without IATA code dropped), {} airlines, {} aircraft types",
            airports.len(),
            total - airports.len(),
            airlines.len(),
            aircraft.len()
        );
        KnowledgeBase {
            airports,
            airlines,
            aircraft,
            zones: RefCell::new(HashMap::new()),
        }
    }

    pub fn from_reference(data: ReferenceData) -> KnowledgeBase {
        KnowledgeBase::new(data.airports, data.airlines, data.aircraft)
    }

    /// Case-insensitive lookup on the IATA code only.
    pub fn resolve_airport(&self, iata: &str) -> Result<&AirportRecord, KnowledgeError> {
        exactly_one(
            RecordKind::Airport,
            iata,
            self.airports
                .iter()
                .filter(|a| a.iata.eq_ignore_ascii_case(iata)),
        )
    }

    /// Case-insensitive lookup on either the IATA or the ICAO code.
    pub fn find_airport(&self, code: &str) -> Result<&AirportRecord, KnowledgeError> {
        exactly_one(
            RecordKind::Airport,
            code,
            self.airports
                .iter()
                .filter(|a| a.iata.eq_ignore_ascii_case(code) || a.icao.eq_ignore_ascii_case(code)),
        )
    }

    /// Two-letter codes are matched against IATA, three-letter ones against ICAO.
    pub fn resolve_airline(&self, code: &str) -> Result<&AirlineRecord, KnowledgeError> {
        match code.chars().count() {
            2 => exactly_one(
                RecordKind::Airline,
                code,
                self.airlines
                    .iter()
                    .filter(|a| a.iata.eq_ignore_ascii_case(code)),
            ),
            3 => exactly_one(
                RecordKind::Airline,
                code,
                self.airlines
                    .iter()
                    .filter(|a| a.icao.eq_ignore_ascii_case(code)),
            ),
            _ => Err(KnowledgeError::InvalidInput(format!(
                "illegal airline code {code:?}"
            ))),
        }
    }

    pub fn timezone_of(&self, code: &str) -> Result<Tz, KnowledgeError> {
        let airport = self.find_airport(code)?;
        self.zone_for(airport)
    }

    fn zone_for(&self, airport: &AirportRecord) -> Result<Tz, KnowledgeError> {
        // a handful of airports carry no ICAO code, their IATA code is unique anyway
        let key = if airport.icao.is_empty() {
            &airport.iata
        } else {
            &airport.icao
        };
        let cached = self.zones.borrow().get(key).copied();
        if let Some(zone) = cached {
            return Ok(zone);
        }
        let zone = airport.tz.parse::<Tz>().map_err(|_| {
            KnowledgeError::InvalidInput(format!(
                "unknown time zone {:?} for airport {}",
                airport.tz, airport.icao
            ))
        })?;
        log::trace!("zone cache miss for {key}: {}", zone.name());
        self.zones.borrow_mut().insert(key.clone(), zone);
        Ok(zone)
    }

    #[cfg(test)]
    pub(crate) fn cached_zones(&self) -> usize {
        self.zones.borrow().len()
    }

    pub fn match_aircraft(&self, raw: Option<&str>) -> Option<AircraftMatch<'_>> {
        match_aircraft(&self.aircraft, raw)
    }

    pub fn aircraft_fullname(&self, raw: Option<&str>) -> Option<String> {
        self.match_aircraft(raw).map(|m| m.full_name())
    }

    /// Local wall-clock time at the airport (`IATA` or `ICAO` code) as an instant.
    pub fn to_instant(
        &self,
        local_timestamp: &str,
        airport_code: &str,
    ) -> Result<DateTime<Utc>, KnowledgeError> {
        let zone = self.timezone_of(airport_code)?;
        time::local_to_instant(local_timestamp, zone)
    }

    /// Raw arrival minus departure, no correction applied.
    pub fn flight_duration(
        &self,
        departure: Option<&str>,
        from: &str,
        arrival: Option<&str>,
        to: &str,
    ) -> Result<FlightDuration, KnowledgeError> {
        let (departure, arrival) = required_times(departure, from, arrival, to)?;
        let dt_departure = self.to_instant(departure, from)?;
        let dt_arrival = self.to_instant(arrival, to)?;
        Ok(FlightDuration::between(dt_departure, dt_arrival))
    }

    pub fn resolve_leg(&self, row: &FlightyRow) -> Result<ResolvedFlightLeg<'_>, KnowledgeError> {
        let (departure_time, arrival_time) =
            required_times(row.departure_time(), &row.from, row.arrival_time(), &row.to)?;
        let departure = self.to_instant(departure_time, &row.from)?;
        let arrival = self.to_instant(arrival_time, &row.to)?;

        let airline = row
            .airline_code()
            .map(|code| self.resolve_airline(code))
            .transpose()?;

        Ok(ResolvedFlightLeg {
            origin: self.resolve_airport(&row.from)?,
            destination: self.resolve_airport(&row.to)?,
            airline,
            aircraft: self.match_aircraft(row.aircraft_type.as_deref()),
            departure,
            arrival,
            duration: FlightDuration::between(departure, arrival),
        })
    }
}

fn required_times<'r>(
    departure: Option<&'r str>,
    from: &str,
    arrival: Option<&'r str>,
    to: &str,
) -> Result<(&'r str, &'r str), KnowledgeError> {
    let departure = departure.filter(|s| !s.trim().is_empty());
    let arrival = arrival.filter(|s| !s.trim().is_empty());
    match (departure, arrival) {
        (Some(departure), Some(arrival)) => Ok((departure, arrival)),
        _ => Err(KnowledgeError::MissingInput {
            departure: departure.map(str::to_owned),
            from: from.to_owned(),
            arrival: arrival.map(str::to_owned),
            to: to.to_owned(),
        }),
    }
}
