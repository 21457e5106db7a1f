use crate::airport::{AirportRecord, Continent};
use crate::error::{ConvertError, KnowledgeError};
use crate::export::convert_rows;
use crate::flight::{FlightyRow, ResolvedFlightLeg};
use crate::knowledge::knowledge_base::KnowledgeBase;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::io::{Read, Write};

#[derive(Debug, Serialize)]
pub struct AirTrailExport {
    pub users: Vec<AirTrailUser>,
    pub flights: Vec<AirTrailFlight>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirTrailUser {
    pub id: String,
    pub username: String,
    pub display_name: String,
}

#[derive(Debug, Serialize)]
pub struct AirTrailAirport {
    pub code: String,
    pub iata: String,
    pub icao: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub tz: String,
    pub country: String,
    pub continent: Option<Continent>,
}

impl AirTrailAirport {
    fn from_record(airport: &AirportRecord) -> Result<Self, KnowledgeError> {
        Ok(AirTrailAirport {
            code: airport.icao.to_string(),
            iata: airport.iata.to_string(),
            icao: airport.icao.to_string(),
            name: airport.name.clone(),
            lat: airport.lat,
            lon: airport.lon,
            tz: airport.tz.clone(),
            country: airport.country.clone(),
            continent: airport.continent()?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct AirTrailAirline {
    pub name: String,
    pub iata: String,
    pub icao: String,
}

#[derive(Debug, Serialize)]
pub struct AirTrailAircraft {
    pub name: String,
    pub icao: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirTrailSeat {
    pub user_id: String,
    pub seat: Option<&'static str>,
    pub seat_number: Option<String>,
    pub seat_class: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirTrailFlight {
    pub date: String,
    pub from: AirTrailAirport,
    pub to: AirTrailAirport,
    pub departure: String,
    pub arrival: String,
    pub duration: i64,
    pub flight_number: Option<String>,
    pub flight_reason: &'static str,
    pub airline: Option<AirTrailAirline>,
    pub aircraft: Option<AirTrailAircraft>,
    pub aircraft_reg: Option<String>,
    pub note: Option<String>,
    pub seats: Vec<AirTrailSeat>,
}

fn seat(seat_type: Option<&str>) -> Option<&'static str> {
    match seat_type? {
        "WINDOW" => Some("window"),
        "AISLE" => Some("aisle"),
        "MIDDLE" => Some("middle"),
        _ => Some("other"),
    }
}

fn seat_class(cabin: Option<&str>) -> Option<&'static str> {
    match cabin? {
        "ECONOMY" => Some("economy"),
        "PREMIUM ECONOMY" => Some("economy+"),
        "BUSINESS" => Some("business"),
        "FIRST" => Some("first"),
        "PRIVATE" => Some("private"),
        _ => None,
    }
}

fn reason(text: Option<&str>) -> &'static str {
    match text {
        Some("LEISURE") => "leisure",
        Some("BUSINESS") => "business",
        Some("CREW") => "crew",
        _ => "other",
    }
}

fn instant(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn airtrail_flight(
    user_id: &str,
    row: &FlightyRow,
    leg: &ResolvedFlightLeg<'_>,
) -> Result<AirTrailFlight, KnowledgeError> {
    let flight_number = Some(row.flight_number()).filter(|n| !n.is_empty());
    Ok(AirTrailFlight {
        date: row.date.clone(),
        from: AirTrailAirport::from_record(leg.origin)?,
        to: AirTrailAirport::from_record(leg.destination)?,
        departure: instant(leg.departure),
        arrival: instant(leg.arrival),
        duration: leg.duration.seconds(),
        flight_number,
        flight_reason: reason(row.flight_reason.as_deref()),
        airline: leg.airline.map(|a| AirTrailAirline {
            name: a.name.clone(),
            iata: a.iata.clone(),
            icao: a.icao.clone(),
        }),
        aircraft: leg.aircraft.as_ref().map(|a| AirTrailAircraft {
            name: a.full_name(),
            icao: a.record().map(|r| r.designator.clone()),
        }),
        aircraft_reg: row.tail_number.clone(),
        note: row.notes.clone(),
        seats: vec![AirTrailSeat {
            user_id: user_id.to_owned(),
            seat: seat(row.seat_type.as_deref()),
            seat_number: row.seat.clone(),
            seat_class: seat_class(row.cabin_class.as_deref()),
        }],
    })
}

/// Converts a Flighty CSV export into an AirTrail JSON import document.
pub fn write_airtrail<R: Read, W: Write>(
    kb: &KnowledgeBase,
    username: &str,
    input: R,
    output: W,
) -> Result<usize, ConvertError> {
    let flights = convert_rows(kb, input, |row, leg| airtrail_flight(username, row, leg))?;
    let count = flights.len();
    let export = AirTrailExport {
        users: vec![AirTrailUser {
            id: username.to_owned(),
            username: username.to_owned(),
            display_name: username.to_owned(),
        }],
        flights,
    };
    serde_json::to_writer_pretty(output, &export)?;
    Ok(count)
}
