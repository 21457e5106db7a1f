use crate::airline::AirlineRecord;
use crate::error::{ConvertError, KnowledgeError};
use crate::export::convert_rows;
use crate::flight::{FlightyRow, ResolvedFlightLeg};
use crate::knowledge::knowledge_base::KnowledgeBase;
use crate::time;
use serde::Serialize;
use std::io::{Read, Write};

pub const HEADERS: [&str; 19] = [
    "Date",
    "Flight number",
    "From",
    "To",
    "Dep time",
    "Arr time",
    "Duration",
    "Airline",
    "Aircraft",
    "Registration",
    "Seat number",
    "Seat type",
    "Flight class",
    "Flight reason",
    "Note",
    "Dep_id",
    "Arr_id",
    "Airline_id",
    "Aircraft_id",
];

/// One output line, fields in [`HEADERS`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fr24Record {
    pub date: String,
    pub flight_number: String,
    pub from: String,
    pub to: String,
    pub dep_time: String,
    pub arr_time: String,
    pub duration: String,
    pub airline: String,
    pub aircraft: String,
    pub registration: Option<String>,
    pub seat_number: Option<String>,
    pub seat_type: Option<String>,
    pub flight_class: Option<u8>,
    pub flight_reason: u8,
    pub note: Option<String>,
    pub dep_id: String,
    pub arr_id: String,
    pub airline_id: String,
    pub aircraft_id: String,
}

fn seat_class(cabin: Option<&str>) -> Option<u8> {
    match cabin? {
        "ECONOMY" => Some(0),
        "BUSINESS" => Some(1),
        "PRIVATE" => Some(2),
        "PREMIUM ECONOMY" => Some(3),
        "FIRST" => Some(4),
        _ => None,
    }
}

fn reason(text: Option<&str>) -> u8 {
    match text {
        Some("LEISURE") => 1,
        Some("BUSINESS") => 2,
        Some("CREW") => 3,
        _ => 4,
    }
}

fn to_day(timestamp: Option<&str>) -> Result<String, KnowledgeError> {
    match timestamp {
        Some(ts) => Ok(time::parse_local(ts)?.format("%H:%M:%S").to_string()),
        None => Ok("00:00:00".to_owned()),
    }
}

// FlightRadar24 only knows Peach Aviation under MM.
fn fr24_airline(airline: &AirlineRecord) -> String {
    if airline.name == "Peach Aviation" {
        format!("{} (MM/{})", airline.name, airline.icao)
    } else {
        airline.to_string()
    }
}

pub fn fr24_record(
    row: &FlightyRow,
    leg: &ResolvedFlightLeg<'_>,
) -> Result<Fr24Record, KnowledgeError> {
    Ok(Fr24Record {
        date: row.date.clone(),
        flight_number: row.flight_number(),
        from: leg.origin.to_string(),
        to: leg.destination.to_string(),
        dep_time: to_day(row.departure_time())?,
        arr_time: to_day(row.arrival_time())?,
        duration: leg.duration.with_rollover_correction().to_string(),
        airline: leg.airline.map(fr24_airline).unwrap_or_default(),
        aircraft: leg
            .aircraft
            .as_ref()
            .map(|a| a.full_name())
            .unwrap_or_default(),
        registration: row.tail_number.clone(),
        seat_number: row.seat.clone(),
        seat_type: row.seat_type.clone(),
        flight_class: seat_class(row.cabin_class.as_deref()),
        flight_reason: reason(row.flight_reason.as_deref()),
        note: row.notes.clone(),
        dep_id: String::new(),
        arr_id: String::new(),
        airline_id: String::new(),
        aircraft_id: String::new(),
    })
}

/// Converts a Flighty CSV export into a FlightRadar24 CSV import file.
pub fn write_fr24<R: Read, W: Write>(
    kb: &KnowledgeBase,
    input: R,
    output: W,
) -> Result<usize, ConvertError> {
    let records = convert_rows(kb, input, fr24_record)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);
    writer.write_record(HEADERS)?;
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(records.len())
}
