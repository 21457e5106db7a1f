use crate::aircraft::AircraftMatch;
use crate::airline::AirlineRecord;
use crate::airport::AirportRecord;
use crate::time::FlightDuration;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One row of a Flighty CSV export. Columns not listed here are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FlightyRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Airline")]
    pub airline: Option<String>,
    #[serde(rename = "Flight")]
    pub flight: Option<String>,
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "Gate Departure (Scheduled)")]
    pub gate_departure_scheduled: Option<String>,
    #[serde(rename = "Gate Departure (Actual)")]
    pub gate_departure_actual: Option<String>,
    #[serde(rename = "Landing (Scheduled)")]
    pub landing_scheduled: Option<String>,
    #[serde(rename = "Landing (Actual)")]
    pub landing_actual: Option<String>,
    #[serde(rename = "Gate Arrival (Scheduled)")]
    pub gate_arrival_scheduled: Option<String>,
    #[serde(rename = "Gate Arrival (Actual)")]
    pub gate_arrival_actual: Option<String>,
    #[serde(rename = "Aircraft Type Name")]
    pub aircraft_type: Option<String>,
    #[serde(rename = "Tail Number")]
    pub tail_number: Option<String>,
    #[serde(rename = "Seat")]
    pub seat: Option<String>,
    #[serde(rename = "Seat Type")]
    pub seat_type: Option<String>,
    #[serde(rename = "Cabin Class")]
    pub cabin_class: Option<String>,
    #[serde(rename = "Flight Reason")]
    pub flight_reason: Option<String>,
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl FlightyRow {
    /// Actual gate departure, falling back to the scheduled one.
    pub fn departure_time(&self) -> Option<&str> {
        present(&self.gate_departure_actual).or_else(|| present(&self.gate_departure_scheduled))
    }

    /// Gate arrival (actual, then scheduled), then landing (actual, then scheduled).
    pub fn arrival_time(&self) -> Option<&str> {
        present(&self.gate_arrival_actual)
            .or_else(|| present(&self.gate_arrival_scheduled))
            .or_else(|| present(&self.landing_actual))
            .or_else(|| present(&self.landing_scheduled))
    }

    pub fn airline_code(&self) -> Option<&str> {
        present(&self.airline)
    }

    pub fn flight_number(&self) -> String {
        format!(
            "{}{}",
            self.airline.as_deref().unwrap_or_default(),
            self.flight.as_deref().unwrap_or_default()
        )
    }
}

/// Everything the exporters need about one leg, resolved against the
/// reference tables. Built per row and dropped once the row is written.
#[derive(Clone, Debug)]
pub struct ResolvedFlightLeg<'kb> {
    pub origin: &'kb AirportRecord,
    pub destination: &'kb AirportRecord,
    pub airline: Option<&'kb AirlineRecord>,
    pub aircraft: Option<AircraftMatch<'kb>>,
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub duration: FlightDuration,
}
