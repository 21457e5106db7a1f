use crate::aircraft::AircraftTypeRecord;
use crate::airline::AirlineRecord;
use crate::airport::AirportRecord;
use crate::knowledge::knowledge_base::KnowledgeBase;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn add_airport(airports: &mut Vec<AirportRecord>, iata: &str, icao: &str, name: &str, tz: &str) {
    airports.push(AirportRecord {
        iata: Arc::from(iata),
        icao: Arc::from(icao),
        name: name.to_owned(),
        city: String::new(),
        country: String::new(),
        lat: 0.0,
        lon: 0.0,
        tz: tz.to_owned(),
    });
}

pub fn add_airline(airlines: &mut Vec<AirlineRecord>, iata: &str, icao: &str, name: &str) {
    airlines.push(AirlineRecord {
        iata: iata.to_owned(),
        icao: icao.to_owned(),
        name: name.to_owned(),
    });
}

pub fn add_aircraft(
    aircraft: &mut Vec<AircraftTypeRecord>,
    manufacturer: &str,
    model: &str,
    designator: &str,
) {
    aircraft.push(AircraftTypeRecord {
        manufacturer_code: manufacturer.to_owned(),
        model_full_name: model.to_owned(),
        designator: designator.to_owned(),
    });
}

pub fn fixture_airports() -> Vec<AirportRecord> {
    let mut airports = Vec::new();
    add_airport(&mut airports, "CDG", "LFPG", "Charles de Gaulle International Airport", "Europe/Paris");
    add_airport(&mut airports, "LHR", "EGLL", "London Heathrow Airport", "Europe/London");
    add_airport(&mut airports, "JFK", "KJFK", "John F Kennedy International Airport", "America/New_York");
    add_airport(&mut airports, "SFO", "KSFO", "San Francisco International Airport", "America/Los_Angeles");
    add_airport(&mut airports, "GRU", "SBGR", "Guarulhos International Airport", "America/Sao_Paulo");
    add_airport(&mut airports, "KEF", "BIKF", "Keflavik International Airport", "Atlantic/Reykjavik");
    add_airport(&mut airports, "BDA", "TXKF", "L.F. Wade International Airport", "Atlantic/Bermuda");
    add_airport(&mut airports, "ABJ", "DIAP", "Felix Houphouet Boigny International Airport", "Africa/Abidjan");
    add_airport(&mut airports, "CAI", "HECA", "Cairo International Airport", "Africa/Cairo");
    add_airport(&mut airports, "NRT", "RJAA", "Narita International Airport", "Asia/Tokyo");
    // same IATA code twice
    add_airport(&mut airports, "DUP", "XDUA", "Duplicate One", "Europe/Berlin");
    add_airport(&mut airports, "DUP", "XDUB", "Duplicate Two", "Europe/Berlin");
    add_airport(&mut airports, "ZZZ", "XZZZ", "Nowhere", "Mars/Olympus_Mons");
    add_airport(&mut airports, "", "LFPN", "Toussus-le-Noble Airport", "Europe/Paris");
    airports
}

pub fn fixture_airlines() -> Vec<AirlineRecord> {
    let mut airlines = Vec::new();
    add_airline(&mut airlines, "AF", "AFR", "Air France");
    add_airline(&mut airlines, "UA", "UAL", "United Airlines");
    add_airline(&mut airlines, "LH", "DLH", "Lufthansa");
    add_airline(&mut airlines, "", "DLH", "Deutsche Luft Hansa");
    add_airline(&mut airlines, "MM", "APJ", "Peach Aviation");
    add_airline(&mut airlines, "MM", "SAM", "SAM Colombia");
    airlines
}

pub fn fixture_aircraft() -> Vec<AircraftTypeRecord> {
    let mut aircraft = Vec::new();
    add_aircraft(&mut aircraft, "AIRBUS", "A-320", "A320");
    add_aircraft(&mut aircraft, "AIRBUS", "A-321", "A321");
    add_aircraft(&mut aircraft, "BOEING", "737-800", "B738");
    add_aircraft(&mut aircraft, "BOEING", "737-900", "B739");
    add_aircraft(&mut aircraft, "BOEING", "737 MAX 8", "B38M");
    add_aircraft(&mut aircraft, "BOEING", "787-9", "B789");
    add_aircraft(&mut aircraft, "FOKKER", "100", "F100");
    add_aircraft(&mut aircraft, "EMBRAER", "ERJ-170-200", "E75L");
    add_aircraft(&mut aircraft, "EMBRAER", "ERJ-190", "E190");
    add_aircraft(&mut aircraft, "EMBRAER", "ERJ-190-E2", "E290");
    add_aircraft(&mut aircraft, "EMBRAER", "ERJ-195-E2", "E295");
    add_aircraft(&mut aircraft, "BOMBARDIER", "Regional Jet CRJ-900", "CRJ9");
    aircraft
}

pub fn fixture_kb() -> KnowledgeBase {
    KnowledgeBase::new(fixture_airports(), fixture_airlines(), fixture_aircraft())
}

pub fn arb_unique_iata() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("CDG"),
        Just("LHR"),
        Just("JFK"),
        Just("SFO"),
        Just("GRU"),
        Just("KEF"),
        Just("NRT"),
    ]
}

/// Lower-cases the characters whose bit is set in `mask`, upper-cases the rest.
pub fn mix_case(code: &str, mask: u8) -> String {
    code.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask & (1 << (i % 8)) != 0 {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}
