use crate::error::KnowledgeError;
use crate::flight::FlightyRow;
use crate::knowledge::tests::utils::fixture_kb;
use crate::time::FlightDuration;

#[test]
fn test_duration_same_zone() {
    let kb = fixture_kb();
    let duration = kb
        .flight_duration(Some("2024-01-01T10:00"), "ABJ", Some("2024-01-01T12:30"), "ABJ")
        .unwrap();
    assert_eq!(FlightDuration(9000), duration);
    assert_eq!("02:30:00", duration.to_string());
}

#[test]
fn test_duration_minute_and_second_precision_agree() {
    let kb = fixture_kb();
    let minutes = kb
        .flight_duration(Some("2024-01-01T10:00"), "CDG", Some("2024-01-01T12:30"), "KEF")
        .unwrap();
    let seconds = kb
        .flight_duration(Some("2024-01-01T10:00:00"), "CDG", Some("2024-01-01T12:30:00"), "KEF")
        .unwrap();
    let mixed = kb
        .flight_duration(Some("2024-01-01T10:00"), "CDG", Some("2024-01-01T12:30:00"), "KEF")
        .unwrap();
    assert_eq!(minutes, seconds);
    assert_eq!(minutes, mixed);
    // Paris is UTC+1 in January, Reykjavik UTC+0
    assert_eq!(FlightDuration(12_600), minutes);
}

#[test]
fn test_duration_across_zones_and_midnight() {
    let kb = fixture_kb();
    let duration = kb
        .flight_duration(Some("2024-06-01T22:15"), "JFK", Some("2024-06-02T11:40"), "CDG")
        .unwrap();
    // 02:15Z -> 09:40Z
    assert_eq!("07:25:00", duration.to_string());
}

#[test]
fn test_duration_icao_codes() {
    let kb = fixture_kb();
    let by_iata = kb
        .flight_duration(Some("2024-06-01T08:00"), "LHR", Some("2024-06-01T10:20"), "CDG")
        .unwrap();
    let by_icao = kb
        .flight_duration(Some("2024-06-01T08:00"), "EGLL", Some("2024-06-01T10:20"), "LFPG")
        .unwrap();
    assert_eq!(by_iata, by_icao);
    assert_eq!(FlightDuration(4800), by_iata);
}

#[test]
fn test_duration_missing_timestamps() {
    let kb = fixture_kb();
    for (dep, arr) in [
        (None, Some("2024-01-01T12:00")),
        (Some("2024-01-01T10:00"), None),
        (Some(""), Some("2024-01-01T12:00")),
        (None, None),
    ] {
        assert!(
            matches!(
                kb.flight_duration(dep, "CDG", arr, "LHR"),
                Err(KnowledgeError::MissingInput { .. })
            ),
            "{dep:?} {arr:?}"
        );
    }
}

#[test]
fn test_duration_unknown_airport() {
    let kb = fixture_kb();
    assert!(matches!(
        kb.flight_duration(Some("2024-01-01T10:00"), "CDG", Some("2024-01-01T12:00"), "XXX"),
        Err(KnowledgeError::NotFound { .. })
    ));
}

#[test]
fn test_negative_difference_correction() {
    let kb = fixture_kb();
    // westbound the clock times alone stay positive: 09:00Z -> 16:00Z
    let raw = kb
        .flight_duration(Some("2024-01-01T10:00"), "CDG", Some("2024-01-01T08:00"), "SFO")
        .unwrap();
    assert_eq!(FlightDuration(25_200), raw);

    // arrival date not rolled over on an eastbound leg
    let raw = kb
        .flight_duration(Some("2024-01-01T10:00"), "SFO", Some("2024-01-01T08:00"), "CDG")
        .unwrap();
    // 18:00Z -> 07:00Z
    assert_eq!(FlightDuration(-39_600), raw);
    let corrected = raw.with_rollover_correction();
    assert_eq!(FlightDuration(raw.0 + (raw.0 + 86_400)), corrected);
    assert_eq!(FlightDuration(7_200), corrected);
    assert_eq!("02:00:00", corrected.to_string());
}

#[test]
fn test_to_instant() {
    let kb = fixture_kb();
    let instant = kb.to_instant("2024-07-01T09:30", "NRT").unwrap();
    assert_eq!("2024-07-01T00:30:00+00:00", instant.to_rfc3339());
    assert!(matches!(
        kb.to_instant("not a date", "NRT"),
        Err(KnowledgeError::InvalidInput(_))
    ));
}

#[test]
fn test_resolve_leg() {
    let kb = fixture_kb();
    let row = FlightyRow {
        date: "2024-07-01".to_owned(),
        airline: Some("AFR".to_owned()),
        flight: Some("1234".to_owned()),
        from: "CDG".to_owned(),
        to: "LHR".to_owned(),
        gate_departure_scheduled: Some("2024-07-01T10:00".to_owned()),
        landing_actual: Some("2024-07-01T10:05:30".to_owned()),
        aircraft_type: Some("Airbus A321".to_owned()),
        ..Default::default()
    };

    let leg = kb.resolve_leg(&row).unwrap();
    assert_eq!("EGLL", &*leg.destination.icao);
    assert_eq!("Air France", leg.airline.unwrap().name);
    assert_eq!("A321", leg.aircraft.unwrap().record().unwrap().designator);
    assert_eq!(FlightDuration(3930), leg.duration);
    assert_eq!("2024-07-01T08:00:00+00:00", leg.departure.to_rfc3339());
    assert_eq!("2024-07-01T09:05:30+00:00", leg.arrival.to_rfc3339());
}

#[test]
fn test_resolve_leg_bad_airline_code() {
    let kb = fixture_kb();
    let row = FlightyRow {
        airline: Some("AFRA".to_owned()),
        from: "CDG".to_owned(),
        to: "LHR".to_owned(),
        gate_departure_scheduled: Some("2024-07-01T10:00".to_owned()),
        gate_arrival_scheduled: Some("2024-07-01T10:30".to_owned()),
        ..Default::default()
    };
    assert!(matches!(
        kb.resolve_leg(&row),
        Err(KnowledgeError::InvalidInput(_))
    ));
}
