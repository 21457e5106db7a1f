use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::Tabled;

/// One entry of the ICAO aircraft type designator list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Tabled)]
#[serde(rename_all = "PascalCase")]
pub struct AircraftTypeRecord {
    pub manufacturer_code: String,
    pub model_full_name: String,
    pub designator: String,
}

impl AircraftTypeRecord {
    /// `Boeing 737-800 (B738)` style name used by the exporters.
    pub fn full_name(&self) -> String {
        format!(
            "{} {} ({})",
            capitalize(&self.manufacturer_code),
            self.model_full_name,
            self.designator
        )
    }
}

fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Outcome of matching a free-text aircraft type.
#[derive(Clone, Debug, PartialEq)]
pub enum AircraftMatch<'a> {
    Record(&'a AircraftTypeRecord),
    /// Type kept as-is on purpose, there is no single designator for it.
    Verbatim(String),
    /// No rule produced a record; the trimmed input is carried through.
    PassThrough(String),
}

impl AircraftMatch<'_> {
    pub fn record(&self) -> Option<&AircraftTypeRecord> {
        match self {
            AircraftMatch::Record(record) => Some(*record),
            _ => None,
        }
    }

    pub fn full_name(&self) -> String {
        match self {
            AircraftMatch::Record(record) => record.full_name(),
            AircraftMatch::Verbatim(name) | AircraftMatch::PassThrough(name) => name.clone(),
        }
    }
}

impl fmt::Display for AircraftMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

#[derive(Debug, Clone, Copy)]
enum Pattern {
    Exact(&'static str),
    Contains(&'static str),
    /// "CRJ", any character, then "00".
    CrjSeries,
}

impl Pattern {
    fn matches(&self, aircraft: &str) -> bool {
        match self {
            Pattern::Exact(literal) => aircraft == *literal,
            Pattern::Contains(needle) => aircraft.contains(needle),
            Pattern::CrjSeries => aircraft.match_indices("CRJ").any(|(idx, _)| {
                let mut rest = aircraft[idx + 3..].chars();
                matches!(rest.next(), Some(c) if c != '\n') && rest.as_str().starts_with("00")
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Lookup {
    Verbatim,
    ModelPrefix,
    ModelExact,
    ModelSuffix,
    DesignatorExact,
    DesignatorPrefix,
}

impl Lookup {
    fn accepts(&self, record: &AircraftTypeRecord, key: &str) -> bool {
        match self {
            Lookup::Verbatim => false,
            Lookup::ModelPrefix => record.model_full_name.starts_with(key),
            Lookup::ModelExact => record.model_full_name == key,
            Lookup::ModelSuffix => record.model_full_name.ends_with(key),
            Lookup::DesignatorExact => record.designator == key,
            Lookup::DesignatorPrefix => record.designator.starts_with(key),
        }
    }
}

struct Rule {
    name: &'static str,
    pattern: Pattern,
    rewrite: fn(&str) -> String,
    lookup: Lookup,
}

fn unchanged(s: &str) -> String {
    s.to_owned()
}

fn airbus(s: &str) -> String {
    s.replace("Airbus A", "A-")
}

fn boeing_max(s: &str) -> String {
    s.replace("Boeing ", "")
}

fn boeing(s: &str) -> String {
    s.replace("Boeing ", "").replace(' ', "").replace("900ER", "900")
}

fn fokker(s: &str) -> String {
    s.replace("Fokker ", "F")
}

fn e195_e2(_: &str) -> String {
    "E295".to_owned()
}

fn e175(_: &str) -> String {
    "E75L".to_owned()
}

fn embraer(s: &str) -> String {
    s.replace("Embraer ", "E").replace(' ', "-")
}

fn crj(s: &str) -> String {
    s.replace("Bombardier ", "").replace("CRJ", "CRJ-")
}

// First matching pattern wins, later rules are never consulted.
static RULES: [Rule; 9] = [
    Rule {
        name: "fairchild-metro",
        pattern: Pattern::Exact("Fairchild Merlin/Metro/Expediter"),
        rewrite: unchanged,
        lookup: Lookup::Verbatim,
    },
    Rule {
        name: "airbus",
        pattern: Pattern::Contains("Airbus A"),
        rewrite: airbus,
        lookup: Lookup::ModelPrefix,
    },
    Rule {
        name: "boeing-737-max",
        pattern: Pattern::Contains("Boeing 737 MAX"),
        rewrite: boeing_max,
        lookup: Lookup::ModelExact,
    },
    Rule {
        name: "boeing",
        pattern: Pattern::Contains("Boeing"),
        rewrite: boeing,
        lookup: Lookup::ModelPrefix,
    },
    Rule {
        name: "fokker",
        pattern: Pattern::Contains("Fokker"),
        rewrite: fokker,
        lookup: Lookup::DesignatorExact,
    },
    Rule {
        name: "embraer-195-e2",
        pattern: Pattern::Exact("Embraer 195 E2"),
        rewrite: e195_e2,
        lookup: Lookup::DesignatorExact,
    },
    Rule {
        name: "embraer-175",
        pattern: Pattern::Contains("Embraer 175"),
        rewrite: e175,
        lookup: Lookup::DesignatorExact,
    },
    Rule {
        name: "embraer",
        pattern: Pattern::Contains("Embraer"),
        rewrite: embraer,
        lookup: Lookup::DesignatorPrefix,
    },
    Rule {
        name: "crj",
        pattern: Pattern::CrjSeries,
        rewrite: crj,
        lookup: Lookup::ModelSuffix,
    },
];

/// Maps a free-text aircraft type onto the type list.
///
/// `None` or empty input yields `None`. Otherwise the trimmed text goes
/// through the rule table; when no rule fires, or the fired rule finds no
/// record, the trimmed text comes back as [`AircraftMatch::PassThrough`].
pub fn match_aircraft<'a>(
    types: &'a [AircraftTypeRecord],
    raw: Option<&str>,
) -> Option<AircraftMatch<'a>> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }
    let aircraft = raw.trim();

    let Some(rule) = RULES.iter().find(|rule| rule.pattern.matches(aircraft)) else {
        log::warn!("no aircraft rule for {aircraft:?}, passing it through");
        return Some(AircraftMatch::PassThrough(aircraft.to_owned()));
    };
    log::trace!("aircraft {aircraft:?} handled by rule {}", rule.name);

    if rule.lookup == Lookup::Verbatim {
        return Some(AircraftMatch::Verbatim(aircraft.to_owned()));
    }

    let key = (rule.rewrite)(aircraft);
    match types.iter().find(|record| rule.lookup.accepts(record, &key)) {
        Some(record) => Some(AircraftMatch::Record(record)),
        None => {
            log::warn!("rule {} found no aircraft type for {key:?}", rule.name);
            Some(AircraftMatch::PassThrough(aircraft.to_owned()))
        }
    }
}
