use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use flightlog::export::{airtrail, fr24};
use flightlog::knowledge::knowledge_base::KnowledgeBase;
use flightlog::reference::ReferenceData;
use log::LevelFilter;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tabled::settings::Style;

#[derive(Parser)]
#[command(version, about = "Convert a Flighty export for FlightRadar24 or AirTrail")]
struct Args {
    /// Directory holding airports.csv, airline_codes.csv and aircrafts.json
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Log more, repeat for trace output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// FlightRadar24 "My Flights" CSV
    Fr24,
    /// AirTrail JSON
    Airtrail,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Flighty CSV export
    Convert {
        #[arg(long, value_enum)]
        to: Format,
        /// User owning the seats in an AirTrail export
        #[arg(long, default_value = "me")]
        user: String,
        input: PathBuf,
        output: PathBuf,
    },
    /// Show the airport for an IATA or ICAO code
    Airport { code: String },
    /// Show the airline for an IATA (2 letters) or ICAO (3 letters) code
    Airline { code: String },
    /// Show how an aircraft type name is matched
    Aircraft { name: String },
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_module("flightlog", level)
        .parse_default_env()
        .init();
}

fn with_path<T>(path: &Path, result: std::io::Result<T>) -> Result<T, String> {
    result.map_err(|e| format!("{}: {e}", path.display()))
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let kb = KnowledgeBase::from_reference(ReferenceData::load_from_dir(&args.data_dir)?);

    match args.command {
        Command::Convert {
            to,
            user,
            input,
            output,
        } => {
            let reader = BufReader::new(with_path(&input, File::open(&input))?);
            let writer = BufWriter::new(with_path(&output, File::create(&output))?);
            let count = match to {
                Format::Fr24 => fr24::write_fr24(&kb, reader, writer)?,
                Format::Airtrail => airtrail::write_airtrail(&kb, &user, reader, writer)?,
            };
            println!("{} {} flights written to {}", "done:".green().bold(), count, output.display());
        }
        Command::Airport { code } => {
            let airport = kb.find_airport(&code)?;
            let mut table = tabled::Table::new([airport]);
            table.with(Style::rounded());
            println!("{}", table);
            let continent = match airport.continent() {
                Ok(Some(continent)) => continent.to_string(),
                Ok(None) => "-".to_owned(),
                Err(e) => e.to_string(),
            };
            println!("time zone: {}, continent: {}", kb.timezone_of(&code)?.name(), continent);
        }
        Command::Airline { code } => {
            let airline = kb.resolve_airline(&code)?;
            let mut table = tabled::Table::new([airline]);
            table.with(Style::rounded());
            println!("{}", table);
        }
        Command::Aircraft { name } => match kb.match_aircraft(Some(name.as_str())) {
            Some(matched) => {
                if let Some(record) = matched.record() {
                    let mut table = tabled::Table::new([record]);
                    table.with(Style::rounded());
                    println!("{}", table);
                }
                println!("{}", matched);
            }
            None => println!("No aircraft given."),
        },
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
