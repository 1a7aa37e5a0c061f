//! `slots` CLI — compute bookable appointment slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Free slots for a date (profile JSON from stdin)
//! cat doctor.json | slots available --date 2026-10-19
//!
//! # Subtract bookings and pin the clock
//! slots available -p doctor.json --date 2026-10-19 --booked appointments.json --now 2026-10-19T10:15
//!
//! # Which of the next 6 weeks can be booked
//! slots calendar -p doctor.json --days 42
//!
//! # First free slot from today on
//! slots next -p doctor.json --booked appointments.json
//!
//! # Check a profile against the editing rules
//! slots validate -p doctor.json
//!
//! # UTC window of a booked consultation
//! slots meeting -p doctor.json --date 2026-10-19 --time 10:30
//!
//! # Default profile for a new professional
//! slots template
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`,
//! `-v` for `debug`).

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use slot_engine::meeting::{local_now, DEFAULT_TIMEZONE};
use slot_engine::{
    AppointmentRecord, BookedTimes, DstPolicy, ProfessionalProfile, ProfileDocument, TimeOfDay,
    WeeklySchedule,
};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Compute bookable appointment slots from professional profiles"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options shared by every subcommand that needs a clock.
#[derive(clap::Args)]
struct ClockArgs {
    /// IANA timezone of the clinic
    #[arg(long, default_value = DEFAULT_TIMEZONE)]
    timezone: String,
    /// Local "now" as YYYY-MM-DDTHH:MM[:SS] (defaults to the current time in --timezone)
    #[arg(long, value_parser = parse_now)]
    now: Option<NaiveDateTime>,
}

impl ClockArgs {
    fn now(&self) -> Result<NaiveDateTime> {
        match self.now {
            Some(now) => Ok(now),
            None => local_now(&self.timezone)
                .with_context(|| format!("Failed to read the clock in {}", self.timezone)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the free slots of a date
    Available {
        /// Profile JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        profile: Option<String>,
        /// Date to book (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// JSON array of booked "HH:MM" times or of appointment records
        #[arg(long)]
        booked: Option<String>,
        /// Only count appointment records of this professional (defaults to the profile id)
        #[arg(long)]
        professional_id: Option<String>,
        #[command(flatten)]
        clock: ClockArgs,
        /// Print a JSON array instead of one slot per line
        #[arg(long)]
        json: bool,
    },
    /// List the bookable dates of a period
    Calendar {
        /// Profile JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        profile: Option<String>,
        /// First date of the period (defaults to today)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Number of days in the period
        #[arg(long, default_value_t = 42)]
        days: u32,
        #[command(flatten)]
        clock: ClockArgs,
        /// Print a JSON array instead of one date per line
        #[arg(long)]
        json: bool,
    },
    /// Find the first free slot
    Next {
        /// Profile JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        profile: Option<String>,
        /// First date to look at (defaults to today)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// How many days ahead to search
        #[arg(long, default_value_t = 30)]
        days: u32,
        /// JSON array of appointment records
        #[arg(long)]
        booked: Option<String>,
        /// Only count appointment records of this professional (defaults to the profile id)
        #[arg(long)]
        professional_id: Option<String>,
        #[command(flatten)]
        clock: ClockArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check a profile against the editing rules
    Validate {
        /// Profile JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        profile: Option<String>,
    },
    /// Print the UTC window of a consultation
    Meeting {
        /// Profile JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        profile: Option<String>,
        /// Date of the consultation (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Start time of the consultation (HH:MM)
        #[arg(long, value_parser = parse_time)]
        time: TimeOfDay,
        /// IANA timezone of the clinic
        #[arg(long, default_value = DEFAULT_TIMEZONE)]
        timezone: String,
        /// How to treat local times on a DST transition
        #[arg(long, value_enum, default_value_t = DstArg::WallClock)]
        dst: DstArg,
    },
    /// Print the default profile offered to a new professional
    Template,
}

#[derive(Clone, Copy, ValueEnum)]
enum DstArg {
    Skip,
    ShiftForward,
    WallClock,
}

impl From<DstArg> for DstPolicy {
    fn from(arg: DstArg) -> Self {
        match arg {
            DstArg::Skip => DstPolicy::Skip,
            DstArg::ShiftForward => DstPolicy::ShiftForward,
            DstArg::WallClock => DstPolicy::WallClock,
        }
    }
}

/// Booked times as found in a `--booked` file.
enum Bookings {
    /// Plain `["09:30", ...]` list, already scoped to one professional and date.
    Times(BookedTimes),
    /// Stored appointment records, filtered per professional, date and status.
    Records(Vec<AppointmentRecord>),
}

impl Bookings {
    fn for_date(&self, professional_id: Option<&str>, date: NaiveDate) -> BookedTimes {
        match self {
            Bookings::Times(times) => times.clone(),
            Bookings::Records(records) => {
                BookedTimes::for_professional_on(records, professional_id, date)
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Available {
            profile,
            date,
            booked,
            professional_id,
            clock,
            json,
        } => {
            let profile = load_profile(profile.as_deref())?;
            let bookings = load_bookings(booked.as_deref())?;
            let now = clock.now()?;
            let owner = professional_id.as_deref().or(profile.id.as_deref());

            let booked = bookings
                .as_ref()
                .map(|b| b.for_date(owner, date))
                .unwrap_or_default();
            let slots = profile.available_slots(date, &booked, now);
            info!(%date, %now, slots = slots.len(), "available slots");

            if json {
                println!("{}", serde_json::to_string(&slots)?);
            } else {
                for slot in &slots {
                    println!("{}", slot);
                }
            }
        }
        Commands::Calendar {
            profile,
            from,
            days,
            clock,
            json,
        } => {
            let profile = load_profile(profile.as_deref())?;
            let today = clock.now()?.date();
            let dates =
                slot_engine::bookable_dates(from.unwrap_or(today), days, &profile.schedule, today);

            if json {
                println!("{}", serde_json::to_string(&dates)?);
            } else {
                for date in &dates {
                    println!("{}", date);
                }
            }
        }
        Commands::Next {
            profile,
            from,
            days,
            booked,
            professional_id,
            clock,
            json,
        } => {
            let profile = load_profile(profile.as_deref())?;
            let bookings = load_bookings(booked.as_deref())?;
            if matches!(&bookings, Some(Bookings::Times(times)) if !times.is_empty()) {
                bail!("--booked for `next` must list appointment records, not bare times");
            }
            let now = clock.now()?;
            let owner = professional_id.as_deref().or(profile.id.as_deref());

            let found = slot_engine::next_available_slot(
                from.unwrap_or(now.date()),
                days,
                &profile.schedule,
                i64::from(profile.duration.minutes()),
                |date| {
                    bookings
                        .as_ref()
                        .map(|b| b.for_date(owner, date))
                        .unwrap_or_default()
                },
                now,
            )?;

            match (found, json) {
                (Some((date, time)), true) => {
                    println!("{}", json!({ "date": date, "time": time }));
                }
                (Some((date, time)), false) => println!("{} {}", date, time),
                (None, true) => println!("null"),
                (None, false) => println!("No availability in the next {} days", days),
            }
        }
        Commands::Validate { profile } => {
            let profile = load_profile(profile.as_deref())?;
            profile.validate().context("Profile failed validation")?;
            let open_days = profile.schedule.iter().filter(|(_, d)| d.is_open()).count();
            println!(
                "Profile OK: {} bookable weekdays, {} consultations",
                open_days, profile.duration
            );
        }
        Commands::Meeting {
            profile,
            date,
            time,
            timezone,
            dst,
        } => {
            let profile = load_profile(profile.as_deref())?;
            let window =
                slot_engine::meeting_window(date, time, profile.duration, &timezone, dst.into())
                    .context("Failed to compute the meeting window")?;
            println!("{}", serde_json::to_string_pretty(&window)?);
        }
        Commands::Template => {
            let template = ProfessionalProfile {
                id: None,
                schedule: WeeklySchedule::default(),
                duration: Default::default(),
            };
            let document = ProfileDocument::from(&template);
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn parse_now(s: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM[:SS]: {}", e))
}

fn parse_time(s: &str) -> std::result::Result<TimeOfDay, String> {
    TimeOfDay::parse(s).map_err(|e| e.to_string())
}

fn load_profile(path: Option<&str>) -> Result<ProfessionalProfile> {
    let json = read_input(path)?;
    let profile = ProfessionalProfile::from_json(&json).context("Failed to load profile")?;
    debug!(id = ?profile.id, duration = %profile.duration, "profile loaded");
    Ok(profile)
}

/// Read a `--booked` file holding either `["HH:MM", ...]` or appointment records.
fn load_bookings(path: Option<&str>) -> Result<Option<Bookings>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let json = read_input(Some(path))?;
    let value: serde_json::Value =
        serde_json::from_str(&json).with_context(|| format!("Invalid JSON in {}", path))?;

    let all_strings = value
        .as_array()
        .is_some_and(|items| items.iter().all(|v| v.is_string()));

    let bookings = if all_strings {
        let times: Vec<String> = serde_json::from_value(value)?;
        Bookings::Times(
            BookedTimes::from_times(&times)
                .with_context(|| format!("Invalid booked time in {}", path))?,
        )
    } else {
        let records: Vec<AppointmentRecord> = serde_json::from_value(value)
            .with_context(|| format!("Invalid appointment records in {}", path))?;
        Bookings::Records(records)
    };
    Ok(Some(bookings))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
