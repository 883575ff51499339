use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use clap::{ArgAction, Parser, Subcommand};
use tithi_ephem::{DEFAULT_DELTA_T_SECONDS, LunisolarElongation};
use tithi_search::{
    DEFAULT_PRECISION_DEG, SearchConfig, TITHI_STEP_DEG, angle_between, find_tithi_by_day,
    search_tithi_in_range,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tithi", version, about = "Tithi boundary search CLI")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG applies otherwise
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// ΔT (TT − UTC) in seconds used by the elongation model
    #[arg(long, global = true, default_value_t = DEFAULT_DELTA_T_SECONDS)]
    delta_t: f64,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tithis starting on each UTC date from --start to --end (inclusive)
    Range {
        /// Start date (YYYY-MM-DD, YYYY-MM-DDThh:mm:ss[Z] or RFC 3339)
        #[arg(long, value_parser = parse_utc)]
        start: DateTime<Utc>,
        /// End date, after --start
        #[arg(long, value_parser = parse_utc)]
        end: DateTime<Utc>,
        /// Comma-separated indices to keep, e.g. 11,26
        #[arg(long, value_delimiter = ',')]
        filter: Vec<u8>,
        /// Angular precision in degrees
        #[arg(long, default_value_t = DEFAULT_PRECISION_DEG)]
        precision: f64,
        /// Cell width in degrees (must divide 180)
        #[arg(long, default_value_t = TITHI_STEP_DEG)]
        step: u16,
    },
    /// Crossing instants on one UTC date
    Day {
        /// Date to scan (time of day is ignored)
        #[arg(long, value_parser = parse_utc)]
        date: DateTime<Utc>,
        /// Angular precision in degrees
        #[arg(long, default_value_t = DEFAULT_PRECISION_DEG)]
        precision: f64,
    },
    /// Sun-Moon separation in degrees [0, 180] at an instant
    Angle {
        /// UTC instant
        #[arg(long, value_parser = parse_utc)]
        date: DateTime<Utc>,
    },
}

fn parse_utc(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Ok(t.with_timezone(&Utc));
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(s.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S") {
        return Ok(t.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN).and_utc());
    }
    Err(format!(
        "expected YYYY-MM-DD, YYYY-MM-DDThh:mm:ss[Z] or RFC 3339, got {s}"
    ))
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.delta_t.is_finite() {
        bail!("--delta-t must be a finite number of seconds");
    }
    let oracle = LunisolarElongation::new(cli.delta_t);

    match cli.command {
        Commands::Range {
            start,
            end,
            filter,
            precision,
            step,
        } => {
            let config = SearchConfig {
                angular_step_deg: step,
                precision_deg: precision,
                ..SearchConfig::default()
            };
            let wanted: HashSet<u8> = filter.into_iter().collect();
            let index_filter = (!wanted.is_empty()).then_some(&wanted);
            let tithis = search_tithi_in_range(&oracle, start, end, index_filter, &config)
                .with_context(|| format!("tithi search {start} .. {end} failed"))?;
            info!(count = tithis.len(), "range done");
            for t in &tithis {
                println!("{t}");
            }
        }

        Commands::Day { date, precision } => {
            let instants = find_tithi_by_day(&oracle, date, precision)
                .with_context(|| format!("day scan for {} failed", date.date_naive()))?;
            for t in &instants {
                println!("{}", t.format("%Y-%m-%dT%H:%M:%SZ"));
            }
        }

        Commands::Angle { date } => {
            println!("{:.6}", angle_between(&oracle, date));
        }
    }
    Ok(())
}
