use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use alarmcard::alarm::model::{DEFAULT_HOUR, DEFAULT_MINUTE, MIN_DAYS_FOR_ABBREVIATED_LABELS};
use alarmcard::alarm::{AlarmError, AlarmState, Day, DisplaySettings, parse_alarm_record_text};
use alarmcard::presenter::{
    AlarmContainer, AlarmPresenter, AlarmView, CardPresenter, TextPresenter,
};

const LOG_ENV: &str = "ALARMCARD_LOG";

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "alarmcard",
    version,
    about = "Render a weekly alarm as a card or as its JSON record"
)]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_HOUR)]
    hour: u32,

    #[arg(long, default_value_t = DEFAULT_MINUTE)]
    minute: u32,

    /// Comma separated days, full names or abbreviations (e.g. mon,wed,fri).
    #[arg(long, value_delimiter = ',', value_parser = parse_day)]
    days: Vec<Day>,

    #[arg(long, conflicts_with = "days")]
    all_days: bool,

    /// JSON alarm record to render instead of building one from flags; `-` reads stdin.
    #[arg(long, conflicts_with_all = ["hour", "minute", "days", "all_days"])]
    record: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[arg(
        long,
        default_value_t = MIN_DAYS_FOR_ABBREVIATED_LABELS as u8,
        value_parser = clap::value_parser!(u8).range(0..=7)
    )]
    abbreviate_up_to: u8,
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let alarm = load_alarm(&cli)?;
    let settings = DisplaySettings {
        abbreviated_label_max_days: usize::from(cli.abbreviate_up_to),
    };
    let view = AlarmView::from_state_with(&alarm, &settings);

    let output = match cli.format {
        OutputFormat::Text => TextPresenter.render(&view),
        OutputFormat::Html => {
            let mut container = AlarmContainer::new();
            container.attach(CardPresenter.render(&view));
            container.to_html()
        }
        OutputFormat::Json => alarm.to_serializable().to_json_text()?,
    };
    println!("{output}");
    Ok(())
}

fn load_alarm(cli: &Cli) -> Result<AlarmState> {
    if let Some(record) = &cli.record {
        let text = if record == "-" {
            io::read_to_string(io::stdin()).context("unable to read alarm record from stdin")?
        } else {
            record.clone()
        };
        return parse_alarm_record_text(&text).context("failed to load alarm record");
    }

    let mut alarm =
        AlarmState::with_time(cli.hour, cli.minute).context("failed to build alarm")?;
    if cli.all_days {
        alarm.set_all_days(true);
    }
    for day in &cli.days {
        alarm.set_day_active(*day, true);
    }
    Ok(alarm)
}

fn parse_day(input: &str) -> Result<Day, AlarmError> {
    Day::from_label(input)
}
