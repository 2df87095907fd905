use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use chrono::NaiveDate;

use gridcal::{calendar::Event, ui::placement::events_on_date_by_start};

pub const USAGE: &str = "Usage: gridcal [--agenda [YYYY/MM/DD]] [--sample] [--ephemeral] [--help]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Agenda(NaiveDate),
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliArgs {
    pub mode: CliMode,
    pub sample: bool,
    pub ephemeral: bool,
}

pub fn parse_args<I>(args: I, today: NaiveDate) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs {
        mode: CliMode::Interactive,
        sample: false,
        ephemeral: false,
    };
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => parsed.sample = true,
            "--ephemeral" => parsed.ephemeral = true,
            "--help" | "-h" => parsed.mode = CliMode::Help,
            "--agenda" => {
                let date = match args.next_if(|next| !next.starts_with("--")) {
                    Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y/%m/%d")
                        .map_err(|_| format!("Invalid date '{}'. Use YYYY/MM/DD.", date_str))?,
                    None => today,
                };
                if parsed.mode != CliMode::Help {
                    parsed.mode = CliMode::Agenda(date);
                }
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(parsed)
}

pub fn run_agenda(date: NaiveDate, events: &[Event]) -> io::Result<()> {
    let agenda = format_agenda_text(date, events);
    display_with_pager(&agenda)
}

pub fn format_agenda_text(date: NaiveDate, events: &[Event]) -> String {
    let mut lines = vec![format!("Agenda for {}", date.format("%A, %B %-d, %Y")), String::new()];

    let day_events = events_on_date_by_start(events, date);
    if day_events.is_empty() {
        lines.push("No events scheduled.".to_string());
    }
    lines.extend(day_events.into_iter().map(agenda_line));

    lines.push(String::new());
    lines.join("\n")
}

fn agenda_line(event: &Event) -> String {
    format!("{}  {}", event.time_range_label().replace(" - ", "-"), event.title)
}

fn display_with_pager(text: &str) -> io::Result<()> {
    let pager_value = env::var("PAGER").unwrap_or_default();
    let mut parts = pager_value.split_whitespace();
    let Some(cmd) = parts.next() else {
        print!("{text}");
        return Ok(());
    };

    match Command::new(cmd).args(parts).stdin(Stdio::piped()).spawn() {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            child.wait()?;
        }
        Err(e) => {
            tracing::warn!("Pager '{}' unavailable: {}", cmd, e);
            print!("{text}");
        }
    }

    Ok(())
}
