//! Formatting commands - date, number and truncate

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

use devoverflow_core::{format_date, format_number, truncate_text};

use crate::output;

#[derive(Serialize)]
struct Formatted {
    input: String,
    output: String,
}

fn print(input: &str, formatted: String, json: bool) -> Result<()> {
    if json {
        return output::json(Formatted {
            input: input.to_string(),
            output: formatted,
        });
    }
    println!("{}", formatted);
    Ok(())
}

pub fn run_date(date: Option<&str>, json: bool) -> Result<()> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))?,
        None => Local::now().date_naive(),
    };
    print(&date.to_string(), format_date(&date), json)
}

pub fn run_number(value: &str, json: bool) -> Result<()> {
    let formatted = if let Ok(n) = value.parse::<i128>() {
        format_number(n)
    } else if let Ok(n) = value.parse::<f64>() {
        debug!(value, "formatting as floating point");
        format_number(n)
    } else {
        bail!("Not a number: {}", value);
    };
    print(value, formatted, json)
}

pub fn run_truncate(text: &str, max: isize, json: bool) -> Result<()> {
    print(text, truncate_text(text, max), json)
}
