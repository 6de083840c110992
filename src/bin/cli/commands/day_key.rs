use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, now: DateTime<Utc>, format: &OutputFormat) -> Result<()> {
    let day_key = app.day_key(now);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "dayKey": day_key,
                "timezone": app.calculator.timezone().name(),
                "rolloverHour": app.calculator.rollover_hour(),
                "at": now.to_rfc3339(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", day_key);
        }
    }

    Ok(())
}
