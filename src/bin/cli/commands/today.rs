use std::path::Path;

use anyhow::{Context, Result};

use daily_cards_lib::cards::{select_daily, DayKey};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(
    app: &App,
    cards_override: Option<&Path>,
    day_key: &DayKey,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let pool = app.load_pool(cards_override)?;

    let today = select_daily(&pool, day_key, &app.config.buckets)
        .with_context(|| format!("Could not pick the cards for {}", day_key))?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "dayKey": day_key,
                "cards": today,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::render_cards(day_key, &today, use_color));
        }
    }

    Ok(())
}
