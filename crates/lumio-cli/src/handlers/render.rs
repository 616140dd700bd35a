use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use lumio_engine::{MessageNormalizer, RenderedMessage};
use lumio_runtime::{load_events, load_events_lenient, open_event_source};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::Path;

pub fn handle(
    file: Option<&Path>,
    attachment_label: &str,
    lenient: bool,
    skip_empty: bool,
    format: OutputFormat,
) -> Result<()> {
    let reader = open_event_source(file)?;
    let events = if lenient {
        let load = load_events_lenient(reader)?;
        if load.skipped > 0 {
            tracing::info!(skipped = load.skipped, "skipped malformed events");
        }
        load.events
    } else {
        load_events(reader)?
    };

    let normalizer = MessageNormalizer::new(attachment_label);
    let color = format == OutputFormat::Plain && io::stdout().is_terminal();

    let mut out = io::stdout().lock();
    for event in &events {
        let rendered = normalizer.render(event);
        if skip_empty && rendered.text.is_empty() {
            continue;
        }
        match format {
            OutputFormat::Plain => write_plain(&mut out, &rendered, color)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&rendered)?)?,
        }
    }
    out.flush()?;
    Ok(())
}

fn write_plain(out: &mut impl Write, message: &RenderedMessage, color: bool) -> io::Result<()> {
    if color {
        let author = match message.author {
            "user" => message.author.cyan().bold().to_string(),
            _ => message.author.green().bold().to_string(),
        };
        writeln!(out, "{}: {}", author, message.text)
    } else {
        writeln!(out, "{}: {}", message.author, message.text)
    }
}
