use super::text_or_stdin;
use crate::types::OutputFormat;
use anyhow::Result;
use lumio_engine::{parse_agent_mode_switch, parse_agent_mode_switches};
use serde_json::json;

pub fn handle(text: Option<String>, all: bool, format: OutputFormat) -> Result<()> {
    let text = text_or_stdin(text)?;

    if all {
        let modes = parse_agent_mode_switches(&text);
        match format {
            OutputFormat::Json => println!("{}", json!({ "modes": modes })),
            OutputFormat::Plain if modes.is_empty() => println!("none"),
            OutputFormat::Plain => {
                for mode in modes {
                    println!("{}", mode);
                }
            }
        }
        return Ok(());
    }

    let mode = parse_agent_mode_switch(&text);
    match format {
        OutputFormat::Json => println!("{}", json!({ "mode": mode })),
        OutputFormat::Plain => match mode {
            Some(mode) => println!("{}", mode),
            None => println!("none"),
        },
    }
    Ok(())
}
