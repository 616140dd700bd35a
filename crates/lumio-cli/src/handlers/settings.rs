use super::text_or_stdin;
use crate::types::OutputFormat;
use anyhow::Result;
use lumio_engine::parse_settings;

pub fn handle(text: Option<String>, format: OutputFormat) -> Result<()> {
    let text = text_or_stdin(text)?;
    let settings = parse_settings(&text);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&settings)?),
        OutputFormat::Plain => match settings {
            Some(settings) if !settings.is_empty() => {
                for (key, value) in &settings.attributes {
                    println!("{}={}", key, value);
                }
            }
            Some(_) => println!("(no attributes)"),
            None => println!("none"),
        },
    }
    Ok(())
}
