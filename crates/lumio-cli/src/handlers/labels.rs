use crate::types::OutputFormat;
use anyhow::Result;
use lumio_runtime::FILES_ATTACHED_KEY;
use serde_json::json;

pub fn handle(locale: &str, label: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!(
            "{}",
            json!({ "locale": locale, "key": FILES_ATTACHED_KEY, "label": label })
        ),
        OutputFormat::Plain => println!("{}", label),
    }
    Ok(())
}
