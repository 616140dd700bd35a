pub mod config;
pub mod labels;
pub mod mode;
pub mod render;
pub mod settings;

use anyhow::Result;
use std::io::{self, Read};

/// Text from the command line, or all of stdin when absent
pub(crate) fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
