use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Operating mode a conversational agent can be switched into
///
/// Parsing is exact and case-sensitive: `"planning"` is a mode,
/// `"Planning"` and `" planning"` are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentMode {
    Chat,
    Planning,
    Development,
}

impl AgentMode {
    pub const ALL: [AgentMode; 3] = [AgentMode::Chat, AgentMode::Planning, AgentMode::Development];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentMode::Chat => "chat",
            AgentMode::Planning => "planning",
            AgentMode::Development => "development",
        }
    }
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chat" => Ok(AgentMode::Chat),
            "planning" => Ok(AgentMode::Planning),
            "development" => Ok(AgentMode::Development),
            other => Err(Error::InvalidAgentMode(other.to_string())),
        }
    }
}
