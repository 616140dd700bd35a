use lumio_types::AgentMode;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Cow;
use std::sync::LazyLock;

// NOTE: Tag Grammar
//
// <lumio-settings .../>                 self-closing, attributes optional
// <switch-mode>MODE</switch-mode>       MODE is exactly chat|planning|development
//
// Each tag also swallows one newline directly after it, so a tag sitting on
// its own line leaves no blank line behind. Nothing else is matched: no
// whitespace inside tag names, no case folding, no unknown modes. Those stay
// in the text on purpose.

/// Settings tag, including its optional attribute list and one trailing newline
static SETTINGS_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<lumio-settings(?:\s([^>]*))?/>\n?").unwrap());

/// Mode switch tag with one of the known modes
static SWITCH_MODE_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<switch-mode>(chat|planning|development)</switch-mode>\n?").unwrap()
});

/// `name="value"` or `name='value'` inside a settings tag
static SETTINGS_ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_.:-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Remove every `<lumio-settings .../>` tag
pub fn strip_settings_tags(text: &str) -> Cow<'_, str> {
    SETTINGS_TAG_REGEX.replace_all(text, "")
}

/// Remove every `<switch-mode>MODE</switch-mode>` tag whose mode is known
pub fn strip_switch_mode_tags(text: &str) -> Cow<'_, str> {
    SWITCH_MODE_TAG_REGEX.replace_all(text, "")
}

/// Remove all control tags: settings first, then mode switches
pub fn strip_control_tags(text: &str) -> Cow<'_, str> {
    match strip_settings_tags(text) {
        Cow::Borrowed(rest) => strip_switch_mode_tags(rest),
        Cow::Owned(rest) => Cow::Owned(strip_switch_mode_tags(&rest).into_owned()),
    }
}

/// Mode requested by the first valid `<switch-mode>` tag, if any
pub fn parse_agent_mode_switch(message: &str) -> Option<AgentMode> {
    SWITCH_MODE_TAG_REGEX
        .captures(message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Every valid mode switch, in order of appearance
pub fn parse_agent_mode_switches(message: &str) -> Vec<AgentMode> {
    SWITCH_MODE_TAG_REGEX
        .captures_iter(message)
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Attributes carried by a `<lumio-settings .../>` tag, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub attributes: Vec<(String, String)>,
}

impl Settings {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl Serialize for Settings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len()))?;
        for (key, value) in &self.attributes {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Attributes of the first settings tag in the message
///
/// Returns `Some` with an empty attribute list for a bare `<lumio-settings/>`.
/// Text inside the tag that is not a quoted attribute is ignored.
pub fn parse_settings(message: &str) -> Option<Settings> {
    let caps = SETTINGS_TAG_REGEX.captures(message)?;
    let body = caps.get(1).map(|m| m.as_str()).unwrap_or("");

    let attributes = SETTINGS_ATTR_REGEX
        .captures_iter(body)
        .filter_map(|attr| {
            let name = attr.get(1)?.as_str().to_string();
            let value = attr.get(2).or_else(|| attr.get(3))?.as_str().to_string();
            Some((name, value))
        })
        .collect();

    Some(Settings { attributes })
}
