use lumio_types::{AgentMode, ChatMessageEvent};
use serde::Serialize;

use crate::attachments::{attachment_names, split_attachment_listing};
use crate::tags::{Settings, parse_agent_mode_switch, parse_settings, strip_control_tags};

/// Text a chat view should display for this event
///
/// 1. Pick the raw text (`content` for users, `message` for the agent)
/// 2. If the event carries file URLs, cut the attachment listing at the
///    first `attachment_label`
/// 3. Strip control tags
/// 4. Trim surrounding whitespace
///
/// `attachment_label` is the localized "files attached" marker; it is used
/// verbatim. Control tags inside the cut listing go away with it.
pub fn parse_message_from_event(event: &ChatMessageEvent, attachment_label: &str) -> String {
    let raw = event.raw_text();
    let text = if event.has_attachments() {
        split_attachment_listing(raw, attachment_label)
    } else {
        raw
    };

    strip_control_tags(text).trim().to_string()
}

/// Everything the renderer derives from a single event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub author: &'static str,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<AgentMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

/// Normalizer bound to a resolved attachment label
#[derive(Debug, Clone)]
pub struct MessageNormalizer {
    attachment_label: String,
}

impl MessageNormalizer {
    pub fn new(attachment_label: impl Into<String>) -> Self {
        Self {
            attachment_label: attachment_label.into(),
        }
    }

    pub fn attachment_label(&self) -> &str {
        &self.attachment_label
    }

    pub fn normalize(&self, event: &ChatMessageEvent) -> String {
        parse_message_from_event(event, &self.attachment_label)
    }

    /// Display text plus mode, settings and attachment names
    ///
    /// Mode and settings are read from the raw text, so a tag that the
    /// attachment cut removes from the display is still reported.
    pub fn render(&self, event: &ChatMessageEvent) -> RenderedMessage {
        let raw = event.raw_text();
        RenderedMessage {
            id: event.id(),
            author: event.author(),
            text: self.normalize(event),
            mode: parse_agent_mode_switch(raw),
            settings: parse_settings(raw),
            attachments: attachment_names(event, &self.attachment_label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELIMITER: &str = "Files attached";

    #[test]
    fn test_plain_text_is_trimmed() {
        let event = ChatMessageEvent::user("  hello world \n");
        assert_eq!(parse_message_from_event(&event, DELIMITER), "hello world");
    }

    #[test]
    fn test_user_reads_content_and_assistant_reads_message() {
        let user = ChatMessageEvent::user("from user");
        let agent = ChatMessageEvent::assistant("from agent");
        assert_eq!(parse_message_from_event(&user, DELIMITER), "from user");
        assert_eq!(parse_message_from_event(&agent, DELIMITER), "from agent");
    }

    #[test]
    fn test_empty_message() {
        let event = ChatMessageEvent::assistant("");
        assert_eq!(parse_message_from_event(&event, DELIMITER), "");
    }

    #[test]
    fn test_settings_then_text() {
        let event = ChatMessageEvent::user("<lumio-settings foo=\"bar\"/>\n  Tell me more ");
        assert_eq!(parse_message_from_event(&event, DELIMITER), "Tell me more");
    }

    #[test]
    fn test_switch_mode_then_text() {
        let event = ChatMessageEvent::assistant("<switch-mode>planning</switch-mode>\nHello");
        assert_eq!(parse_message_from_event(&event, DELIMITER), "Hello");
    }

    #[test]
    fn test_unknown_switch_mode_is_visible() {
        let event = ChatMessageEvent::assistant("<switch-mode>unknown</switch-mode>Hello");
        assert_eq!(
            parse_message_from_event(&event, DELIMITER),
            "<switch-mode>unknown</switch-mode>Hello"
        );
    }

    #[test]
    fn test_attachment_listing_is_cut() {
        let event = ChatMessageEvent::user(format!("Here is my question{DELIMITER}file1.png"))
            .with_file_urls(["u1"]);
        assert_eq!(
            parse_message_from_event(&event, DELIMITER),
            "Here is my question"
        );
    }

    #[test]
    fn test_empty_file_urls_do_not_cut() {
        let raw = format!("Here is my question{DELIMITER}file1.png");
        let event = ChatMessageEvent::user(raw.clone()).with_file_urls(Vec::<String>::new());
        assert_eq!(parse_message_from_event(&event, DELIMITER), raw);
    }

    #[test]
    fn test_tags_after_delimiter_are_discarded_with_listing() {
        let event = ChatMessageEvent::user(format!(
            "<switch-mode>chat</switch-mode>\nQuestion\n{DELIMITER}\n<switch-mode>oops</switch-mode>"
        ))
        .with_file_urls(["u1"]);
        assert_eq!(parse_message_from_event(&event, DELIMITER), "Question");
    }

    #[test]
    fn test_label_is_used_verbatim() {
        let event =
            ChatMessageEvent::user("Pregunta\n\nArchivos adjuntos: a.png").with_file_urls(["u1"]);
        assert_eq!(
            parse_message_from_event(&event, "Archivos adjuntos"),
            "Pregunta"
        );
        assert_eq!(
            parse_message_from_event(&event, DELIMITER),
            "Pregunta\n\nArchivos adjuntos: a.png"
        );
    }

    #[test]
    fn test_render_collects_metadata() {
        let normalizer = MessageNormalizer::new(DELIMITER);
        let event = ChatMessageEvent::user(format!(
            "<lumio-settings model=\"fast\"/>\nBuild it\n{DELIMITER}:\n- plan.md"
        ))
        .with_file_urls(["u1"]);

        let rendered = normalizer.render(&event);
        assert_eq!(rendered.author, "user");
        assert_eq!(rendered.text, "Build it");
        assert_eq!(rendered.mode, None);
        assert_eq!(
            rendered.settings.as_ref().and_then(|s| s.get("model")),
            Some("fast")
        );
        assert_eq!(rendered.attachments, vec!["plan.md"]);
    }

    #[test]
    fn test_render_reports_mode_hidden_by_attachment_cut() {
        let normalizer = MessageNormalizer::new(DELIMITER);
        let event = ChatMessageEvent::user(format!(
            "Go\n{DELIMITER}\n<switch-mode>development</switch-mode>"
        ))
        .with_file_urls(["u1"]);

        let rendered = normalizer.render(&event);
        assert_eq!(rendered.text, "Go");
        assert_eq!(rendered.mode, Some(AgentMode::Development));
    }
}
