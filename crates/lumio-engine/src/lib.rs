//! Display-text normalization for chat messages.
//!
//! Raw messages may embed control tags meant for the UI rather than the
//! reader, and user messages with attachments end with a localized listing
//! of the attached files. This crate turns such a message into the text a
//! chat view should show:
//!
//! ```
//! use lumio_engine::{parse_agent_mode_switch, parse_message_from_event};
//! use lumio_types::{AgentMode, ChatMessageEvent};
//!
//! let event = ChatMessageEvent::assistant("<switch-mode>planning</switch-mode>\nHello");
//! assert_eq!(parse_message_from_event(&event, "Files attached"), "Hello");
//! assert_eq!(
//!     parse_agent_mode_switch(event.raw_text()),
//!     Some(AgentMode::Planning)
//! );
//! ```
//!
//! Tag matching is exact and case-sensitive. Anything that does not match
//! the grammar exactly, such as an unknown mode value or a misspelled tag
//! name, is left in the output so unexpected model output stays visible.

pub mod attachments;
pub mod normalize;
pub mod tags;

pub use attachments::{attachment_names, split_attachment_listing};
pub use normalize::{MessageNormalizer, RenderedMessage, parse_message_from_event};
pub use tags::{
    Settings, parse_agent_mode_switch, parse_agent_mode_switches, parse_settings,
    strip_control_tags, strip_settings_tags, strip_switch_mode_tags,
};
