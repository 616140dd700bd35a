pub mod config;
pub mod error;
pub mod events;
pub mod i18n;

pub use config::{Config, resolve_config_path};
pub use error::{Error, Result};
pub use events::{LenientLoad, load_events, load_events_lenient, open_event_source};
pub use i18n::{Catalog, DEFAULT_LOCALE, FILES_ATTACHED_KEY, LocaleCatalog, Translate};
