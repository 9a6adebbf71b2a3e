//! Consent widget configuration.
//!
//! [`ConsentOptions`] is built from static defaults, optionally adjusted by the
//! host or loaded from a TOML file, then frozen before the first render. Any
//! missing entries in a file fall back to the built-in defaults.

mod defaults;
mod duration;
mod io;
mod models;
mod options;
mod tables;
mod text;
mod validation;

pub use defaults::{BUILTIN_LANGUAGES, necessary_category};
pub use io::{ConfigError, load_config, parse_config, read_config, save_config, serialize_config};
pub use models::{
    Category, CheckOptions, ConsentModalLayout, ConsentModalPosition, ConsentOptions,
    CookieWriteOptions, NECESSARY_CATEGORY_IDENTIFIER, PromptVariant, SameSite, Service, TextKey,
};
pub use options::FrozenConsentOptions;
pub use text::LocalizedText;
pub use validation::ValidationError;
