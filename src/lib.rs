//! Configuration model for an embeddable cookie-consent widget.
//!
//! - [`config`]: the options object graph, its defaults and its TOML layout.
//! - [`consent`]: revision matching, category toggles and content checks that
//!   consumers of the options apply.
//! - [`bindings`]: TypeScript declarations for the rendering front-end.

pub mod bindings;
pub mod config;
pub mod consent;

pub use config::{ConsentOptions, FrozenConsentOptions, NECESSARY_CATEGORY_IDENTIFIER};
