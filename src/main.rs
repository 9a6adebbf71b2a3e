//! Command-line companion for consent configuration files.
//!
//! - `defaults [--json]`: print the built-in options.
//! - `check <file>`: parse and validate a file, then summarize it.
//! - `text <file> <key> <lang>`: resolve one localized string with fallback.
//! - `bindings <dir>`: export TypeScript declarations.

use anyhow::{Context, Result, anyhow, bail};
use consent_config::bindings::export_ts_bindings;
use consent_config::config::{
    ConsentOptions, PromptVariant, TextKey, read_config, serialize_config,
};
use std::env;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const USAGE: &str = "Usage: consent-config <defaults [--json] | check <file> | text <file> <key> <lang> | bindings <dir>>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Defaults { json: bool },
    Check { path: PathBuf },
    Text { path: PathBuf, key: TextKey, lang: String },
    Bindings { dir: PathBuf },
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    match parse_args(env::args().skip(1))? {
        Command::Defaults { json } => {
            let options = ConsentOptions::defaults();
            let rendered = if json {
                serde_json::to_string_pretty(options).context("Failed to render JSON")?
            } else {
                serialize_config(options)?
            };
            println!("{rendered}");
        }
        Command::Check { path } => {
            let options = read_config(&path)
                .with_context(|| format!("Invalid consent config {}", path.display()))?;
            info!(
                path = %path.display(),
                revision = options.revision,
                categories = options.categories.len(),
                required = options.required_categories().count(),
                "Consent config is valid"
            );
            match &options.prompt_variant {
                PromptVariant::Modal { position, layout } => {
                    println!("prompt\tmodal\t{position}\t{layout}")
                }
                PromptVariant::Custom { component } => println!("prompt\tcustom\t{component}"),
            }
            for category in &options.categories {
                println!(
                    "{}\trequired={}\tpreselected={}\tservices={}",
                    category.identifier,
                    category.is_required,
                    category.is_preselected,
                    category.services.len()
                );
            }
        }
        Command::Text { path, key, lang } => {
            let options = read_config(&path)
                .with_context(|| format!("Invalid consent config {}", path.display()))?;
            let text = options
                .localized(key, &lang)
                .ok_or_else(|| anyhow!("No '{key}' text for '{lang}' or '{}'", options.default_locale))?;
            println!("{text}");
        }
        Command::Bindings { dir } => export_ts_bindings(&dir)?,
    }
    Ok(())
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Command> {
    let command = args.next().ok_or_else(|| anyhow!(USAGE))?;
    let mut next = |what: &str| args.next().ok_or_else(|| anyhow!("Missing {what}. {USAGE}"));
    let parsed = match command.as_str() {
        "defaults" => match next("flag").ok() {
            None => Command::Defaults { json: false },
            Some(flag) if flag == "--json" => Command::Defaults { json: true },
            Some(flag) => bail!("Unknown flag {flag}. {USAGE}"),
        },
        "check" => Command::Check {
            path: PathBuf::from(next("file")?),
        },
        "text" => {
            let path = PathBuf::from(next("file")?);
            let key = next("key")?.parse::<TextKey>().map_err(|err| anyhow!(err))?;
            let lang = next("language")?;
            Command::Text { path, key, lang }
        }
        "bindings" => Command::Bindings {
            dir: PathBuf::from(next("directory")?),
        },
        other => bail!("Unknown command {other}. {USAGE}"),
    };
    Ok(parsed)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter),
        )
        .init();
}
