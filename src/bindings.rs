//! TypeScript declarations for the front-end that renders the consent UI.

use crate::config::{
    Category, CheckOptions, ConsentModalLayout, ConsentModalPosition, ConsentOptions,
    CookieWriteOptions, LocalizedText, PromptVariant, SameSite, Service, TextKey,
};
use crate::consent::{CheckOutcome, ConsentRecord};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;
use ts_rs::TS;

fn export_single_type<T: TS + 'static>(out_dir: &Path) -> Result<()> {
    T::export_all_to(out_dir).with_context(|| format!("Failed to export {}", T::name()))
}

/// Replaces every `.ts` file in `out_dir` with freshly generated bindings.
pub fn export_ts_bindings(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for entry in
        fs::read_dir(out_dir).with_context(|| format!("Failed to list {}", out_dir.display()))?
    {
        let path = entry.context("Failed to read entry")?.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("ts") {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
    }

    export_single_type::<ConsentOptions>(out_dir)?;
    export_single_type::<CookieWriteOptions>(out_dir)?;
    export_single_type::<CheckOptions>(out_dir)?;
    export_single_type::<Category>(out_dir)?;
    export_single_type::<Service>(out_dir)?;
    export_single_type::<LocalizedText>(out_dir)?;
    export_single_type::<SameSite>(out_dir)?;
    export_single_type::<PromptVariant>(out_dir)?;
    export_single_type::<ConsentModalPosition>(out_dir)?;
    export_single_type::<ConsentModalLayout>(out_dir)?;
    export_single_type::<TextKey>(out_dir)?;
    export_single_type::<ConsentRecord>(out_dir)?;
    export_single_type::<CheckOutcome>(out_dir)?;

    info!(dir = %out_dir.display(), "Exported TypeScript bindings");
    Ok(())
}
