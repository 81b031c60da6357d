//! CLI command implementations

pub mod inspect;
pub mod validate;

use anyhow::Context;
use nutrex_model::{DraftModel, ExtractionResult};
use std::io::Read;
use std::path::Path;

/// Read a draft record from a file, or stdin when the path is `-`.
pub fn read_draft(path: &Path) -> anyhow::Result<serde_json::Value> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read draft from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&raw).context("draft is not valid JSON")
}

/// Coerce a draft into a validated extraction record.
pub fn validate_draft(draft: serde_json::Value) -> anyhow::Result<ExtractionResult> {
    ExtractionResult::from_draft(draft).context("draft failed validation")
}
