//! Validate command

use std::path::PathBuf;

use clap::Args;

use crate::Cli;

#[derive(Args)]
pub struct ValidateArgs {
    /// Draft extraction record (JSON file, or '-' for stdin)
    pub file: PathBuf,
}

pub fn run(args: &ValidateArgs, cli: &Cli) -> anyhow::Result<()> {
    let draft = super::read_draft(&args.file)?;
    let result = super::validate_draft(draft)?;

    tracing::info!(
        relationships = result
            .extracted_object
            .as_ref()
            .map(|d| d.relationship_count())
            .unwrap_or(0),
        "record validated"
    );

    if !cli.quiet {
        match &result.extracted_object {
            Some(document) => println!(
                "valid: document {} with {} relationship(s)",
                document.id,
                document.relationship_count()
            ),
            None => println!("valid: no extracted document"),
        }
    }

    Ok(())
}
