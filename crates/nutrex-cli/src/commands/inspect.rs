//! Inspect command

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use nutrex_model::Document;

use crate::Cli;

/// Output format
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Draft extraction record (JSON file, or '-' for stdin)
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: Format,
}

pub fn run(args: &InspectArgs, _cli: &Cli) -> anyhow::Result<()> {
    let draft = super::read_draft(&args.file)?;
    let result = super::validate_draft(draft)?;

    let Some(document) = &result.extracted_object else {
        println!("no extracted document");
        return Ok(());
    };

    match args.format {
        Format::Json => {
            let triples = document.triples();
            println!("{}", serde_json::to_string_pretty(&triples)?);
        }
        Format::Text => print_summary(document),
    }

    Ok(())
}

fn print_summary(document: &Document) {
    fn count<T>(list: &Option<Vec<T>>) -> usize {
        list.as_ref().map(Vec::len).unwrap_or(0)
    }

    println!("document: {}", document.id);
    println!(
        "  disease:            {}",
        count(&document.nutrient_to_disease_relationships)
    );
    println!(
        "  phenotype:          {}",
        count(&document.nutrient_to_phenotype_relationships)
    );
    println!(
        "  biological process: {}",
        count(&document.nutrient_to_biological_process_relationships)
    );
    println!(
        "  health status:      {}",
        count(&document.nutrient_to_health_status_relationships)
    );
    println!(
        "  source:             {}",
        count(&document.nutrient_to_source_relationships)
    );
    println!(
        "  nutrient pair:      {}",
        count(&document.nutrient_to_nutrient_relationships)
    );

    for triple in document.triples() {
        println!(
            "  {} {} {}",
            triple.subject.as_deref().unwrap_or("?"),
            triple.predicate.as_deref().unwrap_or("?"),
            triple.object.as_deref().unwrap_or("?"),
        );
    }
}
