mod catalog;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use petcare_core::{
    collect_inputs, nutrition_by_product, AnalysisConfig, Analyzer, KnowledgeBase, PetHistory,
    ProductInput,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "petcare")]
#[command(about = "Pet food ingredient analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a list of products for a pet
    Analyze {
        /// JSON file containing an array of products
        #[arg(long)]
        products: PathBuf,
        /// Symptom tag observed on the pet (repeatable)
        #[arg(long = "symptom")]
        symptoms: Vec<String>,
        /// Species label (default: PETCARE_DEFAULT_SPECIES or 犬)
        #[arg(long)]
        species: Option<String>,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Select recent products and symptoms from a pet history file, then analyze
    History {
        /// JSON file containing the pet history
        #[arg(long)]
        file: PathBuf,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List knowledge base entries in evaluation order
    Catalog,
}

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = AnalysisConfig::from_env();
    let knowledge = load_knowledge(&config)?;
    let analyzer = Analyzer::new(&knowledge);

    match cli.command {
        Commands::Analyze {
            products,
            symptoms,
            species,
            json,
        } => {
            let products: Vec<ProductInput> = read_json(&products)?;
            let species = species.unwrap_or_else(|| config.default_species.clone());
            run_analysis(&analyzer, &products, &symptoms, &species, json)?;
        }
        Commands::History { file, json } => {
            let history: PetHistory = read_json(&file)?;
            let inputs = collect_inputs(&history, chrono::Utc::now(), &config)?;
            run_analysis(
                &analyzer,
                &inputs.products,
                &inputs.symptom_tags,
                &inputs.species,
                json,
            )?;
        }
        Commands::Catalog => {
            print!("{}", catalog::render(&knowledge));
        }
    }

    Ok(())
}

fn run_analysis(
    analyzer: &Analyzer<'_>,
    products: &[ProductInput],
    symptoms: &[String],
    species: &str,
    json: bool,
) -> Result<()> {
    let result = analyzer.analyze(products, symptoms, species);
    let nutrition = nutrition_by_product(products);

    if json {
        let output = serde_json::json!({
            "species": species,
            "symptom_tags": symptoms,
            "result": result,
            "nutrition_by_product": nutrition,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", report::render(&result, &nutrition));
    }
    Ok(())
}

/// The embedded catalog, or the file named by `PETCARE_KNOWLEDGE_PATH`.
fn load_knowledge(config: &AnalysisConfig) -> Result<KnowledgeBase> {
    match &config.knowledge_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog {}", path.display()))?;
            let knowledge = KnowledgeBase::from_json(&json)
                .with_context(|| format!("Invalid catalog {}", path.display()))?;
            tracing::info!(
                "Loaded {} ingredients and {} supplement rules from {}",
                knowledge.ingredients().len(),
                knowledge.supplement_rules().len(),
                path.display()
            );
            Ok(knowledge)
        }
        None => Ok(KnowledgeBase::builtin().clone()),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_products_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "1", "name": "乾糧", "type": "feed", "ingredient_text": "雞肉、米"}}]"#
        )
        .unwrap();
        let products: Vec<ProductInput> = read_json(file.path()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].product_type, "feed");
    }

    #[test]
    fn test_read_json_reports_path() {
        let err = read_json::<Vec<ProductInput>>(Path::new("/nonexistent/products.json"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/products.json"));
    }

    #[test]
    fn test_load_custom_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"sections": [{{"name": "harmful", "ingredients": [{{
                "display_name": "葡萄", "patterns": ["葡萄乾", "grape"],
                "category": "harmful", "risk_level": "toxic", "effect": "腎衰竭"
            }}]}}]}}"#
        )
        .unwrap();
        let config = AnalysisConfig {
            knowledge_path: Some(file.path().to_path_buf()),
            ..AnalysisConfig::default()
        };
        let knowledge = load_knowledge(&config).unwrap();
        assert_eq!(knowledge.ingredients().len(), 1);
        assert!(knowledge.supplement_rules().is_empty());
    }
}
