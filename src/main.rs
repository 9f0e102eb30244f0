use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use carbon::config::Config;
use carbon::files;
use carbon::output::terminal;
use carbon::pipeline::Pipeline;
use carbon::segment::{JiebaSegmenter, Segmenter};
use carbon::tokens::{StopwordSet, TokenFilter, Tokenizer};
use carbon::vector::VectorConfig;

/// Carbon: plagiarism detection for text documents.
///
/// Scores how much of a candidate document is lifted from an original by
/// comparing TF-IDF vectors built over exactly the two documents.
#[derive(Parser)]
#[command(name = "carbon", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents and report a similarity score in [0, 1]
    Compare {
        /// Path to the original document
        original: PathBuf,

        /// Path to the candidate (suspected copy) document
        candidate: PathBuf,

        /// Write the 2-decimal score to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the report as JSON instead of the colored summary
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        overrides: PipelineArgs,
    },

    /// Show the tokens a document produces after normalization and filtering
    Tokens {
        /// Path to the document
        file: PathBuf,

        #[command(flatten)]
        overrides: PipelineArgs,
    },
}

/// Per-run overrides for the env-based configuration.
#[derive(Args)]
struct PipelineArgs {
    /// Stopword list file, one word per line (default: built-in set)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Custom segmentation dictionary in jieba user-dict format
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Keep single-character tokens instead of dropping them
    #[arg(long)]
    keep_single: bool,

    /// Vocabulary cap for the joint feature space (default: 10000)
    #[arg(long)]
    max_features: Option<usize>,

    /// Use 1-gram features only (default: 1-grams and 2-grams)
    #[arg(long)]
    unigrams_only: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("carbon=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            original,
            candidate,
            output,
            json,
            overrides,
        } => {
            let pipeline = build_pipeline(overrides)?;

            let original_text = files::read_document(&original)?;
            let candidate_text = files::read_document(&candidate)?;

            let comparison = pipeline.compare(&original_text, &candidate_text);

            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                terminal::display_comparison(&comparison);
            }

            if let Some(path) = output {
                files::write_score(&path, comparison.score)?;
                info!(result = %path.display(), "Wrote result file");
            }
        }

        Commands::Tokens { file, overrides } => {
            let pipeline = build_pipeline(overrides)?;
            let text = files::read_document(&file)?;
            terminal::display_tokens(&pipeline.tokenize(&text));
        }
    }

    Ok(())
}

/// Merge environment config with CLI overrides and construct the pipeline.
fn build_pipeline(args: PipelineArgs) -> Result<Pipeline> {
    let config = Config::load()?;

    let stopwords = match args.stopwords.or(config.stopwords_path) {
        Some(path) => StopwordSet::from_file(&path)?,
        None => StopwordSet::builtin(),
    };

    let segmenter: Box<dyn Segmenter> = match args.dict.or(config.dict_path) {
        Some(path) => Box::new(JiebaSegmenter::with_dict_file(&path)?),
        None => Box::new(JiebaSegmenter::new()),
    };

    let filter = TokenFilter::new(stopwords, args.keep_single || config.keep_single);

    let mut vector_config = VectorConfig::default();
    if let Some(cap) = args.max_features.or(config.max_features) {
        vector_config.max_features = cap;
    }
    if args.unigrams_only || config.unigrams_only {
        vector_config.bigrams = false;
    }

    Ok(Pipeline::new(Tokenizer::new(segmenter, filter), vector_config))
}
