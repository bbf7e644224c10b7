use crate::application::dto::OutputFormat;
use crate::catalog::domain::FileLimit;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Catalog the components of a code repository with a generative model
#[derive(Parser, Debug)]
#[command(name = "repo-catalog")]
#[command(version)]
#[command(
    about = "Catalog the components of a code repository with a generative model",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./repo-catalog.config.yml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory whose subdirectories are the selectable repositories
    #[arg(long, global = true, value_name = "DIR")]
    pub repo_root: Option<PathBuf>,

    /// Directory holding the session store
    #[arg(long, global = true, value_name = "DIR")]
    pub session_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a repository or pasted contents and show the catalog
    Analyze(AnalyzeArgs),
    /// Show the component catalog of the last analysis
    Catalog {
        #[command(flatten)]
        filter: FilterArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show the dependency map of the last analysis
    Map {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show one component with its dependencies and dependents
    Show {
        /// Component name (exact match)
        name: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the repositories under the repository root
    Repos,
    /// Remove the stored analysis and end the session
    Clear,
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Model to use (gemini-1.5-pro, gemini-1.5-flash, gemini-pro, ...)
    #[arg(short, long)]
    pub model: Option<String>,

    /// API key for the model backend (defaults to GEMINI_API_KEY / GOOGLE_API_KEY)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Number of files to include: 5, 10, 15, any positive number, or all
    #[arg(short = 'n', long = "file-count", value_name = "COUNT")]
    pub file_count: Option<FileLimit>,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Where the text to analyze comes from; exactly one is required
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct SourceArgs {
    /// Repository name under the repository root
    #[arg(short, long, value_name = "REPO")]
    pub repo: Option<String>,

    /// Read repository contents from a file
    #[arg(long, value_name = "PATH")]
    pub text_file: Option<PathBuf>,

    /// Read repository contents from stdin
    #[arg(long)]
    pub stdin: bool,
}

#[derive(clap::Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive search over name, description and language
    #[arg(short, long)]
    pub search: Option<String>,

    /// Show only components of this type ("all" for every type)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub type_filter: Option<String>,
}

#[derive(clap::Args, Debug, Default)]
pub struct OutputArgs {
    /// Output format: markdown or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
