use owo_colors::OwoColorize;
use repo_catalog::adapters::outbound::console::StderrProgressReporter;
use repo_catalog::adapters::outbound::filesystem::{DirectoryCollector, FileSessionStore};
use repo_catalog::adapters::outbound::network::GeminiAnalyzer;
use repo_catalog::application::dto::{AnalysisRequest, OutputFormat};
use repo_catalog::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use repo_catalog::application::read_models::{CatalogReadModel, CatalogReadModelBuilder};
use repo_catalog::application::use_cases::{AnalyzeRepositoryUseCase, BrowseCatalogUseCase};
use repo_catalog::catalog::services::ComponentFilter;
use repo_catalog::cli::{AnalyzeArgs, Args, Command, FilterArgs, OutputArgs, SourceArgs};
use repo_catalog::config::{discover_config, load_config_from_path, Settings, CONFIG_FILENAME};
use repo_catalog::ports::outbound::RepositorySource;
use repo_catalog::shared::error::{AnalysisError, ExitCode};
use repo_catalog::shared::security::{validate_file_size, validate_not_symlink, MAX_TEXT_FILE_SIZE};
use repo_catalog::shared::Result;
use std::path::Path;
use std::process;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        print_error(&e);
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Prints the error with its kind as the title, then the error chain
fn print_error(e: &anyhow::Error) {
    let title = match e.downcast_ref::<AnalysisError>() {
        Some(analysis_error) => analysis_error.kind().to_string(),
        None => "An error occurred".to_string(),
    };

    eprintln!("\n❌ {}:\n", title.red().bold());
    eprintln!("{}", e);

    let mut source = e.source();
    while let Some(err) = source {
        eprintln!("\nCaused by: {}", err);
        source = err.source();
    }

    eprintln!();
}

async fn run(args: Args) -> Result<()> {
    let settings = load_settings(&args)?;

    match args.command {
        Command::Analyze(analyze) => run_analyze(analyze, &settings).await,
        Command::Catalog { filter, output } => {
            let browse = BrowseCatalogUseCase::new(FileSessionStore::open(&settings.session_dir)?);
            let model = browse.catalog(&build_filter(&filter))?;
            render(&model, &output, &settings)
        }
        Command::Map { output } => {
            let browse = BrowseCatalogUseCase::new(FileSessionStore::open(&settings.session_dir)?);
            let model = browse.dependency_map()?;
            render(&model, &output, &settings)
        }
        Command::Show { name, output } => {
            let browse = BrowseCatalogUseCase::new(FileSessionStore::open(&settings.session_dir)?);
            let model = browse.component_detail(&name)?;
            render(&model, &output, &settings)
        }
        Command::Repos => run_repos(&settings),
        Command::Clear => {
            let browse = BrowseCatalogUseCase::new(FileSessionStore::open(&settings.session_dir)?);
            browse.clear()?;
            eprintln!("🧹 Session cleared: {}", browse.location());
            Ok(())
        }
    }
}

/// Merges settings: CLI flag > config file > built-in default
fn load_settings(args: &Args) -> Result<Settings> {
    let config = match &args.config {
        Some(path) => {
            let config = load_config_from_path(path)?;
            eprintln!("📄 Loaded config from: {}", path.display());
            Some(config)
        }
        None => {
            let config = discover_config(&std::env::current_dir()?)?;
            if config.is_some() {
                eprintln!("📄 Auto-discovered config file: {}", CONFIG_FILENAME);
            }
            config
        }
    };

    let mut settings = Settings::from_config(config)?;
    if let Some(repo_root) = &args.repo_root {
        settings.repo_root = repo_root.clone();
    }
    if let Some(session_dir) = &args.session_dir {
        settings.session_dir = session_dir.clone();
    }
    Ok(settings)
}

async fn run_analyze(args: AnalyzeArgs, settings: &Settings) -> Result<()> {
    let mut builder = AnalysisRequest::builder()
        .model(Some(args.model.unwrap_or_else(|| settings.model.clone())))
        .api_key(args.api_key)
        .file_limit(args.file_count.unwrap_or(settings.file_limit));

    builder = match read_source(&args.source).await? {
        Source::Repository(repo) => builder.repository(repo),
        Source::Text(text) => builder.text(text),
    };
    let request = builder.build()?;

    let use_case = AnalyzeRepositoryUseCase::new(
        DirectoryCollector::new(&settings.repo_root),
        GeminiAnalyzer::from_env(settings.api_base_url.clone())?,
        FileSessionStore::open(&settings.session_dir)?,
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(request).await?;
    eprintln!("{}", response.message());

    let model = CatalogReadModelBuilder::new(&response.analysis)
        .with_catalog(&build_filter(&args.filter))
        .with_dependency_map()
        .build();
    render(&model, &args.output, settings)
}

enum Source {
    Repository(String),
    Text(String),
}

async fn read_source(source: &SourceArgs) -> Result<Source> {
    if let Some(repo) = &source.repo {
        return Ok(Source::Repository(repo.clone()));
    }
    if let Some(path) = &source.text_file {
        return Ok(Source::Text(read_text_file(path)?));
    }

    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read repository contents from stdin: {}", e))?;
    Ok(Source::Text(text))
}

fn read_text_file(path: &Path) -> Result<String> {
    validate_not_symlink(path, "read")?;
    let metadata = std::fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
    validate_file_size(metadata.len(), path, MAX_TEXT_FILE_SIZE)?;

    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
}

fn run_repos(settings: &Settings) -> Result<()> {
    let collector = DirectoryCollector::new(&settings.repo_root);
    let repositories = collector.list_repositories()?;

    if repositories.is_empty() {
        eprintln!(
            "No repositories found under {}. Add a repository directory there to analyze it.",
            collector.root().display()
        );
        return Ok(());
    }

    for repository in repositories {
        println!("{}", repository);
    }
    Ok(())
}

fn build_filter(filter: &FilterArgs) -> ComponentFilter {
    ComponentFilter::new(
        filter.search.as_deref().unwrap_or(""),
        filter.type_filter.as_deref(),
    )
}

fn render(model: &CatalogReadModel, output: &OutputArgs, settings: &Settings) -> Result<()> {
    let format: OutputFormat = output.format.unwrap_or(settings.format);

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatted = FormatterFactory::create(format).format(model)?;

    PresenterFactory::create(PresenterType::for_output(output.output.clone())).present(&formatted)
}
