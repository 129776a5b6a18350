use clap::Parser;
use colored::*;
use eyre::{Context, Result, bail};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

use promptr::prompt::PromptLoader;
use promptr::storage::{CompletionRecord, JsonlWriter};
use promptr::tags::parse_completion;
use promptr::validation::{TagFormatValidator, TemplateValidator, Validator};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("promptr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Show { name } => handle_show_command(name.as_deref(), config),
        Commands::List => handle_list_command(config),
        Commands::Check { file, template } => handle_check_command(file, *template, config),
        Commands::Extract { file, reasoning } => handle_extract_command(file, *reasoning, config),
        Commands::Log { file, prompt } => handle_log_command(file, prompt.as_deref(), config),
    }
}

fn loader_for(config: &Config) -> PromptLoader {
    PromptLoader::new(&config.templates.dir)
}

fn handle_show_command(name: Option<&str>, config: &Config) -> Result<()> {
    let name = name.unwrap_or(&config.templates.default);
    info!("Showing template: {}", name);

    let content = loader_for(config).load(name)?;
    // Exact stored text, no decoration
    print!("{}", content);
    Ok(())
}

fn handle_list_command(config: &Config) -> Result<()> {
    info!("Listing templates");

    let loader = loader_for(config);
    println!("{}", "Available templates:".cyan());
    for name in loader.list_available()? {
        println!("  {}", name);
    }
    Ok(())
}

fn handle_check_command(file: &Path, template: bool, config: &Config) -> Result<()> {
    let validator: Box<dyn Validator> = if template {
        Box::new(TemplateValidator::new(config.tags.clone()))
    } else {
        Box::new(TagFormatValidator::new(config.tags.clone()))
    };
    info!("Checking {} with {}", file.display(), validator.description());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build runtime")?;
    let result = runtime.block_on(validator.validate(file))?;

    if result.passed {
        println!("{} {}", "Pass:".green(), result.output);
        Ok(())
    } else {
        println!("{} {}", "Fail:".red(), file.display());
        for error in &result.errors {
            println!("  - {}", error);
        }
        bail!("{} failed", validator.description())
    }
}

fn handle_extract_command(file: &Path, reasoning: bool, config: &Config) -> Result<()> {
    info!("Extracting from {} (reasoning: {})", file.display(), reasoning);

    let content =
        fs::read_to_string(file).context(format!("Failed to read completion {}", file.display()))?;
    let parsed = parse_completion(&content, &config.tags)?;

    if reasoning {
        match parsed.reasoning {
            Some(r) => println!("{}", r),
            None => bail!("completion has no reasoning span"),
        }
    } else {
        println!("{}", parsed.answer);
    }
    Ok(())
}

fn handle_log_command(file: &Path, prompt: Option<&str>, config: &Config) -> Result<()> {
    info!("Logging completion from {}", file.display());

    let completion =
        fs::read_to_string(file).context(format!("Failed to read completion {}", file.display()))?;
    let record = CompletionRecord::new(prompt.unwrap_or_default(), completion, &config.tags);

    let writer = JsonlWriter::new(&config.storage.completions_path)?;
    writer.append(&record)?;

    let status = if record.compliant {
        "compliant".green()
    } else {
        "non-compliant".yellow()
    };
    println!("{} {} ({})", "Logged:".green(), record.id, status);
    println!("  -> {}", writer.path().display());
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    run_application(&cli, &config)
}
