// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use textlens::analysis::AnalysisPipeline;
use textlens::app_config::{self, Config, TranslationProvider};
use textlens::errors::AppError;
use textlens::file_utils::FileManager;
use textlens::report::render_text_report;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Ollama,
    #[value(name = "none")]
    Disabled,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Ollama => TranslationProvider::Ollama,
            CliTranslationProvider::Disabled => TranslationProvider::Disabled,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a text file, an inline text or standard input
    Analyze(AnalyzeArgs),

    /// Generate shell completions for textlens
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Text file to analyze (.txt, .csv, .md); standard input when omitted
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Analyze this text instead of a file
    #[arg(long, conflicts_with = "input_path")]
    text: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Also write the JSON result to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Source language code (e.g., 'es')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g., 'en')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Fail when the whole text cannot be scored
    #[arg(long)]
    strict: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// textlens - translate, score and count text
#[derive(Parser, Debug)]
#[command(name = "textlens")]
#[command(version)]
#[command(about = "Sentiment, subjectivity and word frequency analysis")]
#[command(long_about = "textlens translates a text, scores its sentiment and subjectivity,
pairs original and translated phrases and counts the most frequent words.

EXAMPLES:
    textlens analyze review.txt                 # Analyze a file with conf.json settings
    textlens analyze --text \"Me encanta.\"       # Analyze inline text
    cat notes.md | textlens analyze             # Analyze standard input
    textlens analyze -p none review.txt         # Skip translation
    textlens analyze --json -o out.json in.txt  # Emit JSON
    textlens completions bash > textlens.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't
    exist, a default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Colored stderr logger, filtered by the global max level
struct CustomLogger;

impl CustomLogger {
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color,
                now,
                tag,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "textlens", &mut std::io::stdout());
            Ok(())
        }
        Commands::Analyze(args) => Ok(run_analyze(args).await?),
    }
}

/// Load the config file and apply command line overrides
fn load_config(options: &AnalyzeArgs) -> Result<Config> {
    let (mut config, created) = Config::load_or_create(&options.config_path)?;
    if created {
        warn!("Config file not found at '{}', created a default one.", options.config_path);
    }

    if let Some(provider) = &options.provider {
        config.translation.provider = provider.clone().into();
    }
    if let Some(model) = &options.model {
        config.translation.model = model.clone();
    }
    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }
    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
    if options.strict {
        config.strict_scoring = true;
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

fn read_input(options: &AnalyzeArgs) -> Result<String> {
    match (&options.text, &options.input_path) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => {
            if !FileManager::file_exists(path) {
                return Err(anyhow!("Input file does not exist: {:?}", path));
            }
            FileManager::read_text_input(path)
        }
        (None, None) => {
            info!("Reading text from standard input");
            FileManager::read_stdin()
        }
    }
}

async fn run_analyze(options: AnalyzeArgs) -> Result<(), AppError> {
    if let Some(level) = &options.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.into());
    }

    let config = load_config(&options).map_err(|e| AppError::Config(format!("{:#}", e)))?;
    log::set_max_level(config.log_level.into());

    let text = read_input(&options).map_err(|e| AppError::File(format!("{:#}", e)))?;
    if text.trim().is_empty() {
        warn!("Input text is empty");
    }

    let pipeline = AnalysisPipeline::from_config(&config).map_err(|e| AppError::Config(format!("{:#}", e)))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "Analyzing ({} -> {} via {})",
        config.source_language, config.target_language, config.translation.provider
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = pipeline.analyze(&text).await;
    spinner.finish_and_clear();
    let result = result?;

    let json = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
    if let Some(output) = &options.output {
        FileManager::write_to_file(output, &json).map_err(|e| AppError::File(format!("{:#}", e)))?;
        info!("Result written to {:?}", output);
    }

    if options.json {
        println!("{}", json);
    } else {
        print!("{}", render_text_report(&result, &config.report));
    }

    Ok(())
}
