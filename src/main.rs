// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{info, warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Args, Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use mantra_translit::app_config::{self, Config, LogLevel};
use mantra_translit::app_controller::Controller;
use mantra_translit::file_utils::FileManager;
use mantra_translit::transliteration::build_prompt;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Transliterate every mantra in the input file (default command)
    Run(RunArgs),

    /// Show the records and prompts an input file produces, without calling the API
    Preview {
        /// Input mantra file
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        /// Also print the full prompt for each record
        #[arg(short, long)]
        prompts: bool,
    },

    /// Write a configuration file with default values
    InitConfig {
        /// Where to write the configuration
        #[arg(value_name = "CONFIG_PATH", default_value = "conf.json")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions for mantra-translit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Input mantra file (defaults to the configured input file)
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Output file, truncated at the start of the run
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Gemini model name to use
    #[arg(short, long)]
    model: Option<String>,

    /// Delay between requests in milliseconds
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Send one test request before processing and abort if it fails
    #[arg(long)]
    check_connection: bool,
}

/// mantra-translit - batch transliteration of Sanskrit mantras
///
/// Reads numbered mantras (title lines like `M1.1 ...`), transliterates each one
/// with Google Gemini and appends the results to an output file as they arrive.
#[derive(Parser, Debug)]
#[command(name = "mantra-translit")]
#[command(version)]
#[command(about = "Transliterate Sanskrit mantras with Gemini")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "mantra-translit reads a file of numbered Sanskrit mantras and transliterates each one with Google Gemini.

EXAMPLES:
    mantra-translit                                   # Use conf.json or defaults
    mantra-translit mantras.txt -o out.txt            # Explicit input and output
    mantra-translit -d 6000 mantras.txt               # Slower pacing (10 requests/minute)
    mantra-translit preview --prompts mantras.txt     # Inspect records without calling the API
    mantra-translit init-config                       # Write conf.json with defaults
    mantra-translit completions bash > mt.bash        # Generate bash completions

CREDENTIALS:
    The Gemini API key is read from the GOOGLE_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // Accept everything here; log::set_max_level does the filtering
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌"),
            Level::Warn => ("\x1B[1;33m", "🚧"),
            Level::Info => ("\x1B[1;32m", ""),
            Level::Debug => ("\x1B[1;36m", "🔍"),
            Level::Trace => ("\x1B[1;35m", "📋"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
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
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "mantra-translit", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Preview { input_path, prompts }) => run_preview(&input_path, prompts),
        Some(Commands::InitConfig { path, force }) => run_init_config(&path, force),
        Some(Commands::Run(args)) => run_transliterate(args).await,
        None => run_transliterate(cli.run).await,
    }
}

async fn run_transliterate(options: RunArgs) -> Result<()> {
    if let Some(level) = &options.log_level {
        log::set_max_level(LogLevel::from(level.clone()).to_level_filter());
    }

    // The credential is checked before touching any file
    let api_key = app_config::api_key_from_env()?;

    let mut config = Config::load_or_default(&options.config_path)?;
    config.gemini.api_key = api_key;

    if let Some(input) = &options.input_path {
        config.input_file = input.to_string_lossy().into_owned();
    }
    if let Some(output) = &options.output {
        config.output_file = output.to_string_lossy().into_owned();
    }
    if let Some(model) = &options.model {
        config.gemini.model = model.clone();
    }
    if let Some(delay_ms) = options.delay_ms {
        config.pacing.rate_limit_delay_ms = delay_ms;
    }
    match &options.log_level {
        Some(level) => config.log_level = level.clone().into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    let controller = Controller::with_config(config)?;
    info!(
        "Starting transliteration of {:?} with model {}",
        controller.config().input_file,
        controller.config().gemini.model
    );

    let summary = controller.run(options.check_connection).await?;
    if summary.processed < summary.total {
        warn!("{} mantra(s) failed and were skipped", summary.total - summary.processed);
    }

    Ok(())
}

fn run_preview(input_path: &Path, show_prompts: bool) -> Result<()> {
    let report = Controller::load_records(input_path)?;

    let mut stdout = std::io::stdout();
    for (i, record) in report.records.iter().enumerate() {
        writeln!(stdout, "[{}/{}] {}", i + 1, report.records.len(), record.title)?;
        writeln!(stdout, "{}", record.body)?;
        if show_prompts {
            writeln!(stdout, "---\n{}", build_prompt(&record.title, &record.body))?;
        }
        writeln!(stdout)?;
    }

    info!(
        "{} record(s), {} title(s) without content, {} stray line(s)",
        report.records.len(),
        report.dropped_titles.len(),
        report.stray_lines
    );

    Ok(())
}

fn run_init_config(path: &Path, force: bool) -> Result<()> {
    if FileManager::file_exists(path) && !force {
        return Err(anyhow!("Config file already exists: {:?}. Use -f to overwrite.", path));
    }

    let config_json = serde_json::to_string_pretty(&Config::default())
        .context("Failed to serialize default config to JSON")?;
    FileManager::write_to_file(path, &config_json)?;

    info!("Wrote default configuration to {:?}", path);
    Ok(())
}
