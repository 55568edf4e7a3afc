// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::capture::FileCamera;
use crate::app_controller::Controller;
use crate::session::Phase;

mod app_config;
mod app_controller;
mod capture;
mod errors;
mod language_catalog;
mod providers;
mod session;

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Detect text in a photo and optionally translate it (default command)
    Scan(ScanArgs),

    /// Generate shell completions for lenslate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ScanArgs {
    /// Photo to process (stands in for the camera)
    #[arg(value_name = "IMAGE_PATH")]
    image: PathBuf,

    /// Target language code (e.g. 'ja', 'zh-CN'); prompts interactively
    /// when omitted
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Lenslate - camera text detection and translation
///
/// Detects text in a photo through a remote vision API, names the detected
/// language, and translates the text into a chosen target language.
#[derive(Parser, Debug)]
#[command(name = "lenslate")]
#[command(version = "1.0.0")]
#[command(about = "Camera text detection and translation")]
#[command(long_about = "Lenslate detects text in a photo and translates it on demand.

EXAMPLES:
    lenslate photo.jpg                      # Detect text, pick a target interactively
    lenslate -t ja photo.jpg                # Detect and translate into Japanese
    lenslate --log-level debug photo.jpg    # Verbose logging
    lenslate completions bash > lenslate.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created; fill in the API key before the
    next run.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Photo to process (stands in for the camera)
    #[arg(value_name = "IMAGE_PATH")]
    image: Option<PathBuf>,

    /// Target language code (e.g. 'ja', 'zh-CN')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
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
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "lenslate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Scan(args)) => run_scan(args).await,
        None => {
            // Default behavior - use top-level args
            let image = cli
                .image
                .ok_or_else(|| anyhow!("IMAGE_PATH is required when no subcommand is specified"))?;

            let scan_args = ScanArgs {
                image,
                target_language: cli.target_language,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_scan(scan_args).await
        }
    }
}

async fn run_scan(options: ScanArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Update log level in config if specified via command line
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    if !options.image.exists() {
        return Err(anyhow!("Image file does not exist: {:?}", options.image));
    }

    // Create the controller with the file-backed camera
    let camera = Arc::new(FileCamera::new(&options.image));
    let mut controller = Controller::with_config(config, camera)?;

    // Capture and detect, with a spinner covering the whole span
    let spinner = busy_spinner("Detecting text");
    controller.capture_requested().await;
    spinner.finish_and_clear();

    match controller.phase() {
        Phase::Detected { detection } => {
            let name = detection.display_language().unwrap_or("Unknown");
            println!("Detected Language: {} | {}", name, detection.locale);
            println!("{}", detection.display_text());
        }
        Phase::Unsupported { detection } => {
            println!(
                "Language not yet supported: {}",
                language_catalog::describe_locale(&detection.locale)
            );
            controller.close_requested();
            return Ok(());
        }
        Phase::Failed { message, .. } => {
            return Err(anyhow!("{}", message));
        }
        other => {
            return Err(anyhow!("Unexpected phase after capture: {}", other.name()));
        }
    }

    // Direct translation when a target was given on the command line
    if let Some(target) = &options.target_language {
        translate_to(&mut controller, target).await;
        controller.close_requested();
        return Ok(());
    }

    // Interactive target picker
    run_picker(&mut controller).await
}

/// Translate the detected text and print the result
async fn translate_to(controller: &mut Controller, target: &str) {
    let spinner = busy_spinner("Translating");
    controller.target_language_selected(target).await;
    spinner.finish_and_clear();

    match controller.phase() {
        Phase::Translated {
            target,
            translated_text,
            ..
        } => {
            let name = language_catalog::display_name(target).unwrap_or(target);
            println!("{}: {}", name, translated_text);
        }
        Phase::Failed { message, .. } => {
            eprintln!("{}", message);
        }
        other => {
            info!("No translation performed (phase {})", other.name());
        }
    }
}

/// Prompt loop: pick a target language, translate, repeat until close or exit
async fn run_picker(controller: &mut Controller) -> Result<()> {
    loop {
        let Some(detected) = controller.session().detected_locale().map(String::from) else {
            return Ok(());
        };

        println!();
        println!("Select a target language:");
        let targets = language_catalog::selectable_targets(&detected);
        for (i, entry) in targets.iter().enumerate() {
            println!("  {}. {} ({})", i + 1, entry.name, entry.code);
        }
        println!("  c. Close    q. Quit");

        let input = prompt("> ")?;
        match input.as_str() {
            "c" => {
                controller.close_requested();
                return Ok(());
            }
            "q" => {
                // Two-option confirmation before the process exit fires
                let answer = prompt("Are you sure you want to exit? [Cancel/Yes] ")?;
                if answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y") {
                    controller.exit_confirmed();
                }
            }
            choice => {
                let code = choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| targets.get(i))
                    .map(|entry| entry.code)
                    .unwrap_or(language_catalog::TARGET_PLACEHOLDER);
                translate_to(controller, code).await;
            }
        }
    }
}

/// Read one trimmed line from stdin
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

/// Spinner shown while an operation awaits a remote response
fn busy_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
