use crate::pipeline::{SyncOptions, SyncOutcome};
use crate::tracing::LogLevel;
use clap::{Args, Parser, Subcommand};
use figsync_core::IconNaming;
use figsync_figma::FigmaConfig;
use figsync_figma::client::DEFAULT_API_BASE;
use miette::{Diagnostic, Report};
use secrecy::SecretString;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application
pub const EXIT_OK: i32 = 0;
/// Sync failed and `--fail-on-error` was given
pub const EXIT_SYNC_FAILED: i32 = 1;
/// CLI or configuration error exit code
pub const EXIT_CLI: i32 = 2;

/// Design file holding the icon and emoji pages
pub const DEFAULT_FILE_KEY: &str = "JTy0u4USkgndg82hRlJLA9vA";

/// Page of the `icons` preset
pub const ICONS_PAGE: &str = "05 - Icons";
/// Default output directory of the `icons` preset
pub const ICONS_OUT_DIR: &str = "src/components/icons/generated";
/// Component prefix of the `icons` preset
pub const ICONS_PREFIX: &str = "oui-icon";

/// Page of the `emojis` preset
pub const EMOJIS_PAGE: &str = "07 - Emojis";
/// Default output directory of the `emojis` preset
pub const EMOJIS_OUT_DIR: &str = "src/components/emoji/generated";
/// Component prefix of the `emojis` preset
pub const EMOJIS_PREFIX: &str = "oui-emoji";

/// CLI-specific error types with exit code mapping
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// CLI or configuration error (exit code 2)
    #[error("CLI/configuration error: {message}")]
    #[diagnostic(code(figsync::cli::config))]
    Config {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
}

impl CliError {
    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: None,
        }
    }

    /// Create a new configuration error with help text
    #[must_use]
    pub fn config_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: Some(help.into()),
        }
    }
}

impl From<figsync_core::Error> for CliError {
    fn from(err: figsync_core::Error) -> Self {
        match err {
            figsync_core::Error::Configuration { message } => Self::config(message),
            other => Self::config(other.to_string()),
        }
    }
}

/// Map CLI error to appropriate exit code
#[must_use]
pub const fn exit_code_for(err: &CliError) -> i32 {
    match err {
        CliError::Config { .. } => EXIT_CLI,
    }
}

/// Exit code for a finished sync.
///
/// Failures exit successfully unless `fail_on_error` is set.
#[must_use]
pub const fn exit_code_for_outcome(outcome: &SyncOutcome, fail_on_error: bool) -> i32 {
    match outcome {
        SyncOutcome::Failed(_) if fail_on_error => EXIT_SYNC_FAILED,
        _ => EXIT_OK,
    }
}

/// Render an error through miette on stderr
#[allow(clippy::print_stderr)]
pub fn render_error(err: CliError) {
    let report = Report::new(err);
    eprintln!("{report:?}");
    let _ = io::stderr().flush();
}

/// Generate React icon components from a Figma design file.
#[derive(Parser, Debug)]
#[command(name = "figsync")]
#[command(about = "Generate React icon components from a Figma design file")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Figma personal access token.
    #[arg(
        long,
        global = true,
        env = "FIGMA_TOKEN",
        hide_env_values = true,
        help = "Figma personal access token"
    )]
    pub token: Option<String>,

    /// Key of the design file to read.
    #[arg(
        long,
        global = true,
        env = "FIGMA_FILE_KEY",
        default_value = DEFAULT_FILE_KEY,
        help = "Key of the design file to read"
    )]
    pub file_key: String,

    /// Base URL of the Figma REST API.
    #[arg(
        long,
        global = true,
        env = "FIGMA_API_BASE",
        default_value = DEFAULT_API_BASE,
        help = "Base URL of the Figma REST API"
    )]
    pub api_base: String,

    /// Logging verbosity level.
    #[arg(
        short = 'l',
        long,
        global = true,
        help = "Set logging level",
        default_value = "info",
        value_enum
    )]
    pub level: LogLevel,

    /// Output logs in JSON format.
    #[arg(long, global = true, help = "Output logs in JSON format")]
    pub json: bool,

    /// Exit with code 1 when the sync fails.
    #[arg(
        long,
        global = true,
        help = "Exit with a non-zero code when the sync fails"
    )]
    pub fail_on_error: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync the icon page and stage SVGs for the icon font.
    #[command(about = "Sync the icon page and stage SVGs for the icon font")]
    Icons {
        /// Output directory override.
        #[arg(long, help = "Output directory for generated components")]
        out: Option<PathBuf>,
    },
    /// Sync the emoji page.
    #[command(about = "Sync the emoji page")]
    Emojis {
        /// Output directory override.
        #[arg(long, help = "Output directory for generated components")]
        out: Option<PathBuf>,
    },
    /// Sync any page with explicit settings.
    #[command(about = "Sync any page with explicit settings")]
    Sync(SyncArgs),
}

/// Settings of the generic `sync` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    /// Page holding the icon frames.
    #[arg(long, help = "Name of the page holding the icon frames")]
    pub page: String,

    /// Output directory.
    #[arg(long, help = "Output directory for generated components")]
    pub out: PathBuf,

    /// File and component name prefix.
    #[arg(long, help = "Prefix of generated file and component names")]
    pub prefix: String,

    /// Insert the category into names.
    #[arg(long, help = "Include the category in file and component names")]
    pub category_in_filename: bool,

    /// Font staging directory; font mode is off when absent.
    #[arg(long, value_name = "DIR", help = "Stage font-compatible SVGs into DIR")]
    pub font_staging: Option<PathBuf>,
}

impl Commands {
    /// Pipeline settings selected by this subcommand
    #[must_use]
    pub fn sync_options(&self) -> SyncOptions {
        match self {
            Self::Icons { out } => SyncOptions {
                page_name: ICONS_PAGE.to_string(),
                components_dir: out.clone().unwrap_or_else(|| PathBuf::from(ICONS_OUT_DIR)),
                naming: IconNaming::new(ICONS_PREFIX, false),
                font_staging_dir: Some(PathBuf::from(
                    figsync_codegen::font::DEFAULT_STAGING_DIR,
                )),
            },
            Self::Emojis { out } => SyncOptions {
                page_name: EMOJIS_PAGE.to_string(),
                components_dir: out.clone().unwrap_or_else(|| PathBuf::from(EMOJIS_OUT_DIR)),
                naming: IconNaming::new(EMOJIS_PREFIX, true),
                font_staging_dir: None,
            },
            Self::Sync(args) => SyncOptions {
                page_name: args.page.clone(),
                components_dir: args.out.clone(),
                naming: IconNaming::new(args.prefix.clone(), args.category_in_filename),
                font_staging_dir: args.font_staging.clone(),
            },
        }
    }
}

impl Cli {
    /// Figma client settings from the global options
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] when no token was provided
    pub fn figma_config(&self) -> Result<FigmaConfig, CliError> {
        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                CliError::config_with_help(
                    "No Figma access token provided",
                    "Pass --token or set the FIGMA_TOKEN environment variable",
                )
            })?;

        Ok(
            FigmaConfig::new(self.file_key.clone(), SecretString::from(token.to_string()))
                .with_api_base(self.api_base.clone()),
        )
    }
}

/// Parse the process arguments
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
