//! Instance Pool Loader - session-start context injection
//!
//! Prints recent pool activity to stdout. The exit status is always zero:
//! failures of any kind, including bad arguments and panics, go to the
//! loader error log so the session is never blocked.

use clap::error::ErrorKind;
use clap::Parser;
use pool_common::PoolError;
use pool_core::config::{ConfigOverrides, LoaderConfig, OutputMode};
use pool_core::logging::{
    event_names, generate_run_id, init_logging, LogConfig, LogContext, LogLevel, Stage,
};
use pool_core::{catch_panic, errlog, now_epoch_secs, run};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Summarize recent instance pool activity for a new session
#[derive(Parser, Debug)]
#[command(name = "pool-loader")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Instance identifier (default: $CLAUDE_INSTANCE or "?")
    #[arg(long)]
    instance: Option<String>,

    /// Output mode (default: compact unless $POOL_COMPACT is set to something other than 1)
    #[arg(long, value_enum)]
    mode: Option<OutputMode>,

    /// Read this pool file instead of the project/home pool
    #[arg(long)]
    pool: Option<PathBuf>,

    /// Codebase label for the compact summary
    #[arg(long)]
    codebase: Option<String>,

    /// Append failures to this file instead of ~/.claude/pool/loader_errors.log
    #[arg(long)]
    error_log: Option<PathBuf>,

    /// Maximum entry age in seconds
    #[arg(long)]
    max_age: Option<u64>,

    /// Maximum number of entries to keep
    #[arg(long)]
    limit: Option<usize>,

    /// Minimum relevance score for entries from other instances
    #[arg(long)]
    threshold: Option<f64>,

    /// Increase diagnostic verbosity on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence diagnostics entirely
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            instance: self.instance.clone(),
            mode: self.mode,
            pool_path: self.pool.clone(),
            codebase: self.codebase.clone(),
            error_log: self.error_log.clone(),
            max_age_secs: self.max_age,
            limit: self.limit,
            threshold: self.threshold,
        }
    }

    fn log_level(&self) -> Option<LogLevel> {
        if self.quiet {
            return Some(LogLevel::Off);
        }
        match self.verbose {
            0 => None,
            1 => Some(LogLevel::Info),
            2 => Some(LogLevel::Debug),
            _ => Some(LogLevel::Trace),
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            if !matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let config = LoaderConfig::from_env();
                let failure = PoolError::Args {
                    message: err.to_string().trim().to_string(),
                };
                errlog::record(config.error_log_path().as_deref(), &failure);
            }
            return ExitCode::SUCCESS;
        }
    };

    init_logging(&LogConfig::from_env(cli.log_level(), None));

    let config = LoaderConfig::resolve(&cli.overrides(), |key| std::env::var(key).ok());
    let ctx = LogContext::new(generate_run_id(), config.instance.clone());

    tracing::info!(
        event = event_names::RUN_STARTED,
        run_id = %ctx.run_id,
        instance = %ctx.instance,
        stage = %Stage::Init,
        mode = %config.mode,
        "pool loader starting"
    );

    let home = dirs::home_dir();
    let result = catch_panic(|| {
        run(&config, &ctx, Path::new("."), home.as_deref(), now_epoch_secs())
    });

    match result {
        Ok(output) => {
            if !output.is_empty() {
                let mut stdout = std::io::stdout().lock();
                let _ = writeln!(stdout, "{}", output).and_then(|_| stdout.flush());
            }
        }
        Err(err) => {
            tracing::error!(
                event = event_names::RUN_FAILED,
                run_id = %ctx.run_id,
                code = err.code_name(),
                error = %err,
                "pool loader failed"
            );
            errlog::record(config.error_log_path().as_deref(), &err);
        }
    }

    ExitCode::SUCCESS
}
