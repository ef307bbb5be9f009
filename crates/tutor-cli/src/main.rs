//! Blueprint tutor CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use tutor_cli::logging::{LogConfig, LogFormat, init_logging};
use tutor_cli::settings::Settings;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_blocks, run_build, run_concepts, run_config, run_diff, run_explain, run_garden,
    run_house,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let settings_path = cli.config.clone().unwrap_or_else(Settings::config_path);
    let settings = Settings::load_from(&settings_path);

    let result = match &cli.command {
        Command::Blocks => {
            run_blocks();
            Ok(())
        }
        Command::Concepts => {
            run_concepts();
            Ok(())
        }
        Command::Build(args) => run_build(args),
        Command::House(args) => run_house(args),
        Command::Garden(args) => {
            run_garden(args);
            Ok(())
        }
        Command::Explain(args) => run_explain(args, &settings).await,
        Command::Diff(args) => run_diff(args, &settings).await,
        Command::Config(args) => run_config(args, &settings, &settings_path),
    };

    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_prompts = cli.log_prompts;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
