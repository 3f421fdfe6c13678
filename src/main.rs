//! Main entry point and high-level flow coordination.
//!
//! Parses command-line arguments and dispatches: one-shot commands run to
//! completion, while the default action acquires the single-instance lock
//! and starts the countdown loop. Errors surface as a single terminal error
//! block followed by a non-zero exit.

use anyhow::Result;

use iftarr::args::{CliAction, ParsedArgs, display_help, display_version};
use iftarr::commands;
use iftarr::config;
use iftarr::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use iftarr::core::Core;
use iftarr::io::lock::acquire_lock;
use iftarr::{log_end, log_error_exit, log_pipe, log_version};

fn main() {
    let parsed = ParsedArgs::from_args(std::env::args().skip(1));

    let exit_code = match run(parsed.action) {
        Ok(code) => code,
        Err(e) => {
            log_pipe!();
            log_error_exit!("{e:#}");
            log_end!();
            EXIT_FAILURE
        }
    };
    std::process::exit(exit_code);
}

fn run(action: CliAction) -> Result<i32> {
    match action {
        CliAction::ShowHelp => {
            display_help();
            Ok(EXIT_SUCCESS)
        }
        CliAction::ShowVersion => {
            display_version();
            Ok(EXIT_SUCCESS)
        }
        CliAction::ShowHelpDueToError => {
            display_help();
            Ok(EXIT_FAILURE)
        }
        CliAction::LocationSearch { query, config_dir } => {
            config::set_config_dir(config_dir)?;
            log_version!();
            commands::location::handle_search(&query)?;
            Ok(EXIT_SUCCESS)
        }
        CliAction::LocationCoords {
            latitude,
            longitude,
            config_dir,
        } => {
            config::set_config_dir(config_dir)?;
            log_version!();
            commands::location::handle_coords(latitude, longitude)?;
            Ok(EXIT_SUCCESS)
        }
        CliAction::Method { id, config_dir } => {
            config::set_config_dir(config_dir)?;
            log_version!();
            match id {
                Some(id) => commands::method::handle_set(&id)?,
                None => commands::method::handle_list()?,
            }
            Ok(EXIT_SUCCESS)
        }
        CliAction::Times { config_dir } => {
            config::set_config_dir(config_dir)?;
            log_version!();
            commands::times::handle()?;
            Ok(EXIT_SUCCESS)
        }
        CliAction::Run { config_dir } => {
            config::set_config_dir(config_dir)?;
            log_version!();

            let Some(_lock) = acquire_lock()? else {
                log_end!();
                return Ok(EXIT_FAILURE);
            };

            let config = config::load()?;
            config.log_summary();

            let core = Core::new(config)?;
            core.run()?;

            log_end!();
            Ok(EXIT_SUCCESS)
        }
    }
}
