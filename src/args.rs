//! Command-line argument parsing and processing.
//!
//! Hand-rolled parsing with a clean action enum for the main dispatch.
//! Unknown arguments fall through to help with a non-zero exit.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the live countdown.
    Run { config_dir: Option<String> },

    /// Forward geocoding: search for a place by name and store the pick.
    LocationSearch {
        query: String,
        config_dir: Option<String>,
    },
    /// Reverse geocoding: store a location from raw coordinates.
    LocationCoords {
        latitude: f64,
        longitude: f64,
        config_dir: Option<String>,
    },
    /// List calculation methods, or select one by id.
    Method {
        id: Option<String>,
        config_dir: Option<String>,
    },
    /// Print today's boundaries and current phase once, then exit.
    Times { config_dir: Option<String> },

    /// Display help information and exit.
    ShowHelp,
    /// Display version information and exit.
    ShowVersion,
    /// Show help due to unknown arguments and exit with failure.
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse from an iterator of arguments (without the program name).
    pub fn from_args(args: impl Iterator<Item = String>) -> Self {
        let args: Vec<String> = args.collect();

        // Global flags can appear anywhere; strip them first.
        let mut config_dir: Option<String> = None;
        let mut rest: Vec<String> = Vec::new();
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => return Self { action: CliAction::ShowHelp },
                "--version" | "-V" => return Self { action: CliAction::ShowVersion },
                "--config" => match iter.next() {
                    Some(dir) => config_dir = Some(dir),
                    None => return Self { action: CliAction::ShowHelpDueToError },
                },
                _ => rest.push(arg),
            }
        }

        let action = match rest.split_first() {
            None => CliAction::Run { config_dir },
            Some((command, tail)) => match command.as_str() {
                "location" => Self::parse_location(tail, config_dir),
                "method" => match tail {
                    [] => CliAction::Method { id: None, config_dir },
                    [id] => CliAction::Method {
                        id: Some(id.clone()),
                        config_dir,
                    },
                    _ => CliAction::ShowHelpDueToError,
                },
                "times" => match tail {
                    [] => CliAction::Times { config_dir },
                    _ => CliAction::ShowHelpDueToError,
                },
                _ => CliAction::ShowHelpDueToError,
            },
        };

        Self { action }
    }

    fn parse_location(tail: &[String], config_dir: Option<String>) -> CliAction {
        match tail.split_first() {
            Some((flag, coords_tail)) if flag == "--coords" => {
                let Some(coords) = coords_tail.first() else {
                    return CliAction::ShowHelpDueToError;
                };
                match parse_coords(coords) {
                    Some((latitude, longitude)) if coords_tail.len() == 1 => {
                        CliAction::LocationCoords {
                            latitude,
                            longitude,
                            config_dir,
                        }
                    }
                    _ => CliAction::ShowHelpDueToError,
                }
            }
            Some(_) => CliAction::LocationSearch {
                query: tail.join(" "),
                config_dir,
            },
            None => CliAction::ShowHelpDueToError,
        }
    }
}

/// Parse "LAT,LON" into validated coordinates.
fn parse_coords(s: &str) -> Option<(f64, f64)> {
    let (lat, lon) = s.split_once(',')?;
    let latitude: f64 = lat.trim().parse().ok()?;
    let longitude: f64 = lon.trim().parse().ok()?;
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return None;
    }
    Some((latitude, longitude))
}

/// Print usage information.
pub fn display_help() {
    log_version!();
    log_block_start!("Usage: iftarr [COMMAND] [OPTIONS]");
    log_indented!("(no command)              run the live fasting countdown");
    log_indented!("location <query>          search for a city and save it");
    log_indented!("location --coords LAT,LON save a location from coordinates");
    log_indented!("method [id]               list methods, or select one by id");
    log_indented!("times                     print today's boundaries once");
    log_block_start!("Options:");
    log_indented!("--config <dir>            use an alternate config directory");
    log_indented!("-h, --help                show this help");
    log_indented!("-V, --version             show version");
    log_end!();
}

/// Print version information.
pub fn display_version() {
    log_version!();
    log_end!();
}
