use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use clap::error::ErrorKind;
use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description,
    crate_version, value_parser,
};

use crate::config::Overrides;
use crate::constants::{
    BINARY_NAME, CONFIG_HELP, DRY_RUN_HELP, EXTENSION_HELP, LOG_FILE_HELP, LOG_LEVEL_HELP,
    OUTPUT_HELP, PRETTY_HELP, SOURCE_HELP, TARGET_MARKER_HELP, TEST_MARKER_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, usage_error};
use crate::logging::LogLevel;

/// Everything a run needs from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// The `--source` argument exactly as given
    pub source: String,
    /// Optional YAML settings file
    pub config: Option<PathBuf>,
    /// Settings given directly on the command line
    pub overrides: Overrides,
    /// Print the manifest instead of writing it
    pub dry_run: bool,
    /// Requested log verbosity
    pub verbosity: LogLevel,
    /// Optional file receiving a copy of the log
    pub log_file: Option<String>,
}

/// Defines the command-line interface
///
/// Defines the following arguments:
/// - `source`: Directory containing the test sources (required)
/// - `output`: Manifest location
/// - `config`: YAML settings file
/// - `dry`: Print the manifest instead of writing it
/// - `pretty`: Pretty-print the JSON
/// - `extension`, `test_marker`, `target_marker`: Naming convention overrides
/// - `verbose`: Increase verbosity level
/// - `log_level`: Set the verbosity level by name
/// - `log_file`: Also log to a file
pub fn build_command() -> Command {
    // define arg for the directory to scan
    let arg_source = Arg::new("source")
        .short('s')
        .long("source")
        .value_name("DIR")
        .help(SOURCE_HELP)
        .required(true);

    // define arg for the manifest location
    let arg_output = Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .help(OUTPUT_HELP)
        .value_parser(value_parser!(PathBuf));

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help(CONFIG_HELP)
        .value_parser(value_parser!(PathBuf));

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry-run")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_pretty = Arg::new("pretty")
        .short('p')
        .long("pretty")
        .help(PRETTY_HELP)
        .action(ArgAction::SetTrue);

    // define args overriding the naming convention
    let arg_extension = Arg::new("extension")
        .long("extension")
        .value_name("EXT")
        .help(EXTENSION_HELP);

    let arg_test_marker = Arg::new("test_marker")
        .long("test-marker")
        .value_name("MARKER")
        .help(TEST_MARKER_HELP);

    let arg_target_marker = Arg::new("target_marker")
        .long("target-marker")
        .value_name("MARKER")
        .help(TARGET_MARKER_HELP);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let arg_log_level = Arg::new("log_level")
        .long("log-level")
        .value_name("LEVEL")
        .help(LOG_LEVEL_HELP)
        .value_parser(LogLevel::from_str)
        .conflicts_with("verbose");

    // define arg for log file
    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(BINARY_NAME)
        .version(crate_version!())
        .arg(arg_source)
        .arg(arg_output)
        .arg(arg_config)
        .arg(arg_dry)
        .arg(arg_pretty)
        .arg(arg_extension)
        .arg(arg_test_marker)
        .arg(arg_target_marker)
        .arg(arg_verbose)
        .arg(arg_log_level)
        .arg(arg_log_file)
}

/// Parses command-line arguments
///
/// `--help` and `--version` are printed by clap and end the process as
/// usual. Every other parse failure is reported as a usage error.
///
/// # Errors
/// Returns a usage error if the arguments do not have the supported shape
pub fn get_matches_from<I, T>(args: I) -> Result<ArgMatches>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    build_command().try_get_matches_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let rendered = e.to_string();
            let message = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ");
            usage_error(message)
        }
    })
}

/// Extracts the invocation from parsed arguments
///
/// # Errors
/// Returns a usage error if the source directory is missing
pub fn get_invocation(matches: &ArgMatches) -> Result<Invocation> {
    let source = matches
        .get_one::<String>("source")
        .cloned()
        .ok_or_else(|| usage_error("the argument '--source <DIR>' is required"))?;

    let overrides = Overrides {
        output: matches.get_one::<PathBuf>("output").cloned(),
        pretty: matches.get_flag("pretty"),
        extension: matches.get_one::<String>("extension").cloned(),
        test_marker: matches.get_one::<String>("test_marker").cloned(),
        target_marker: matches.get_one::<String>("target_marker").cloned(),
    };

    Ok(Invocation {
        source,
        config: matches.get_one::<PathBuf>("config").cloned(),
        overrides,
        dry_run: matches.get_flag("dry"),
        verbosity: get_verbosity(matches),
        log_file: matches.get_one::<String>("log_file").cloned(),
    })
}

/// Parses an invocation straight from raw arguments
///
/// # Errors
/// Returns a usage error for every unsupported command line
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = get_matches_from(args)?;
    get_invocation(&matches)
}

/// Gets the verbosity level
///
/// An explicit `--log-level` wins, otherwise the number of -v/--verbose
/// flags decides.
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    if let Some(level) = matches.get_one::<LogLevel>("log_level") {
        return *level;
    }
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}
