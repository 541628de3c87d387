/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Name of the executable, as shown in help and usage text
pub const BINARY_NAME: &str = "test-deployer";

/// Location of the manifest consumed by the CI test matrix
///
/// Relative to the directory the tool is invoked from.
pub const DEFAULT_OUTPUT_PATH: &str = ".github/workflows/test-list.json";

/// Extension of the test source files
pub const DEFAULT_EXTENSION: &str = ".c";

/// Marker that ends the name of every test source, before the extension
pub const DEFAULT_TEST_MARKER: &str = "_test";

/// Marker that ends the name of the build target of a test
pub const DEFAULT_TARGET_MARKER: &str = "_unit_test";

/// Prefix that makes a source directory relative to the working directory
pub const RELATIVE_PREFIX: &str = "./";

/// Usage text printed for every unsupported invocation
pub const USAGE: &str = "\nWrong arguments\nUse: test-deployer --source <target directory>\n";

/// Help text for the source command-line option
pub const SOURCE_HELP: &str = "Directory containing the unit-test sources";

/// Help text for the output command-line option
pub const OUTPUT_HELP: &str = "Write the manifest to this file instead of the default location";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read settings from a specific YAML config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Print the manifest instead of writing it";

/// Help text for the pretty command-line option
pub const PRETTY_HELP: &str = "Pretty-print the manifest JSON";

/// Help text for the extension command-line option
pub const EXTENSION_HELP: &str = "Extension of the test sources (default: .c)";

/// Help text for the test-marker command-line option
pub const TEST_MARKER_HELP: &str = "Marker ending every test source name (default: _test)";

/// Help text for the target-marker command-line option
pub const TARGET_MARKER_HELP: &str =
    "Marker ending every build target name (default: _unit_test)";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log level command-line option
pub const LOG_LEVEL_HELP: &str = "Set the verbosity level: error, warn, info, debug or trace";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";
