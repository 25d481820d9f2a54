//! Global Constants
//!
//! The scan target, the extraction patterns and the report location are
//! fixed for every run and are deliberately kept out of the config layer.

/// Source selection constants
pub mod scan {
    /// File name suffix a file must carry to be summarized
    pub const TARGET_EXTENSION: &str = ".dart";

    /// Root directory used when nothing else is given
    pub const DEFAULT_ROOT: &str = ".";
}

/// Extraction pattern constants
pub mod patterns {
    /// Literal `class` keyword, one space, captured word token.
    /// A word is a run of letters, numbers and `_` (no combining marks or
    /// connector punctuation other than `_`).
    pub const CLASS: &str = r"class ([\p{L}\p{N}_]+)";

    /// `<word> <word>(...)` on a single line; group 2 is the function name
    pub const FUNCTION: &str = r"([\p{L}\p{N}_]+)\s+([\p{L}\p{N}_]+)\(.*?\)";
}

/// Report formatting constants
pub mod report {
    /// Report file written into the current working directory
    pub const OUTPUT_FILE: &str = "flutter_code_summary.txt";

    /// Marker that opens every per-file block
    pub const FILE_MARKER: &str = "📌";

    /// Separator between names on a `Classes:` or `Functions:` line
    pub const NAME_SEPARATOR: &str = ", ";

    /// Separator between report blocks
    pub const BLOCK_SEPARATOR: &str = "\n";
}

/// Configuration constants
pub mod config {
    /// Environment variable prefix (e.g. `FLUTTER_SUMMARY_LOG_LEVEL`)
    pub const ENV_PREFIX: &str = "FLUTTER_SUMMARY_";

    /// Directory name under the XDG config home
    pub const APP_DIR: &str = "flutter-summary";

    /// Project-level config file, looked up in the current directory
    pub const PROJECT_FILE: &str = ".flutter-summary.toml";

    /// Accepted values for `log.level`
    pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
}
