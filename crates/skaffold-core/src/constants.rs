//! Well-known identifiers and file names.

/// Id of the default "Happiness Tracking Survey".
pub const HATS: &str = "hats";

/// Default project config file name.
pub const DEFAULT_SKAFFOLD_CONFIG: &str = "skaffold.yaml";

/// Directory under the user's home holding the global config.
pub const GLOBAL_CONFIG_DIR: &str = ".skaffold";

/// File name of the global config inside [`GLOBAL_CONFIG_DIR`].
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";
