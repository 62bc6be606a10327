/// Number of history records `calc run` prints when `--last` is not given.
pub const DEFAULT_HISTORY_LEN: usize = 10;

/// Log filter override, in `tracing_subscriber::EnvFilter` syntax.
pub const LOG_ENV_VAR: &str = "CALC_LOG";

/// Table width override for terminal output.
pub const COLUMNS_ENV_VAR: &str = "CALC_COLUMNS";

/// Script path meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

pub const COMMENT_PREFIX: char = '#';
