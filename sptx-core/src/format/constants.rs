//! Format constants for the SPTX text encoding

/// Prefix of a row-count header line
pub const ROWS_PREFIX: &str = "rows=";

/// Prefix of a column-count header line
pub const COLS_PREFIX: &str = "cols=";

/// Maximum rows and columns rendered by the console display window
pub const DISPLAY_WINDOW: usize = 20;

/// Notice printed when the display window truncates the matrix
pub const TRUNCATION_NOTICE: &str = "... (matrix too large to display fully)";
