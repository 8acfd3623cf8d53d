/// Separator between the start and end dates of an exact-range token
pub const RANGE_SEPARATOR: &str = "_to_";

/// Prefix marking a flexible-window token
pub const FLEXIBLE_PREFIX: &str = "flexible-";

/// Separator between the duration and month segments of a flexible token
pub const SEGMENT_SEPARATOR: char = '-';

/// Separator between month names inside a flexible token
pub const MONTH_SEPARATOR: char = ',';

/// Date format used on the wire (local calendar fields, ISO 8601)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of a bare ISO date token (`YYYY-MM-DD`), the legacy single-day form
pub const ISO_DATE_LEN: usize = 10;

/// Columns in the calendar grid (Sunday-first week)
pub const DAYS_PER_WEEK: usize = 7;

/// Rows in the calendar grid
pub const WEEK_ROWS: usize = 6;

/// Total cells in one month's grid
pub const GRID_CELLS: usize = DAYS_PER_WEEK * WEEK_ROWS;

/// Months in a year, the fixed size of the flexible month list
pub const MONTHS_PER_YEAR: usize = 12;
