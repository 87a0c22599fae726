pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 25;

/// Pages shown on each side of the current page in the paginator bar.
pub const PAGINATOR_WINDOW: i64 = 4;

pub const ELLIPSIS_LABEL: &str = "...";
