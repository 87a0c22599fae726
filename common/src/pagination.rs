use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PageWindow {
    pub current_page: u64,
    pub total_pages: u64,
    /// 1-indexed position of the first record on this page.
    pub results_start_index: u64,
    pub results_stop_index: u64,
    pub show_bar: bool,
    pub bar_entries: Vec<PageEntry>,
}

/// One slot of the paginator bar. Ellipsis placeholders have no target page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub display_label: String,
    pub target_page: Option<u64>,
    pub url: Option<String>,
    pub is_current: bool,
    pub is_disabled: bool,
}

impl PageEntry {
    pub fn page(page: u64, url: String, is_current: bool) -> Self {
        Self {
            display_label: page.to_string(),
            target_page: Some(page),
            url: Some(url),
            is_current,
            is_disabled: false,
        }
    }

    pub fn ellipsis() -> Self {
        Self {
            display_label: crate::search_const::ELLIPSIS_LABEL.to_string(),
            target_page: None,
            url: None,
            is_current: false,
            is_disabled: true,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        self.target_page.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AdjacentLinks {
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
}
