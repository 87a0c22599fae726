use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    pagination::{AdjacentLinks, PageWindow},
    search_query::{ResourceType, SearchRequest},
};


/// Everything the rendering layer needs for one search page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultPage {
    pub request: SearchRequest,
    pub records: Vec<serde_json::Value>,
    pub num_found: u64,
    pub window: PageWindow,
    pub links: AdjacentLinks,
    pub facets: Vec<FacetBucket>,
    pub resource_counts: ResourceCount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetBucket {
    pub filter_id: String,
    pub display_name: String,
    pub options: Vec<FacetOption>,
}

impl FacetBucket {
    pub fn selected_values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().filter(|o| o.selected).map(|o| o.option_value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub option_value: String,
    pub option_name: String,
    pub count: u64,
    pub selected: bool,
}

/// Hit counts per resource type, used for the cross-resource tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResourceCount(pub BTreeMap<ResourceType, u64>);

impl ResourceCount {
    pub fn set(&mut self, resource_type: ResourceType, count: u64) {
        self.0.insert(resource_type, count);
    }

    pub fn get(&self, resource_type: ResourceType) -> Option<u64> {
        self.0.get(&resource_type).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tab labels like `12 concepts`, in resource type order.
    pub fn labels(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|(resource_type, count)| format!("{} {}", count, resource_type.display_name(*count)))
            .collect()
    }
}
