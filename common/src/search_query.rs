//! Shared search request models.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};


/// Top-level entity kinds searchable through the terminology API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    Concepts,
    Mappings,
    Sources,
    Collections,
    Orgs,
    Users,
}

impl ResourceType {
    pub const ALL: [ResourceType; 6] = [
        ResourceType::Concepts,
        ResourceType::Mappings,
        ResourceType::Sources,
        ResourceType::Collections,
        ResourceType::Orgs,
        ResourceType::Users,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Concepts => "concepts",
            ResourceType::Mappings => "mappings",
            ResourceType::Sources => "sources",
            ResourceType::Collections => "collections",
            ResourceType::Orgs => "orgs",
            ResourceType::Users => "users",
        }
    }

    /// Case-insensitive lookup of a `type` parameter value.
    pub fn from_param(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|t| t.as_str().eq_ignore_ascii_case(value))
    }

    /// Collection endpoint on the terminology API, e.g. `/concepts/`.
    pub fn api_path(&self) -> String {
        format!("/{}/", self.as_str())
    }

    pub fn display_name(&self, count: u64) -> &'static str {
        match (self, count == 1) {
            (ResourceType::Concepts, true) => "concept",
            (ResourceType::Concepts, false) => "concepts",
            (ResourceType::Mappings, true) => "mapping",
            (ResourceType::Mappings, false) => "mappings",
            (ResourceType::Sources, true) => "source",
            (ResourceType::Sources, false) => "sources",
            (ResourceType::Collections, true) => "collection",
            (ResourceType::Collections, false) => "collections",
            (ResourceType::Orgs, true) => "organization",
            (ResourceType::Orgs, false) => "organizations",
            (ResourceType::Users, true) => "user",
            (ResourceType::Users, false) => "users",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    BestMatch,
    LastUpdate,
    Name,
}

impl SortField {
    /// Field name understood by the API; best match is the API's own ordering.
    pub fn api_name(&self) -> Option<&'static str> {
        match self {
            SortField::BestMatch => None,
            SortField::LastUpdate => Some("last_update"),
            SortField::Name => Some("name"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn api_key(&self) -> &'static str {
        match self {
            SortDirection::Asc => "sortAsc",
            SortDirection::Desc => "sortDesc",
        }
    }
}


/// Normalized search request, built fresh from each incoming parameter bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub resource_type: ResourceType,
    pub query_text: Option<String>,
    pub sort_field: Option<SortField>,
    pub sort_direction: Option<SortDirection>,
    pub page: u64,
    pub limit: u64,
    pub filters: BTreeMap<String, BTreeSet<String>>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            resource_type: ResourceType::default(),
            query_text: None,
            sort_field: None,
            sort_direction: None,
            page: crate::search_const::DEFAULT_PAGE,
            limit: crate::search_const::DEFAULT_PAGE_SIZE,
            filters: BTreeMap::new(),
        }
    }
}

impl SearchRequest {
    /// API sort key and field, present only when both halves of the label resolved.
    pub fn api_sort(&self) -> Option<(&'static str, &'static str)> {
        let direction = self.sort_direction?;
        let field = self.sort_field?.api_name()?;
        Some((direction.api_key(), field))
    }

    pub fn is_selected(&self, filter_id: &str, value: &str) -> bool {
        self.filters.get(filter_id).is_some_and(|values| values.contains(value))
    }
}
