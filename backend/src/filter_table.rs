use std::collections::BTreeMap;

use common::search_query::ResourceType;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDefinition {
    /// Request parameter carrying the selected values.
    pub filter_id: String,
    pub display_name: String,
    /// Key of the facet in the API's `facets.fields` payload.
    pub facet_field: String,
}

impl FilterDefinition {
    pub fn new(filter_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        let filter_id = filter_id.into();
        Self { facet_field: filter_id.clone(), filter_id, display_name: display_name.into() }
    }

    pub fn with_facet_field(mut self, facet_field: impl Into<String>) -> Self {
        self.facet_field = facet_field.into();
        self
    }
}


/// Filters offered for each resource type, in display order.
#[derive(Debug, Clone, Default)]
pub struct FilterTable {
    entries: BTreeMap<ResourceType, Vec<FilterDefinition>>,
}

impl FilterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, resource_type: ResourceType, definitions: Vec<FilterDefinition>) -> Self {
        self.entries.insert(resource_type, definitions);
        self
    }

    pub fn definitions(&self, resource_type: ResourceType) -> &[FilterDefinition] {
        self.entries.get(&resource_type).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn standard() -> Self {
        Self::new()
            .with(ResourceType::Concepts, vec![
                FilterDefinition::new("source", "Source"),
                FilterDefinition::new("conceptClass", "Concept Class"),
                FilterDefinition::new("datatype", "Datatype"),
                FilterDefinition::new("locale", "Locale"),
                FilterDefinition::new("includeRetired", "Include Retired"),
            ])
            .with(ResourceType::Mappings, vec![
                FilterDefinition::new("mapType", "Map Type"),
                FilterDefinition::new("fromConceptSource", "From Source"),
                FilterDefinition::new("toConceptSource", "To Source"),
                FilterDefinition::new("source", "Source"),
                FilterDefinition::new("includeRetired", "Include Retired"),
            ])
            .with(ResourceType::Sources, vec![
                FilterDefinition::new("sourceType", "Source Type"),
                FilterDefinition::new("locale", "Locale"),
                FilterDefinition::new("owner", "Owner"),
            ])
            .with(ResourceType::Collections, vec![
                FilterDefinition::new("collectionType", "Collection Type"),
                FilterDefinition::new("locale", "Locale"),
                FilterDefinition::new("owner", "Owner"),
            ])
            .with(ResourceType::Orgs, vec![])
            .with(ResourceType::Users, vec![])
    }
}
