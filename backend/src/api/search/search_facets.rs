//! Facet shaping for the filter panel.

use std::collections::HashSet;

use common::{
    search_query::SearchRequest,
    search_result::{FacetBucket, FacetOption},
};

use crate::{filter_table::FilterDefinition, reference_data::ReferenceData};


/// One bucket per filter definition, in table order.
///
/// `raw_fields` is the API's `facets.fields` object, mapping a facet field to entries of the
/// form `[value, count, ...]`. Values selected in `request` but missing from the payload are
/// kept with a zero count so they can still be cleared.
pub fn build_facets(
    definitions: &[FilterDefinition],
    raw_fields: Option<&serde_json::Map<String, serde_json::Value>>,
    request: &SearchRequest,
    reference: &dyn ReferenceData,
) -> Vec<FacetBucket> {
    definitions
        .iter()
        .map(|definition| {
            let raw_entries = raw_fields
                .and_then(|fields| fields.get(&definition.facet_field))
                .and_then(|v| v.as_array())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            build_facet_bucket(definition, raw_entries, request, reference)
        })
        .collect()
}

fn build_facet_bucket(
    definition: &FilterDefinition,
    raw_entries: &[serde_json::Value],
    request: &SearchRequest,
    reference: &dyn ReferenceData,
) -> FacetBucket {
    let filter_id = definition.filter_id.as_str();
    let mut present_values = HashSet::new();
    let mut options = Vec::new();

    for (value, count) in raw_entries.iter().filter_map(parse_facet_entry) {
        if !present_values.insert(value.clone()) {
            continue;
        }
        options.push(FacetOption {
            option_name: reference.option_name(filter_id, &value).unwrap_or(value.clone()),
            selected: request.is_selected(filter_id, &value),
            option_value: value,
            count,
        });
    }
    options.sort_by_key(|item| (u64::MAX - item.count, item.option_value.clone()));

    if let Some(selected) = request.filters.get(filter_id) {
        for value in selected {
            if present_values.contains(value) {
                continue;
            }
            options.push(FacetOption {
                option_name: reference.option_name(filter_id, value).unwrap_or(value.clone()),
                option_value: value.clone(),
                count: 0,
                selected: true,
            });
        }
    }

    FacetBucket {
        filter_id: filter_id.to_string(),
        display_name: definition.display_name.clone(),
        options,
    }
}

fn parse_facet_entry(entry: &serde_json::Value) -> Option<(String, u64)> {
    let items = entry.as_array()?;
    let value = match items.first()? {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    let count = items.get(1)?.as_u64()?;
    Some((value, count))
}
