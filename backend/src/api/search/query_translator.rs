//! Translation between incoming request parameters and the terminology API query string.

use std::collections::{BTreeMap, BTreeSet};

use common::{
    param_bag::ParamBag,
    search_const::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE},
    search_query::{ResourceType, SearchRequest, SortDirection, SortField},
};

pub const PARAM_TYPE: &str = "type";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_SORT: &str = "sort";
pub const PARAM_QUERY: &str = "q";
pub const PARAM_VERBOSE: &str = "verbose";

const RESERVED_PARAMS: [&str; 5] = [PARAM_TYPE, PARAM_PAGE, PARAM_LIMIT, PARAM_SORT, PARAM_QUERY];


/// Builds a [`SearchRequest`] from raw parameters. Malformed values fall back to defaults.
pub fn parse(params: &ParamBag) -> SearchRequest {
    let resource_type = params
        .last(PARAM_TYPE)
        .and_then(ResourceType::from_param)
        .unwrap_or_default();

    let query_text = params
        .last(PARAM_QUERY)
        .filter(|q| !q.trim().is_empty())
        .map(|q| q.to_string());

    let (sort_field, sort_direction) = params.last(PARAM_SORT).map(parse_sort_label).unwrap_or((None, None));

    let mut filters = BTreeMap::new();
    for key in params.keys() {
        if RESERVED_PARAMS.contains(&key) {
            continue;
        }
        let values = params.all(key).flat_map(split_filter_value).collect::<BTreeSet<_>>();
        if !values.is_empty() {
            filters.insert(key.to_string(), values);
        }
    }

    SearchRequest {
        resource_type,
        query_text,
        sort_field,
        sort_direction,
        page: parse_positive(params.last(PARAM_PAGE), DEFAULT_PAGE),
        limit: parse_positive(params.last(PARAM_LIMIT), DEFAULT_PAGE_SIZE),
        filters,
    }
}

/// Query-string parameters for the API collection endpoint of `request.resource_type`.
pub fn serialize(request: &SearchRequest) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();

    // filters first, so the fixed keys below always win
    for (filter_id, values) in &request.filters {
        out.insert(filter_id.clone(), join_filter_values(values));
    }
    if let Some(q) = &request.query_text {
        out.insert(PARAM_QUERY.to_string(), q.clone());
    }
    out.insert(PARAM_PAGE.to_string(), request.page.to_string());
    out.insert(PARAM_LIMIT.to_string(), request.limit.to_string());
    out.insert(PARAM_VERBOSE.to_string(), "true".to_string());
    if let Some((sort_key, field)) = request.api_sort() {
        out.insert(sort_key.to_string(), field.to_string());
    }
    out
}

pub fn parse_and_serialize(params: &ParamBag) -> (SearchRequest, BTreeMap<String, String>) {
    let request = parse(params);
    let serialized = serialize(&request);
    (request, serialized)
}

fn parse_positive(value: Option<&str>, default: u64) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v >= 1)
        .unwrap_or(default)
}

/// Splits labels such as `Last Update (Desc)` into field and direction.
pub fn parse_sort_label(label: &str) -> (Option<SortField>, Option<SortDirection>) {
    let label = label.to_lowercase();

    let direction = if label.contains("desc") {
        Some(SortDirection::Desc)
    } else if label.contains("asc") {
        Some(SortDirection::Asc)
    } else {
        None
    };

    let field = if label.contains("last update") {
        Some(SortField::LastUpdate)
    } else if label.contains("name") {
        Some(SortField::Name)
    } else if label.contains("best match") {
        Some(SortField::BestMatch)
    } else {
        None
    };

    (field, direction)
}

/// Splits `a,"b c",d` on commas outside double quotes; quotes are stripped.
fn split_filter_value(raw: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in raw.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    values.push(current);
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn join_filter_values(values: &BTreeSet<String>) -> String {
    values
        .iter()
        .map(|v| {
            if v.chars().any(char::is_whitespace) {
                format!("\"{}\"", v)
            } else {
                v.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
