//! Search endpoint for result pages.

use common::{param_bag::ParamBag, search_result::{ResourceCount, SearchResultPage}};
use tracing::debug;

use crate::api::search::{
    query_translator::parse_and_serialize,
    result_paginator::paginate,
    search_facets::build_facets,
    search_for_results_hit_count::search_for_results_hit_count,
};
use crate::api_utils::{api_error::ApiError, terminology_api::SearchBackend};
use crate::{filter_table::FilterTable, reference_data::ReferenceData};


/// Collaborators shared by every search page.
pub struct SearchContext<'a, A: SearchBackend + ?Sized> {
    pub api: &'a A,
    pub filter_table: &'a FilterTable,
    pub reference: &'a dyn ReferenceData,
}

/// Runs one search page: translate `params`, query the API, then paginate and shape facets.
/// Paginator links point at `base_url` and keep every other parameter of `params`.
/// With `include_counts`, the other resource types are counted for the tabs.
pub async fn search_for_results<A: SearchBackend + ?Sized>(
    ctx: &SearchContext<'_, A>,
    params: &ParamBag,
    base_url: &str,
    include_counts: bool,
) -> Result<SearchResultPage, ApiError> {
    let (request, outbound) = parse_and_serialize(params);
    debug!("search {} with {:?}", request.resource_type, outbound);

    let response = ctx.api.search(request.resource_type, &outbound).await?;
    let headers = response.headers;
    let (window, links) = paginate(headers.num_found, headers.num_returned, headers.offset, request.limit, base_url, params);

    let facets = build_facets(
        ctx.filter_table.definitions(request.resource_type),
        response.facet_fields(),
        &request,
        ctx.reference,
    );

    let resource_counts = if include_counts {
        let mut counts = search_for_results_hit_count(ctx.api, &request).await?;
        counts.set(request.resource_type, headers.num_found);
        counts
    } else {
        ResourceCount::default()
    };

    Ok(SearchResultPage {
        records: response.records(),
        num_found: headers.num_found,
        window,
        links,
        facets,
        resource_counts,
        request,
    })
}
