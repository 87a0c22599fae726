use common::{
    search_query::{ResourceType, SearchRequest},
    search_result::ResourceCount,
};
use futures::future::try_join_all;

use crate::api::search::query_translator::serialize;
use crate::api_utils::{api_error::ApiError, terminology_api::SearchBackend};


/// Hit counts for every resource type other than `request.resource_type`, issued concurrently.
/// Only the query text carries over; filters are specific to the primary resource type.
pub async fn search_for_results_hit_count<A: SearchBackend + ?Sized>(api: &A, request: &SearchRequest) -> Result<ResourceCount, ApiError> {
    let others = ResourceType::ALL.into_iter().filter(|t| *t != request.resource_type).collect::<Vec<_>>();

    let counts = try_join_all(others.iter().map(|resource_type| async move {
        let count_request = SearchRequest {
            resource_type: *resource_type,
            query_text: request.query_text.clone(),
            limit: 1,
            ..Default::default()
        };
        let count = api.count(*resource_type, &serialize(&count_request)).await?;
        Ok::<_, ApiError>((*resource_type, count))
    }))
    .await?;

    let mut result = ResourceCount::default();
    for (resource_type, count) in counts {
        result.set(resource_type, count);
    }
    Ok(result)
}
