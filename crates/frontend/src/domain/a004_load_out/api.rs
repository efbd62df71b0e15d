//! API client for salesman load-outs.

use crate::shared::api_utils::{api_url, get_json, post_json, ApiError};
use crate::shared::grid::query;
use crate::shared::grid::source::GridSource;
use contracts::domain::a004_load_out::LoadOutDto;
use contracts::shared::export::{ExportRequest, ExportResponse};
use contracts::shared::filter::{FilterMap, GlobalFilterRequest};
use contracts::shared::paging::{ListResponse, PageRequest, PageResult};

const BASE_URL: &str = "/api/a004/load-outs";

pub async fn list(request: PageRequest) -> Result<PageResult<LoadOutDto>, ApiError> {
    let url = api_url(&format!("{}?{}", BASE_URL, query::to_query_string(&request)));
    let response: ListResponse<LoadOutDto> = get_json(&url).await?;
    Ok(PageResult::from_response(
        response,
        request.page,
        request.per_page,
    ))
}

pub async fn filter_by(
    filter: FilterMap,
    per_page: u32,
    page: u32,
) -> Result<PageResult<LoadOutDto>, ApiError> {
    let body = GlobalFilterRequest {
        per_page,
        current_page: page,
        filter,
    };
    let response: ListResponse<LoadOutDto> =
        post_json(&api_url(&format!("{}/filter", BASE_URL)), &body).await?;
    Ok(PageResult::from_response(response, page, per_page))
}

pub async fn export(request: ExportRequest) -> Result<ExportResponse, ApiError> {
    post_json(&api_url(&format!("{}/export", BASE_URL)), &request).await
}

pub fn grid_source() -> GridSource<LoadOutDto> {
    GridSource {
        name: "load-outs",
        list: |request| Box::pin(list(request)),
        filter_by: |filter, per_page, page| Box::pin(filter_by(filter, per_page, page)),
    }
}
