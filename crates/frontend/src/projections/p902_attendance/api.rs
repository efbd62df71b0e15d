//! API client for the salesman attendance report.

use crate::shared::api_utils::{api_url, get_json, post_json, ApiError};
use crate::shared::grid::query;
use crate::shared::grid::source::GridSource;
use contracts::projections::p902_attendance::AttendanceRowDto;
use contracts::shared::filter::{FilterMap, GlobalFilterRequest};
use contracts::shared::paging::{ListResponse, PageRequest, PageResult};

const BASE_URL: &str = "/api/p902/attendance";

pub async fn list(request: PageRequest) -> Result<PageResult<AttendanceRowDto>, ApiError> {
    let url = api_url(&format!("{}?{}", BASE_URL, query::to_query_string(&request)));
    let response: ListResponse<AttendanceRowDto> = get_json(&url).await?;
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
) -> Result<PageResult<AttendanceRowDto>, ApiError> {
    let body = GlobalFilterRequest {
        per_page,
        current_page: page,
        filter,
    };
    let response: ListResponse<AttendanceRowDto> =
        post_json(&api_url(&format!("{}/filter", BASE_URL)), &body).await?;
    Ok(PageResult::from_response(response, page, per_page))
}

pub fn grid_source() -> GridSource<AttendanceRowDto> {
    GridSource {
        name: "attendance",
        list: |request| Box::pin(list(request)),
        filter_by: |filter, per_page, page| Box::pin(filter_by(filter, per_page, page)),
    }
}
