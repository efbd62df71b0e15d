//! API client for distributor orders.

use crate::shared::api_utils::{api_url, get_json, post_json, ApiError};
use crate::shared::grid::query;
use crate::shared::grid::source::GridSource;
use contracts::domain::a001_distributor_order::{DistributorOrderDetailsDto, DistributorOrderDto};
use contracts::shared::export::{ExportRequest, ExportResponse};
use contracts::shared::filter::{FilterMap, GlobalFilterRequest};
use contracts::shared::paging::{ListResponse, PageRequest, PageResult};

const BASE_URL: &str = "/api/a001/distributor-orders";

/// Обычный список: пагинация и быстрые фильтры плоскими параметрами.
pub async fn list(request: PageRequest) -> Result<PageResult<DistributorOrderDto>, ApiError> {
    let url = api_url(&format!("{}?{}", BASE_URL, query::to_query_string(&request)));
    let response: ListResponse<DistributorOrderDto> = get_json(&url).await?;
    Ok(PageResult::from_response(
        response,
        request.page,
        request.per_page,
    ))
}

/// Расширенный фильтр: payload в теле запроса.
pub async fn filter_by(
    filter: FilterMap,
    per_page: u32,
    page: u32,
) -> Result<PageResult<DistributorOrderDto>, ApiError> {
    let body = GlobalFilterRequest {
        per_page,
        current_page: page,
        filter,
    };
    let response: ListResponse<DistributorOrderDto> =
        post_json(&api_url(&format!("{}/filter", BASE_URL)), &body).await?;
    Ok(PageResult::from_response(response, page, per_page))
}

pub async fn get_by_id(id: &str) -> Result<DistributorOrderDetailsDto, ApiError> {
    get_json(&api_url(&format!("{}/{}", BASE_URL, id))).await
}

/// Экспорт шапок документов.
pub async fn export_header(request: ExportRequest) -> Result<ExportResponse, ApiError> {
    post_json(&api_url(&format!("{}/export", BASE_URL)), &request).await
}

/// Экспорт строк документов (развёрнутые табличные части).
pub async fn export_details(request: ExportRequest) -> Result<ExportResponse, ApiError> {
    post_json(&api_url(&format!("{}/export-details", BASE_URL)), &request).await
}

pub fn grid_source() -> GridSource<DistributorOrderDto> {
    GridSource {
        name: "distributor-orders",
        list: |request| Box::pin(list(request)),
        filter_by: |filter, per_page, page| Box::pin(filter_by(filter, per_page, page)),
    }
}
