//! API client for asset service tickets.

use crate::shared::api_utils::{api_url, get_json, post_json, ApiError};
use crate::shared::grid::query;
use crate::shared::grid::source::GridSource;
use contracts::domain::a005_service_ticket::ServiceTicketDto;
use contracts::shared::export::ExportResponse;
use contracts::shared::filter::{FilterMap, GlobalFilterRequest};
use contracts::shared::paging::{ListResponse, PageRequest, PageResult};
use uuid::Uuid;

const BASE_URL: &str = "/api/a005/service-tickets";

pub async fn list(request: PageRequest) -> Result<PageResult<ServiceTicketDto>, ApiError> {
    let url = api_url(&format!("{}?{}", BASE_URL, query::to_query_string(&request)));
    let response: ListResponse<ServiceTicketDto> = get_json(&url).await?;
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
) -> Result<PageResult<ServiceTicketDto>, ApiError> {
    let body = GlobalFilterRequest {
        per_page,
        current_page: page,
        filter,
    };
    let response: ListResponse<ServiceTicketDto> =
        post_json(&api_url(&format!("{}/filter", BASE_URL)), &body).await?;
    Ok(PageResult::from_response(response, page, per_page))
}

/// Печатная форма заявки. Сервер формирует PDF и возвращает ссылку.
pub async fn ticket_pdf(id: Uuid) -> Result<ExportResponse, ApiError> {
    get_json(&api_url(&format!("{}/{}/pdf", BASE_URL, id))).await
}

pub fn grid_source() -> GridSource<ServiceTicketDto> {
    GridSource {
        name: "service-tickets",
        list: |request| Box::pin(list(request)),
        filter_by: |filter, per_page, page| Box::pin(filter_by(filter, per_page, page)),
    }
}
