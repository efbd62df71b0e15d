//! API client for the sales summary report.
//!
//! Чтение списка идёт через `window.fetch` напрямую (исторически этот
//! отчёт обслуживается другим шлюзом); фильтр и экспорт — через общие
//! помощники `api_utils`.

use crate::shared::api_utils::{api_url, post_json, ApiError};
use crate::shared::grid::query;
use crate::shared::grid::source::GridSource;
use contracts::projections::p901_sales_summary::SalesSummaryRowDto;
use contracts::shared::envelope::business_error;
use contracts::shared::export::{ExportRequest, ExportResponse};
use contracts::shared::filter::{FilterMap, GlobalFilterRequest};
use contracts::shared::paging::{ListResponse, PageRequest, PageResult};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

const BASE_URL: &str = "/api/p901/sales-summary";

async fn fetch_value(url: &str) -> Result<serde_json::Value, ApiError> {
    let window =
        web_sys::window().ok_or_else(|| ApiError::Transport("No window object".to_string()))?;

    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| ApiError::Transport(format!("Fetch failed: {:?}", e)))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Transport("Failed to cast to Response".to_string()))?;

    if !resp.ok() {
        return Err(ApiError::Transport(format!("HTTP {}", resp.status())));
    }

    let promise: js_sys::Promise = resp
        .json()
        .map_err(|_| ApiError::Transport("Failed to get JSON".to_string()))?;
    let json = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to parse JSON: {:?}", e)))?;

    let value: serde_json::Value = serde_wasm_bindgen::from_value(json)
        .map_err(|e| ApiError::Transport(format!("Failed to deserialize: {:?}", e)))?;

    if let Some(message) = business_error(&value) {
        return Err(ApiError::Business(message));
    }

    Ok(value)
}

pub async fn list(request: PageRequest) -> Result<PageResult<SalesSummaryRowDto>, ApiError> {
    let url = api_url(&format!("{}?{}", BASE_URL, query::to_query_string(&request)));
    let value = fetch_value(&url).await?;
    let response: ListResponse<SalesSummaryRowDto> =
        serde_json::from_value(value).map_err(|e| ApiError::Transport(e.to_string()))?;
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
) -> Result<PageResult<SalesSummaryRowDto>, ApiError> {
    let body = GlobalFilterRequest {
        per_page,
        current_page: page,
        filter,
    };
    let response: ListResponse<SalesSummaryRowDto> =
        post_json(&api_url(&format!("{}/filter", BASE_URL)), &body).await?;
    Ok(PageResult::from_response(response, page, per_page))
}

pub async fn export(request: ExportRequest) -> Result<ExportResponse, ApiError> {
    post_json(&api_url(&format!("{}/export", BASE_URL)), &request).await
}

pub fn grid_source() -> GridSource<SalesSummaryRowDto> {
    GridSource {
        name: "sales-summary",
        list: |request| Box::pin(list(request)),
        filter_by: |filter, per_page, page| Box::pin(filter_by(filter, per_page, page)),
    }
}
