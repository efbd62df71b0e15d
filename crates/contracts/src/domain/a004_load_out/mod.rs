//! Загрузка торгового агента (load-out): строки списка.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadOutDto {
    pub id: Uuid,
    pub document_no: String,
    pub load_date: String,
    #[serde(default)]
    pub salesman_name: Option<String>,
    #[serde(default)]
    pub route_name: Option<String>,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    #[serde(default)]
    pub lines_count: Option<u32>,
    #[serde(default)]
    pub total_qty: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    /// Документ закрыт вечерней выгрузкой остатков.
    #[serde(default)]
    pub is_settled: Option<bool>,
}
