//! Отчёт по продажам: агрегат по агенту за день.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummaryRowDto {
    pub period: String,
    #[serde(default)]
    pub salesman_name: Option<String>,
    #[serde(default)]
    pub route_name: Option<String>,
    #[serde(default)]
    pub outlets_visited: Option<u32>,
    #[serde(default)]
    pub orders_count: Option<u32>,
    #[serde(default)]
    pub sales_amount: Option<f64>,
    #[serde(default)]
    pub returns_amount: Option<f64>,
    #[serde(default)]
    pub net_amount: Option<f64>,
}
