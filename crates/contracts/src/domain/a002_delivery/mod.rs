//! Доставка заказа: строки списка.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Planned,
    InTransit,
    Delivered,
    Failed,
}

impl DeliveryStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryStatus::Planned => "Запланирована",
            DeliveryStatus::InTransit => "В пути",
            DeliveryStatus::Delivered => "Доставлена",
            DeliveryStatus::Failed => "Не доставлена",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryDto {
    pub id: Uuid,
    pub document_no: String,
    pub delivery_date: String,
    #[serde(default)]
    pub status: Option<DeliveryStatus>,
    #[serde(default)]
    pub order_no: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    #[serde(default)]
    pub route_name: Option<String>,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}
