//! Заказ дистрибьютора: строки списка и карточка документа.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Статус документа в жизненном цикле заказа.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    Approved,
    Shipped,
    Closed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::Approved => "approved",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Closed => "closed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::New => "Новый",
            OrderStatus::Approved => "Подтверждён",
            OrderStatus::Shipped => "Отгружен",
            OrderStatus::Closed => "Закрыт",
            OrderStatus::Cancelled => "Отменён",
        }
    }

    pub fn parse(value: &str) -> anyhow::Result<Self> {
        Ok(match value {
            "new" => OrderStatus::New,
            "approved" => OrderStatus::Approved,
            "shipped" => OrderStatus::Shipped,
            "closed" => OrderStatus::Closed,
            "cancelled" => OrderStatus::Cancelled,
            other => bail!("неизвестный статус заказа: {other}"),
        })
    }

    pub fn all() -> [OrderStatus; 5] {
        [
            OrderStatus::New,
            OrderStatus::Approved,
            OrderStatus::Shipped,
            OrderStatus::Closed,
            OrderStatus::Cancelled,
        ]
    }
}

/// Краткая ссылка на контрагента внутри строки списка.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRef {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributorOrderDto {
    pub id: Uuid,
    pub document_no: String,
    pub order_date: String,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub customer: Option<CustomerRef>,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    #[serde(default)]
    pub salesman_name: Option<String>,
    #[serde(default)]
    pub total_qty: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl DistributorOrderDto {
    /// Дата документа приходит строкой `YYYY-MM-DD`; парсинг ленивый,
    /// битое значение не считается ошибкой списка.
    pub fn order_date_parsed(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::parse_from_str(&self.order_date, "%Y-%m-%d").ok()
    }
}

/// Строка табличной части заказа (карточка документа).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineDto {
    pub item_code: String,
    #[serde(default)]
    pub item_name: Option<String>,
    pub qty: f64,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributorOrderDetailsDto {
    #[serde(flatten)]
    pub header: DistributorOrderDto,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub lines: Vec<OrderLineDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(OrderStatus::parse("draft").is_err());
    }

    #[test]
    fn test_order_date_parsed() {
        let dto: DistributorOrderDto = serde_json::from_str(
            r#"{"id":"6f3a0c4e-8a50-4a8c-9a7e-0b1f4ad2b1aa","document_no":"ORD-1","order_date":"2026-07-01"}"#,
        )
        .unwrap();
        assert_eq!(
            dto.order_date_parsed(),
            chrono::NaiveDate::from_ymd_opt(2026, 7, 1)
        );
    }

    #[test]
    fn test_dto_tolerates_missing_nested_fields() {
        let dto: DistributorOrderDto = serde_json::from_str(
            r#"{"id":"6f3a0c4e-8a50-4a8c-9a7e-0b1f4ad2b1aa","document_no":"ORD-1","order_date":"2026-07-01"}"#,
        )
        .unwrap();
        assert!(dto.customer.is_none());
        assert!(dto.total_amount.is_none());
    }
}
