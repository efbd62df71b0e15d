//! Возврат от дистрибьютора: строки списка.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnReason {
    Damaged,
    Expired,
    WrongItem,
    Other,
}

impl ReturnReason {
    pub fn display_name(&self) -> &'static str {
        match self {
            ReturnReason::Damaged => "Повреждение",
            ReturnReason::Expired => "Истёк срок",
            ReturnReason::WrongItem => "Пересорт",
            ReturnReason::Other => "Другое",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnDto {
    pub id: Uuid,
    pub document_no: String,
    pub return_date: String,
    #[serde(default)]
    pub reason: Option<ReturnReason>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub warehouse_name: Option<String>,
    #[serde(default)]
    pub total_qty: Option<f64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
}
