//! Справочники для выпадающих фильтров (склады, агенты, маршруты, товары).
//! Загружаются один раз за сессию и переиспользуются всеми страницами.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesmanDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub route_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub unit: Option<String>,
}
