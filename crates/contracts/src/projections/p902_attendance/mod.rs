//! Отчёт по посещаемости торговых агентов.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRowDto {
    pub work_date: String,
    #[serde(default)]
    pub salesman_name: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub planned_visits: Option<u32>,
    #[serde(default)]
    pub actual_visits: Option<u32>,
    #[serde(default)]
    pub distance_km: Option<f64>,
}
