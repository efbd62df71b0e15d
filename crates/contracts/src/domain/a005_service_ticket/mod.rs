//! Сервисная заявка по оборудованию (холодильники и прочие активы).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    Assigned,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Assigned => "assigned",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Открыта",
            TicketStatus::Assigned => "Назначена",
            TicketStatus::InProgress => "В работе",
            TicketStatus::Resolved => "Решена",
            TicketStatus::Closed => "Закрыта",
        }
    }

    pub fn all() -> [TicketStatus; 5] {
        [
            TicketStatus::Open,
            TicketStatus::Assigned,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
            TicketStatus::Closed,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceTicketDto {
    pub id: Uuid,
    pub ticket_no: String,
    pub opened_at: String,
    #[serde(default)]
    pub status: Option<TicketStatus>,
    #[serde(default)]
    pub asset_code: Option<String>,
    #[serde(default)]
    pub asset_model: Option<String>,
    #[serde(default)]
    pub outlet_name: Option<String>,
    #[serde(default)]
    pub technician_name: Option<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<String>,
}
