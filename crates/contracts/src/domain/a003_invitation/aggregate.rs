use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{InvitationStatus, StaffRole};

/// Приглашение сотрудника в клуб.
/// Ответ эндпоинта приглашений; запрашивается по одному клубу за раз.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvitationRecord {
    pub id: i64,
    pub phone_number: String,
    pub role: StaffRole,
    pub club_id: i64,
    pub status: InvitationStatus,
    #[serde(default)]
    pub is_used: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl InvitationRecord {
    /// Участвует ли приглашение в сведении ростера:
    /// только ожидающие и ещё не использованные.
    pub fn is_open(&self) -> bool {
        self.status == InvitationStatus::Pending && !self.is_used
    }
}

/// DTO создания приглашения
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvitationRequest {
    pub phone_number: String,
    pub role: StaffRole,
}
