use serde::{Deserialize, Serialize};

/// Статус приглашения на стороне бэкенда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
    Expired,
    Cancelled,
}

impl InvitationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            InvitationStatus::Pending => "pending",
            InvitationStatus::Accepted => "accepted",
            InvitationStatus::Declined => "declined",
            InvitationStatus::Expired => "expired",
            InvitationStatus::Cancelled => "cancelled",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            InvitationStatus::Pending => "Ожидает",
            InvitationStatus::Accepted => "Принято",
            InvitationStatus::Declined => "Отклонено",
            InvitationStatus::Expired => "Истекло",
            InvitationStatus::Cancelled => "Отменено",
        }
    }
}
