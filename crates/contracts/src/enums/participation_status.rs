use serde::{Deserialize, Serialize};

/// Статус участия сотрудника: в клубе в целом и в отдельном клубе
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationStatus {
    /// Подтверждённое членство в команде
    Active,
    /// Ожидает принятия приглашения
    Pending,
}

impl ParticipationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ParticipationStatus::Active => "active",
            ParticipationStatus::Pending => "pending",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ParticipationStatus::Active => "Активен",
            ParticipationStatus::Pending => "Ожидает подтверждения",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ParticipationStatus::Active)
    }
}
