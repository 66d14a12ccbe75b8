use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::StaffRole;

/// Подтверждённый участник команды.
/// Ответ эндпоинта списка сотрудников; одна запись может нести роли
/// сразу в нескольких клубах сети.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMemberRecord {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: String,
    pub username: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub clubs_and_roles: Vec<ClubRoleEntry>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Роль участника в отдельном клубе
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubRoleEntry {
    pub club_id: i64,
    pub role: StaffRole,
    /// Неактивная запись членства трактуется как ожидающая подтверждения
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}
