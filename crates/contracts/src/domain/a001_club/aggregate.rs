use serde::{Deserialize, Serialize};

use crate::enums::StaffRole;

/// Клуб — площадка сети (верхний уровень иерархии доступа)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: i64,
    pub name: String,
}

/// Клуб вместе с ролью текущего пользователя в нём.
/// Ответ эндпоинта списка доступных клубов.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubWithRole {
    pub club: Club,
    pub role: StaffRole,
    /// Отдельный флаг владельца на записи роли. Бэкенд может выставить его
    /// и без role == owner; при проверке полномочий учитываются оба признака.
    #[serde(default)]
    pub is_owner: bool,
}

impl ClubWithRole {
    /// Является ли пользователь владельцем этого клуба
    pub fn is_owner_of_club(&self) -> bool {
        self.is_owner || self.role == StaffRole::Owner
    }
}
