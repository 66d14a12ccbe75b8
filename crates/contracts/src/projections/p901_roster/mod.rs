//! Сведённый ростер сотрудников сети.
//!
//! Read-модель, собираемая из двух независимых источников: подтверждённых
//! участников команды и ожидающих приглашений по клубам. Пересчитывается
//! заново при каждой загрузке данных.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{ParticipationStatus, StaffRole};

/// Источник записи роли в клубе
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleOrigin {
    /// Подтверждённая запись членства
    Membership,
    /// Неподтверждённое приглашение
    Invitation,
}

/// Состояние роли сотрудника в отдельном клубе.
/// Инвариант: не более одной записи на пару (сотрудник, клуб).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubRoleState {
    pub club_id: i64,
    pub role: StaffRole,
    pub status: ParticipationStatus,
    pub origin: RoleOrigin,
    /// Идентификатор приглашения — нужен для последующей отмены.
    /// Заполнен только у записей, порождённых приглашением.
    pub invitation_id: Option<i64>,
}

/// Сотрудник — сведённый агрегат ростера, один на нормализованный
/// телефонный ключ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Нормализованный телефон — единственный ключ идентичности
    /// между источниками
    pub identity_key: String,
    /// Идентификатор пользователя на бэкенде; отсутствует у «призраков»
    pub user_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub username: Option<String>,
    pub photo_url: Option<String>,
    /// Старшая по приоритету роль среди всех клубов
    pub primary_role: StaffRole,
    pub club_ids: Vec<i64>,
    pub club_roles: Vec<ClubRoleState>,
    pub status: ParticipationStatus,
    /// Для «призрака» — id первого открытого приглашения
    pub invitation_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Employee {
    /// Запись существует только из-за непринятого приглашения:
    /// имени нет, подтверждённого членства нет.
    pub fn is_ghost(&self) -> bool {
        self.user_id.is_none()
            && self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.status == ParticipationStatus::Pending
    }

    /// Состояние роли в конкретном клубе
    pub fn role_in_club(&self, club_id: i64) -> Option<&ClubRoleState> {
        self.club_roles.iter().find(|state| state.club_id == club_id)
    }

    /// Имя для отображения в списке; для «призрака» — телефон
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.phone.clone()
        } else {
            full.to_string()
        }
    }

    /// Пересчитать производные поля по текущему списку ролей:
    /// основная роль — максимум по приоритету (по умолчанию тренер),
    /// статус — активен, если активна хотя бы одна роль.
    pub fn recalc(&mut self) {
        self.primary_role = self
            .club_roles
            .iter()
            .map(|state| state.role)
            .max_by_key(|role| role.priority())
            .unwrap_or(StaffRole::Coach);
        self.status = if self.club_roles.iter().any(|state| state.status.is_active()) {
            ParticipationStatus::Active
        } else {
            ParticipationStatus::Pending
        };
        self.club_ids = self.club_roles.iter().map(|state| state.club_id).collect();
    }
}
