use serde::{Deserialize, Serialize};

/// Роль сотрудника в клубе
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Owner,
    Admin,
    Coach,
}

impl StaffRole {
    /// Приоритет роли: владелец > администратор > тренер.
    /// Используется для выбора основной роли сотрудника по всем клубам.
    pub fn priority(&self) -> u8 {
        match self {
            StaffRole::Owner => 3,
            StaffRole::Admin => 2,
            StaffRole::Coach => 1,
        }
    }

    /// Получить код роли (как в API бэкенда)
    pub fn code(&self) -> &'static str {
        match self {
            StaffRole::Owner => "owner",
            StaffRole::Admin => "admin",
            StaffRole::Coach => "coach",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            StaffRole::Owner => "Владелец",
            StaffRole::Admin => "Администратор",
            StaffRole::Coach => "Тренер",
        }
    }

    /// Получить все роли
    pub fn all() -> Vec<StaffRole> {
        vec![StaffRole::Owner, StaffRole::Admin, StaffRole::Coach]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "owner" => Some(StaffRole::Owner),
            "admin" => Some(StaffRole::Admin),
            "coach" => Some(StaffRole::Coach),
            _ => None,
        }
    }
}

impl ToString for StaffRole {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_matches_backend_codes() {
        assert_eq!(serde_json::to_string(&StaffRole::Owner).unwrap(), "\"owner\"");
        assert_eq!(
            serde_json::from_str::<StaffRole>("\"coach\"").unwrap(),
            StaffRole::Coach
        );
    }

    #[test]
    fn priority_orders_owner_above_admin_above_coach() {
        assert!(StaffRole::Owner.priority() > StaffRole::Admin.priority());
        assert!(StaffRole::Admin.priority() > StaffRole::Coach.priority());
    }
}
