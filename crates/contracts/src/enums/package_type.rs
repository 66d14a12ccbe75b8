use serde::{Deserialize, Serialize};

/// Тип пакета доступа тарифа.
///
/// Определяется объёмом выбранной зоны доступа (клубы / секции / группы)
/// в момент отправки формы тарифа, не хранится в состоянии выбора.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    FullClub,
    FullSection,
    SingleGroup,
    MultipleGroups,
}

impl PackageType {
    /// Получить код типа пакета (как в API бэкенда)
    pub fn code(&self) -> &'static str {
        match self {
            PackageType::FullClub => "full_club",
            PackageType::FullSection => "full_section",
            PackageType::SingleGroup => "single_group",
            PackageType::MultipleGroups => "multiple_groups",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            PackageType::FullClub => "Весь клуб",
            PackageType::FullSection => "Вся секция",
            PackageType::SingleGroup => "Одна группа",
            PackageType::MultipleGroups => "Несколько групп",
        }
    }

    /// Получить все типы пакетов
    pub fn all() -> Vec<PackageType> {
        vec![
            PackageType::FullClub,
            PackageType::FullSection,
            PackageType::SingleGroup,
            PackageType::MultipleGroups,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "full_club" => Some(PackageType::FullClub),
            "full_section" => Some(PackageType::FullSection),
            "single_group" => Some(PackageType::SingleGroup),
            "multiple_groups" => Some(PackageType::MultipleGroups),
            _ => None,
        }
    }
}
