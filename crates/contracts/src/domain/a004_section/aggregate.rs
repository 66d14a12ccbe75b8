use serde::{Deserialize, Serialize};

use crate::domain::a006_schedule::aggregate::WeeklySchedule;

/// Секция — направление тренировок внутри клуба (например, "Йога")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    pub club_id: i64,
    pub name: Option<String>,
    #[serde(default)]
    pub groups: Vec<TrainingGroup>,
}

/// Группа — расписуемый класс внутри секции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingGroup {
    pub id: i64,
    pub name: String,
    pub level: Option<String>,
    pub capacity: Option<i32>,
}

/// DTO создания секции
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSection {
    pub club_id: i64,
    pub name: String,
}

/// DTO создания группы в секции
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGroup {
    pub name: String,
    pub level: Option<String>,
    pub capacity: Option<i32>,
}

/// Запрос генерации занятий группы по недельному шаблону
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateLessonsRequest {
    pub group_id: i64,
    pub schedule: WeeklySchedule,
}
