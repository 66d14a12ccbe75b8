use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a004_section::aggregate::NewGroup;
use crate::domain::a006_schedule::aggregate::ScheduleRow;

/// Запрос создания секции с группами и расписанием занятий
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSectionRequest {
    pub club_id: i64,
    pub name: String,
    pub groups: Vec<NewGroup>,
    /// Строки расписания формы; применяются к каждой создаваемой группе
    pub schedule_rows: Vec<ScheduleRow>,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
}

impl CreateSectionRequest {
    /// Валидация данных формы (до любого сетевого вызова)
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название секции не может быть пустым".into());
        }
        if self.groups.is_empty() {
            return Err("Добавьте хотя бы одну группу".into());
        }
        if self.groups.iter().any(|group| group.name.trim().is_empty()) {
            return Err("Название группы не может быть пустым".into());
        }
        Ok(())
    }
}
