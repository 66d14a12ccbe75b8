use serde::{Deserialize, Serialize};

use crate::domain::a006_schedule::aggregate::WeeklySchedule;
use crate::enums::PackageType;

/// DTO создания тарифа — ценового пакета доступа к зоне
/// клубы / секции / группы.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTariffRequest {
    pub name: String,
    /// Цена в минимальных единицах валюты
    pub price: i64,
    pub package_type: PackageType,
    pub club_ids: Vec<i64>,
    pub section_ids: Vec<i64>,
    pub group_ids: Vec<i64>,
    pub schedule: Option<WeeklySchedule>,
    pub comment: Option<String>,
}

impl CreateTariffRequest {
    /// Валидация данных формы (до любого сетевого вызова)
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название тарифа не может быть пустым".into());
        }
        if self.price <= 0 {
            return Err("Цена тарифа должна быть больше нуля".into());
        }
        if self.club_ids.is_empty() && self.section_ids.is_empty() && self.group_ids.is_empty() {
            return Err("Выберите хотя бы один клуб, секцию или группу".into());
        }
        Ok(())
    }
}
