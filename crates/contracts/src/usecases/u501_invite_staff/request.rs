use serde::{Deserialize, Serialize};

use crate::enums::StaffRole;

/// Запрос приглашения сотрудника в один или несколько клубов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteStaffRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub role: StaffRole,
    pub club_ids: Vec<i64>,
}

impl InviteStaffRequest {
    /// Валидация данных формы. Выполняется до любого сетевого вызова:
    /// невалидный запрос не порождает частичной отправки.
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("Имя не может быть пустым".into());
        }
        if self.last_name.trim().is_empty() {
            return Err("Фамилия не может быть пустой".into());
        }
        if self.phone_number.trim().is_empty() {
            return Err("Укажите номер телефона".into());
        }
        if self.club_ids.is_empty() {
            return Err("Выберите хотя бы один клуб".into());
        }
        Ok(())
    }
}
