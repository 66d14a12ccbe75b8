use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a006_schedule::aggregate::ScheduleRow;

/// Данные формы тарифа. Зона доступа приходит отдельно — из состояния
/// выбора клубов/секций/групп на момент отправки.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTariffRequest {
    pub name: String,
    /// Цена в минимальных единицах валюты
    pub price: i64,
    pub schedule_rows: Vec<ScheduleRow>,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub comment: Option<String>,
}
