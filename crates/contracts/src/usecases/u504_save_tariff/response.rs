use serde::{Deserialize, Serialize};

use crate::enums::PackageType;

/// Ответ на сохранение тарифа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTariffResponse {
    /// ID созданного тарифа на бэкенде
    pub tariff_id: i64,
    /// Тип пакета, определённый по зоне доступа в момент отправки
    pub package_type: PackageType,
}
