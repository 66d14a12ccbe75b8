pub mod request;
pub mod response;

pub use request::SaveTariffRequest;
pub use response::SaveTariffResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct SaveTariff;

impl UseCaseMetadata for SaveTariff {
    fn usecase_index() -> &'static str {
        "u504"
    }

    fn usecase_name() -> &'static str {
        "save_tariff"
    }

    fn display_name() -> &'static str {
        "Сохранение тарифа"
    }

    fn description() -> &'static str {
        "Проверка зоны доступа и расписания тарифа и отправка его на бэкенд"
    }
}
