//! Executor для UseCase сохранения тарифа.

use contracts::domain::a005_tariff::aggregate::CreateTariffRequest;
use contracts::usecases::common::{UseCaseError, UseCaseMetadata, UseCaseResult};
use contracts::usecases::u504_save_tariff::{SaveTariff, SaveTariffRequest, SaveTariffResponse};

use crate::domain::a005_tariff::access_scope::AccessScopeSelector;
use crate::domain::a006_schedule::builder;
use crate::shared::api::PricingApi;
use crate::shared::telegram::{HapticKind, TelegramBridge};

/// Проверить форму тарифа и отправить её на бэкенд.
///
/// Вся валидация — зона доступа, поля формы, строгая проверка расписания —
/// выполняется до сетевого вызова. Тип пакета определяется по состоянию
/// выбора в момент отправки и нигде не кэшируется.
pub async fn execute(
    api: &dyn PricingApi,
    bridge: &dyn TelegramBridge,
    selector: &AccessScopeSelector,
    request: &SaveTariffRequest,
) -> UseCaseResult<SaveTariffResponse> {
    selector.validate()?;

    let schedule = if request.schedule_rows.is_empty() {
        None
    } else {
        Some(builder::build_validated(
            &request.schedule_rows,
            request.valid_from,
            request.valid_until,
        )?)
    };

    let package_type = selector.package_type();
    let payload = CreateTariffRequest {
        name: request.name.clone(),
        price: request.price,
        package_type,
        club_ids: selector.selected_clubs(),
        section_ids: selector.selected_sections(),
        group_ids: selector.selected_groups(),
        schedule,
        comment: request.comment.clone(),
    };
    payload.validate().map_err(UseCaseError::validation)?;

    tracing::info!(
        "{}: submitting '{}' as {}",
        SaveTariff::full_name(),
        payload.name,
        package_type.code()
    );

    match api.create_tariff(payload).await {
        Ok(tariff_id) => {
            bridge.haptic(HapticKind::Success);
            Ok(SaveTariffResponse {
                tariff_id,
                package_type,
            })
        }
        Err(err) => {
            tracing::error!("tariff create failed: {}", err);
            bridge.show_alert("Не удалось сохранить тариф");
            bridge.haptic(HapticKind::Error);
            Err(err.into())
        }
    }
}
