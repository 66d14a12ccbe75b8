use crate::usecases::common::UseCaseMetadata;

/// Изменение роли и удаление сотрудника действуют простыми параметрами
/// (клуб, пользователь, роль) — отдельных DTO у сценария нет.
pub struct ManageStaff;

impl UseCaseMetadata for ManageStaff {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "manage_staff"
    }

    fn display_name() -> &'static str {
        "Управление сотрудником"
    }

    fn description() -> &'static str {
        "Смена роли в клубе, удаление из клуба и отмена приглашения"
    }
}
