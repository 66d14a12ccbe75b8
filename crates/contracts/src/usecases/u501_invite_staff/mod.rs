pub mod request;
pub mod response;

pub use request::InviteStaffRequest;
pub use response::{ClubInviteResult, InviteStaffReport};

use crate::usecases::common::UseCaseMetadata;

pub struct InviteStaff;

impl UseCaseMetadata for InviteStaff {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "invite_staff"
    }

    fn display_name() -> &'static str {
        "Приглашение сотрудника"
    }

    fn description() -> &'static str {
        "Создание приглашений сотрудника в выбранные клубы по номеру телефона"
    }
}
