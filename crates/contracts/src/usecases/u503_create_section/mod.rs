pub mod request;
pub mod response;

pub use request::CreateSectionRequest;
pub use response::{CreateSectionReport, StepOutcome, StepReport};

use crate::usecases::common::UseCaseMetadata;

pub struct CreateSection;

impl UseCaseMetadata for CreateSection {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "create_section"
    }

    fn display_name() -> &'static str {
        "Создание секции"
    }

    fn description() -> &'static str {
        "Создание секции, её групп и генерация занятий по недельному шаблону"
    }
}
