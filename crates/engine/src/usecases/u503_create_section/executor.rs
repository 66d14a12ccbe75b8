//! Executor для UseCase создания секции.
//!
//! Последовательность зависимых записей без транзакции: секция, затем её
//! группы, затем занятия каждой группы. Компенсации нет — сбой на середине
//! оставляет уже созданное на бэкенде, отчёт перечисляет зафиксированные
//! шаги.

use uuid::Uuid;

use contracts::domain::a004_section::aggregate::{GenerateLessonsRequest, NewSection};
use contracts::usecases::common::{UseCaseError, UseCaseMetadata, UseCaseResult};
use contracts::usecases::u503_create_section::{
    CreateSection, CreateSectionReport, CreateSectionRequest, StepOutcome, StepReport,
};

use crate::domain::a006_schedule::builder;
use crate::shared::api::PricingApi;
use crate::shared::telegram::{HapticKind, TelegramBridge};

/// Создать секцию с группами и расписанием занятий.
///
/// Расписание строится легаси-вариантом построителя (с приведением
/// длительности), как того ждёт эндпоинт генерации занятий.
pub async fn execute(
    api: &dyn PricingApi,
    bridge: &dyn TelegramBridge,
    request: &CreateSectionRequest,
) -> UseCaseResult<CreateSectionReport> {
    request.validate().map_err(UseCaseError::validation)?;

    let session_id = Uuid::new_v4();
    tracing::info!(
        "{}: session {} for club {} with {} group(s)",
        CreateSection::full_name(),
        session_id,
        request.club_id,
        request.groups.len()
    );

    let schedule = builder::build(&request.schedule_rows, request.valid_from, request.valid_until);
    let mut report = CreateSectionReport {
        session_id,
        section_id: None,
        steps: Vec::new(),
        completed: false,
    };

    let section = NewSection {
        club_id: request.club_id,
        name: request.name.clone(),
    };
    let section_id = match api.create_section(section).await {
        Ok(section_id) => {
            report.steps.push(StepReport {
                step: "create_section".into(),
                outcome: StepOutcome::Committed,
            });
            section_id
        }
        Err(err) => {
            tracing::error!("section create failed: {}", err);
            report.steps.push(StepReport {
                step: "create_section".into(),
                outcome: StepOutcome::Failed(err.to_string()),
            });
            bridge.show_alert("Не удалось создать секцию");
            bridge.haptic(HapticKind::Error);
            return Ok(report);
        }
    };
    report.section_id = Some(section_id);

    for group in &request.groups {
        let group_id = match api.create_group(section_id, group.clone()).await {
            Ok(group_id) => {
                report.steps.push(StepReport {
                    step: format!("create_group:{}", group.name),
                    outcome: StepOutcome::Committed,
                });
                group_id
            }
            Err(err) => {
                tracing::error!("group create failed for '{}': {}", group.name, err);
                report.steps.push(StepReport {
                    step: format!("create_group:{}", group.name),
                    outcome: StepOutcome::Failed(err.to_string()),
                });
                bridge.show_alert("Секция создана не полностью");
                bridge.haptic(HapticKind::Error);
                return Ok(report);
            }
        };

        let lessons = GenerateLessonsRequest {
            group_id,
            schedule: schedule.clone(),
        };
        if let Err(err) = api.generate_lessons(lessons).await {
            tracing::error!("lesson generation failed for group {}: {}", group_id, err);
            report.steps.push(StepReport {
                step: format!("generate_lessons:{}", group.name),
                outcome: StepOutcome::Failed(err.to_string()),
            });
            bridge.show_alert("Секция создана не полностью");
            bridge.haptic(HapticKind::Error);
            return Ok(report);
        }
        report.steps.push(StepReport {
            step: format!("generate_lessons:{}", group.name),
            outcome: StepOutcome::Committed,
        });
    }

    report.completed = true;
    bridge.haptic(HapticKind::Success);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use contracts::domain::a004_section::aggregate::{NewGroup, Section};
    use contracts::domain::a005_tariff::aggregate::CreateTariffRequest;
    use contracts::domain::a006_schedule::aggregate::ScheduleRow;

    use crate::shared::api::ApiError;
    use crate::shared::telegram::NullBridge;

    use super::*;

    #[derive(Default)]
    struct FakePricingApi {
        failing_group: Option<String>,
        created_groups: Mutex<Vec<String>>,
        lesson_requests: Mutex<Vec<i64>>,
    }

    #[async_trait]
    impl PricingApi for FakePricingApi {
        async fn get_sections(&self) -> Result<Vec<Section>, ApiError> {
            Ok(vec![])
        }

        async fn create_section(&self, _section: NewSection) -> Result<i64, ApiError> {
            Ok(500)
        }

        async fn create_group(&self, _section_id: i64, group: NewGroup) -> Result<i64, ApiError> {
            if self.failing_group.as_deref() == Some(group.name.as_str()) {
                return Err(ApiError::Http { status: 500 });
            }
            let mut created = self.created_groups.lock().unwrap();
            created.push(group.name.clone());
            Ok(600 + created.len() as i64)
        }

        async fn generate_lessons(&self, request: GenerateLessonsRequest) -> Result<(), ApiError> {
            self.lesson_requests.lock().unwrap().push(request.group_id);
            Ok(())
        }

        async fn create_tariff(&self, _request: CreateTariffRequest) -> Result<i64, ApiError> {
            Err(ApiError::Rejected("not supported by fake".into()))
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn group(name: &str) -> NewGroup {
        NewGroup {
            name: name.to_string(),
            level: None,
            capacity: Some(12),
        }
    }

    fn request() -> CreateSectionRequest {
        CreateSectionRequest {
            club_id: 1,
            name: "Йога".into(),
            groups: vec![group("Старшая"), group("Младшая")],
            schedule_rows: vec![ScheduleRow {
                day: "Понедельник".into(),
                start: "10:00".into(),
                end: "11:00".into(),
            }],
            valid_from: date(2025, 9, 1),
            valid_until: date(2025, 11, 30),
        }
    }

    #[tokio::test]
    async fn happy_path_commits_all_steps() {
        let api = FakePricingApi::default();
        let report = execute(&api, &NullBridge, &request()).await.unwrap();

        assert!(report.completed);
        assert_eq!(report.section_id, Some(500));
        // секция + 2 группы + 2 генерации занятий
        assert_eq!(report.committed_steps(), 5);
        assert_eq!(*api.lesson_requests.lock().unwrap(), vec![601, 602]);
    }

    #[tokio::test]
    async fn failure_midway_keeps_earlier_steps_committed() {
        let api = FakePricingApi {
            failing_group: Some("Младшая".into()),
            ..Default::default()
        };
        let report = execute(&api, &NullBridge, &request()).await.unwrap();

        assert!(!report.completed);
        assert_eq!(report.section_id, Some(500));
        // секция, первая группа и её занятия зафиксированы
        assert_eq!(report.committed_steps(), 3);
        let failure = report.first_failure().unwrap();
        assert_eq!(failure.step, "create_group:Младшая");
        // после сбоя новые шаги не выполнялись
        assert_eq!(*api.created_groups.lock().unwrap(), vec!["Старшая"]);
    }

    #[tokio::test]
    async fn invalid_form_blocks_any_network_step() {
        let api = FakePricingApi::default();
        let mut bad = request();
        bad.groups.clear();

        let err = execute(&api, &NullBridge, &bad).await.unwrap_err();
        assert!(err.is_validation());
        assert!(api.created_groups.lock().unwrap().is_empty());
    }
}
