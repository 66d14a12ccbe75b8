use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Отчёт о создании секции.
///
/// Шаги выполняются строго по порядку без компенсации: сбой на середине
/// оставляет уже выполненные шаги зафиксированными на бэкенде, отчёт
/// перечисляет, что именно успело завершиться.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSectionReport {
    /// ID сессии выполнения (для логов и диагностики)
    pub session_id: Uuid,
    /// ID созданной секции, если первый шаг прошёл
    pub section_id: Option<i64>,
    pub steps: Vec<StepReport>,
    /// Все шаги завершились успешно
    pub completed: bool,
}

/// Результат одного шага последовательности
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Имя шага, например "create_section" или "create_group:Старшая"
    pub step: String,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// Шаг зафиксирован на бэкенде
    Committed,
    /// Шаг завершился ошибкой; последующие шаги не выполнялись
    Failed(String),
}

impl CreateSectionReport {
    pub fn committed_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.outcome == StepOutcome::Committed)
            .count()
    }

    pub fn first_failure(&self) -> Option<&StepReport> {
        self.steps
            .iter()
            .find(|step| matches!(step.outcome, StepOutcome::Failed(_)))
    }
}
