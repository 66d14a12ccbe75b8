use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Строка расписания в том виде, как её вводит форма:
/// подпись дня недели и время начала/окончания "HH:MM".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub day: String,
    pub start: String,
    pub end: String,
}

/// Слот недельного шаблона: время начала и длительность в минутах
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSlot {
    pub time: String,
    pub duration: i64,
}

/// Недельный шаблон занятий в формате бэкенда:
/// канонический ключ дня -> слоты этого дня.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub weekly_pattern: HashMap<String, Vec<LessonSlot>>,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
}
