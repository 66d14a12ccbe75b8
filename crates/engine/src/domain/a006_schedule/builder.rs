//! Построение недельного шаблона занятий из строк формы.
//!
//! Два варианта с разной политикой ошибок:
//! - [`build`] — легаси-путь генерации занятий: некорректная длительность
//!   молча приводится к 60 минутам;
//! - [`build_validated`] — путь сохранения тарифа: некорректная длительность
//!   и завышенный период действия жёстко отклоняются до отправки.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};

use contracts::domain::a006_schedule::aggregate::{LessonSlot, ScheduleRow, WeeklySchedule};
use contracts::enums::Weekday;
use contracts::usecases::common::{UseCaseError, UseCaseResult};

/// Длительность по умолчанию при невычислимой разнице времени, минуты
const FALLBACK_DURATION_MIN: i64 = 60;

/// Жёсткие границы длительности занятия для валидируемого пути, минуты
const MIN_DURATION_MIN: i64 = 30;
const MAX_DURATION_MIN: i64 = 300;

/// Максимальный период действия расписания, дни
const MAX_VALIDITY_DAYS: i64 = 180;

/// Построить недельный шаблон (легаси-вариант).
///
/// Подпись дня проходит через таблицу дней недели; не распознанная подпись
/// попадает в шаблон в нижнем регистре как есть. Длительность — вычитание
/// времени в пределах одних суток; неположительный результат (конец раньше
/// начала, слот через полночь) приводится к 60 минутам. Это намеренное
/// упрощение легаси-пути, а не ошибка.
pub fn build(rows: &[ScheduleRow], valid_from: NaiveDate, valid_until: NaiveDate) -> WeeklySchedule {
    let mut weekly_pattern: HashMap<String, Vec<LessonSlot>> = HashMap::new();

    for row in rows {
        let duration = match wall_clock_duration(&row.start, &row.end) {
            Some(minutes) if minutes > 0 => minutes,
            _ => FALLBACK_DURATION_MIN,
        };
        weekly_pattern
            .entry(day_key(&row.day))
            .or_default()
            .push(LessonSlot {
                time: row.start.clone(),
                duration,
            });
    }

    WeeklySchedule {
        weekly_pattern,
        valid_from,
        valid_until,
    }
}

/// Построить недельный шаблон со строгой валидацией.
///
/// В отличие от легаси-варианта ничего не исправляет: длительность вне
/// 30..=300 минут и период действия длиннее 180 дней (или вывернутый)
/// блокируют отправку формы.
pub fn build_validated(
    rows: &[ScheduleRow],
    valid_from: NaiveDate,
    valid_until: NaiveDate,
) -> UseCaseResult<WeeklySchedule> {
    if valid_until < valid_from {
        return Err(UseCaseError::validation(
            "Дата окончания не может быть раньше даты начала",
        ));
    }
    if (valid_until - valid_from).num_days() > MAX_VALIDITY_DAYS {
        return Err(UseCaseError::validation(
            "Период действия расписания не может превышать 180 дней",
        ));
    }

    for row in rows {
        let duration = wall_clock_duration(&row.start, &row.end).ok_or_else(|| {
            UseCaseError::validation(format!("Некорректное время занятия: {} - {}", row.start, row.end))
        })?;
        if !(MIN_DURATION_MIN..=MAX_DURATION_MIN).contains(&duration) {
            return Err(UseCaseError::validation(
                "Длительность занятия должна быть от 30 минут до 5 часов",
            ));
        }
    }

    Ok(build(rows, valid_from, valid_until))
}

/// Разница "HH:MM"-времён в минутах в пределах одних суток
fn wall_clock_duration(start: &str, end: &str) -> Option<i64> {
    let start = NaiveTime::parse_from_str(start.trim(), "%H:%M").ok()?;
    let end = NaiveTime::parse_from_str(end.trim(), "%H:%M").ok()?;
    Some((end - start).num_minutes())
}

/// Канонический ключ дня; не распознанная подпись — нижний регистр как есть
fn day_key(label: &str) -> String {
    match Weekday::from_label(label) {
        Some(day) => day.key().to_string(),
        None => label.trim().to_lowercase(),
    }
}
