//! Контракты между веб-приложением и удалённым REST-бэкендом сети клубов.
//!
//! Crate не содержит транспортного кода: только типы полезной нагрузки
//! (domain), перечисления (enums), производные read-модели (projections)
//! и запросы/отчёты сценариев (usecases).

pub mod domain;
pub mod enums;
pub mod projections;
pub mod usecases;
