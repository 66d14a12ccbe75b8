//! Доменное ядро веб-приложения администрирования сети клубов.
//!
//! Crate не зависит от UI-фреймворка и транспорта: REST-бэкенд абстрагирован
//! портами [`shared::api::StaffApi`] и [`shared::api::PricingApi`], мост
//! Telegram WebApp — capability-интерфейсом [`shared::telegram::TelegramBridge`].
//! Вызывающая сторона (веб-интерфейс) получает отсюда сведённый ростер
//! сотрудников, проверки полномочий, состояние выбора зоны доступа тарифа
//! и исполнителей сценариев.

pub mod domain;
pub mod projections;
pub mod shared;
pub mod usecases;
