//! Мост Telegram WebApp.
//!
//! Хост-объект Telegram (алерты, хаптика, identity-данные) передаётся в ядро
//! как внедряемая capability, а не как глобальное состояние: так сценарии
//! тестируются с подменным мостом.

/// Вид тактильного отклика
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticKind {
    Success,
    Warning,
    Error,
}

/// Возможности Telegram WebApp, доступные ядру
pub trait TelegramBridge: Send + Sync {
    /// Показать модальное сообщение пользователю
    fn show_alert(&self, message: &str);

    /// Тактильный отклик
    fn haptic(&self, kind: HapticKind);

    /// Сырая строка initData Telegram (identity текущего пользователя);
    /// None вне Telegram-окружения
    fn init_data(&self) -> Option<String>;
}

/// Мост-заглушка для headless-запусков
#[derive(Debug, Default)]
pub struct NullBridge;

impl TelegramBridge for NullBridge {
    fn show_alert(&self, _message: &str) {}

    fn haptic(&self, _kind: HapticKind) {}

    fn init_data(&self) -> Option<String> {
        None
    }
}
