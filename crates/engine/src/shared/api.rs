//! Порты REST-бэкенда.
//!
//! Транспорт (HTTP-клиент, авторизация запросов) живёт на стороне
//! веб-приложения; ядро видит только контракты запрос/ответ.

use async_trait::async_trait;
use thiserror::Error;

use contracts::domain::a001_club::aggregate::ClubWithRole;
use contracts::domain::a002_staff_member::aggregate::StaffMemberRecord;
use contracts::domain::a003_invitation::aggregate::{CreateInvitationRequest, InvitationRecord};
use contracts::domain::a004_section::aggregate::{
    GenerateLessonsRequest, NewGroup, NewSection, Section,
};
use contracts::domain::a005_tariff::aggregate::CreateTariffRequest;
use contracts::enums::StaffRole;
use contracts::usecases::common::UseCaseError;

/// Ошибки обращения к бэкенду
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend returned status {status}")]
    Http { status: u16 },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Backend rejected request: {0}")]
    Rejected(String),
}

impl From<ApiError> for UseCaseError {
    fn from(err: ApiError) -> Self {
        UseCaseError::external("Не удалось выполнить запрос к серверу")
            .with_details(err.to_string())
    }
}

/// Эндпоинты управления персоналом
#[async_trait]
pub trait StaffApi: Send + Sync {
    /// Подтверждённые участники команды по всем видимым клубам
    async fn get_staff_members(&self) -> Result<Vec<StaffMemberRecord>, ApiError>;

    /// Приглашения одного клуба
    async fn get_club_invitations(&self, club_id: i64) -> Result<Vec<InvitationRecord>, ApiError>;

    async fn create_invitation(
        &self,
        club_id: i64,
        request: CreateInvitationRequest,
    ) -> Result<InvitationRecord, ApiError>;

    async fn delete_invitation(&self, invitation_id: i64) -> Result<(), ApiError>;

    async fn change_role(
        &self,
        club_id: i64,
        user_id: i64,
        role: StaffRole,
    ) -> Result<(), ApiError>;

    async fn remove_member(&self, club_id: i64, user_id: i64) -> Result<(), ApiError>;

    /// Клубы, видимые текущему пользователю, с его ролью в каждом
    async fn get_clubs_with_role(&self) -> Result<Vec<ClubWithRole>, ApiError>;
}

/// Эндпоинты секций, групп и тарифов
#[async_trait]
pub trait PricingApi: Send + Sync {
    /// Секции всех клубов вместе с группами — источник иерархии
    /// для зоны доступа тарифа
    async fn get_sections(&self) -> Result<Vec<Section>, ApiError>;

    /// Возвращает id созданной секции
    async fn create_section(&self, section: NewSection) -> Result<i64, ApiError>;

    /// Возвращает id созданной группы
    async fn create_group(&self, section_id: i64, group: NewGroup) -> Result<i64, ApiError>;

    async fn generate_lessons(&self, request: GenerateLessonsRequest) -> Result<(), ApiError>;

    /// Возвращает id созданного тарифа
    async fn create_tariff(&self, request: CreateTariffRequest) -> Result<i64, ApiError>;
}
