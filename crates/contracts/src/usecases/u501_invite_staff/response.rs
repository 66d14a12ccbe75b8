use serde::{Deserialize, Serialize};

/// Итог создания приглашений: по одному результату на клуб.
/// Сбой в одном клубе не отменяет приглашения, созданные в других.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteStaffReport {
    pub results: Vec<ClubInviteResult>,
}

/// Результат создания приглашения в отдельном клубе
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubInviteResult {
    pub club_id: i64,
    /// ID созданного приглашения (нужен для последующей отмены)
    pub invitation_id: Option<i64>,
    pub error: Option<String>,
}

impl InviteStaffReport {
    pub fn created_count(&self) -> usize {
        self.results
            .iter()
            .filter(|result| result.invitation_id.is_some())
            .count()
    }

    pub fn all_failed(&self) -> bool {
        !self.results.is_empty() && self.created_count() == 0
    }
}
