//! Executor для UseCase приглашения сотрудника.

use contracts::domain::a003_invitation::aggregate::CreateInvitationRequest;
use contracts::usecases::common::{UseCaseError, UseCaseMetadata, UseCaseResult};
use contracts::usecases::u501_invite_staff::{
    ClubInviteResult, InviteStaff, InviteStaffReport, InviteStaffRequest,
};

use crate::shared::api::StaffApi;
use crate::shared::phone::validate_phone;
use crate::shared::telegram::{HapticKind, TelegramBridge};

/// Создать приглашения в каждый выбранный клуб.
///
/// Валидация формы выполняется до первого сетевого вызова: невалидный
/// запрос не создаёт ничего. Дальше клубы обходятся по порядку; сбой в
/// одном клубе фиксируется в отчёте и не отменяет приглашения остальных.
pub async fn execute(
    api: &dyn StaffApi,
    bridge: &dyn TelegramBridge,
    request: &InviteStaffRequest,
) -> UseCaseResult<InviteStaffReport> {
    request.validate().map_err(UseCaseError::validation)?;
    validate_phone(&request.phone_number).map_err(UseCaseError::validation)?;

    tracing::info!(
        "{}: inviting {} to {} club(s)",
        InviteStaff::full_name(),
        request.phone_number,
        request.club_ids.len()
    );

    let mut results = Vec::with_capacity(request.club_ids.len());
    for &club_id in &request.club_ids {
        let payload = CreateInvitationRequest {
            phone_number: request.phone_number.trim().to_string(),
            role: request.role,
        };
        match api.create_invitation(club_id, payload).await {
            Ok(created) => results.push(ClubInviteResult {
                club_id,
                invitation_id: Some(created.id),
                error: None,
            }),
            Err(err) => {
                tracing::error!("invitation create failed for club {}: {}", club_id, err);
                results.push(ClubInviteResult {
                    club_id,
                    invitation_id: None,
                    error: Some(err.to_string()),
                });
            }
        }
    }

    let report = InviteStaffReport { results };
    if report.all_failed() {
        bridge.show_alert("Не удалось создать приглашения");
        bridge.haptic(HapticKind::Error);
    } else if report.created_count() < report.results.len() {
        bridge.show_alert("Приглашения созданы не во всех клубах");
        bridge.haptic(HapticKind::Warning);
    } else {
        bridge.haptic(HapticKind::Success);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use contracts::domain::a001_club::aggregate::ClubWithRole;
    use contracts::domain::a002_staff_member::aggregate::StaffMemberRecord;
    use contracts::domain::a003_invitation::aggregate::InvitationRecord;
    use contracts::enums::{InvitationStatus, StaffRole};

    use crate::shared::api::ApiError;
    use crate::shared::telegram::NullBridge;

    use super::*;

    #[derive(Default)]
    struct FakeStaffApi {
        calls: Mutex<Vec<i64>>,
        failing_clubs: Vec<i64>,
    }

    #[async_trait]
    impl StaffApi for FakeStaffApi {
        async fn get_staff_members(&self) -> Result<Vec<StaffMemberRecord>, ApiError> {
            Ok(vec![])
        }

        async fn get_club_invitations(
            &self,
            _club_id: i64,
        ) -> Result<Vec<InvitationRecord>, ApiError> {
            Ok(vec![])
        }

        async fn create_invitation(
            &self,
            club_id: i64,
            request: CreateInvitationRequest,
        ) -> Result<InvitationRecord, ApiError> {
            self.calls.lock().unwrap().push(club_id);
            if self.failing_clubs.contains(&club_id) {
                return Err(ApiError::Http { status: 500 });
            }
            Ok(InvitationRecord {
                id: club_id * 100,
                phone_number: request.phone_number,
                role: request.role,
                club_id,
                status: InvitationStatus::Pending,
                is_used: false,
                created_at: None,
            })
        }

        async fn delete_invitation(&self, _invitation_id: i64) -> Result<(), ApiError> {
            Ok(())
        }

        async fn change_role(
            &self,
            _club_id: i64,
            _user_id: i64,
            _role: StaffRole,
        ) -> Result<(), ApiError> {
            Ok(())
        }

        async fn remove_member(&self, _club_id: i64, _user_id: i64) -> Result<(), ApiError> {
            Ok(())
        }

        async fn get_clubs_with_role(&self) -> Result<Vec<ClubWithRole>, ApiError> {
            Ok(vec![])
        }
    }

    fn request(clubs: &[i64]) -> InviteStaffRequest {
        InviteStaffRequest {
            first_name: "Анна".into(),
            last_name: "Иванова".into(),
            phone_number: "+7 700 111 22 33".into(),
            role: StaffRole::Coach,
            club_ids: clubs.to_vec(),
        }
    }

    #[tokio::test]
    async fn validation_failure_blocks_network_calls() {
        let api = FakeStaffApi::default();
        let mut bad = request(&[1]);
        bad.phone_number = "123".into();

        let err = execute(&api, &NullBridge, &bad).await.unwrap_err();
        assert!(err.is_validation());
        assert!(api.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn creates_invitation_per_club() {
        let api = FakeStaffApi::default();
        let report = execute(&api, &NullBridge, &request(&[1, 2])).await.unwrap();

        assert_eq!(report.created_count(), 2);
        assert_eq!(*api.calls.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn one_club_failure_keeps_other_invitations() {
        let api = FakeStaffApi {
            failing_clubs: vec![1],
            ..Default::default()
        };
        let report = execute(&api, &NullBridge, &request(&[1, 2])).await.unwrap();

        assert_eq!(report.created_count(), 1);
        assert!(!report.all_failed());
        let failed: HashMap<i64, bool> = report
            .results
            .iter()
            .map(|result| (result.club_id, result.error.is_some()))
            .collect();
        assert!(failed[&1]);
        assert!(!failed[&2]);
    }
}
