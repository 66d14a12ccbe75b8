//! Executor для UseCase управления сотрудником.
//!
//! Полномочия проверяются до сетевого вызова; локальное состояние ростера
//! продвигается только после подтверждения бэкенда. При отказе бэкенда
//! прежнее состояние сохраняется, пользователю показывается сообщение.

use contracts::domain::a001_club::aggregate::ClubWithRole;
use contracts::enums::StaffRole;
use contracts::projections::p901_roster::{Employee, RoleOrigin};
use contracts::usecases::common::{UseCaseError, UseCaseMetadata, UseCaseResult};
use contracts::usecases::u502_manage_staff::ManageStaff;

use crate::domain::a002_staff_member::permissions::{can_act_on, StaffAction};
use crate::projections::p901_roster::remove_invitation_entry;
use crate::shared::api::StaffApi;
use crate::shared::telegram::{HapticKind, TelegramBridge};

/// Сменить роль сотрудника в клубе актора.
///
/// Переход `active -> active (новая роль)`: запись роли остаётся активной,
/// меняется только роль.
pub async fn change_role(
    api: &dyn StaffApi,
    bridge: &dyn TelegramBridge,
    actor: &ClubWithRole,
    employee: &mut Employee,
    new_role: StaffRole,
) -> UseCaseResult<()> {
    let club_id = actor.club.id;
    let target = employee
        .role_in_club(club_id)
        .ok_or_else(|| UseCaseError::not_found("Сотрудник не состоит в этом клубе"))?;
    if target.origin == RoleOrigin::Invitation {
        // pending-запись переходит в active только принятием приглашения
        return Err(UseCaseError::validation(
            "Роль можно сменить только после принятия приглашения",
        ));
    }
    let target_role = target.role;

    let user_id = employee
        .user_id
        .ok_or_else(|| UseCaseError::internal("Членская запись без id пользователя"))?;

    if !can_act_on(actor.role, actor.is_owner_of_club(), target_role, StaffAction::ChangeRole) {
        return Err(UseCaseError::forbidden("Недостаточно прав для смены роли"));
    }

    tracing::info!(
        "{}: changing role of user {} in club {} to {}",
        ManageStaff::full_name(),
        user_id,
        club_id,
        new_role.code()
    );

    if let Err(err) = api.change_role(club_id, user_id, new_role).await {
        tracing::error!("role change failed: {}", err);
        bridge.show_alert("Не удалось изменить роль сотрудника");
        bridge.haptic(HapticKind::Error);
        return Err(err.into());
    }

    if let Some(state) = employee
        .club_roles
        .iter_mut()
        .find(|state| state.club_id == club_id)
    {
        state.role = new_role;
    }
    employee.recalc();
    bridge.haptic(HapticKind::Success);
    Ok(())
}

/// Удалить сотрудника из клуба актора.
///
/// Подтверждённое членство снимается удалением участника; запись, живущая
/// только приглашением, — отменой приглашения с оптимистичным вычищением
/// из загруженного списка.
pub async fn remove_from_club(
    api: &dyn StaffApi,
    bridge: &dyn TelegramBridge,
    actor: &ClubWithRole,
    employee: &mut Employee,
) -> UseCaseResult<()> {
    let club_id = actor.club.id;
    let target = employee
        .role_in_club(club_id)
        .ok_or_else(|| UseCaseError::not_found("Сотрудник не состоит в этом клубе"))?;
    let target_role = target.role;
    let origin = target.origin;
    let invitation_id = target.invitation_id;

    if !can_act_on(actor.role, actor.is_owner_of_club(), target_role, StaffAction::Remove) {
        return Err(UseCaseError::forbidden("Недостаточно прав для удаления"));
    }

    match origin {
        RoleOrigin::Invitation => {
            let invitation_id = invitation_id
                .ok_or_else(|| UseCaseError::internal("Запись приглашения без id приглашения"))?;

            tracing::info!(
                "{}: cancelling invitation {} in club {}",
                ManageStaff::full_name(),
                invitation_id,
                club_id
            );

            if let Err(err) = api.delete_invitation(invitation_id).await {
                tracing::error!("invitation delete failed: {}", err);
                bridge.show_alert("Не удалось отменить приглашение");
                bridge.haptic(HapticKind::Error);
                return Err(err.into());
            }
            remove_invitation_entry(std::slice::from_mut(employee), invitation_id);
        }
        RoleOrigin::Membership => {
            let user_id = employee
                .user_id
                .ok_or_else(|| UseCaseError::internal("Членская запись без id пользователя"))?;

            tracing::info!(
                "{}: removing user {} from club {}",
                ManageStaff::full_name(),
                user_id,
                club_id
            );

            if let Err(err) = api.remove_member(club_id, user_id).await {
                tracing::error!("member removal failed: {}", err);
                bridge.show_alert("Не удалось удалить сотрудника из клуба");
                bridge.haptic(HapticKind::Error);
                return Err(err.into());
            }
            employee.club_roles.retain(|state| state.club_id != club_id);
            employee.recalc();
        }
    }

    bridge.haptic(HapticKind::Success);
    Ok(())
}
