//! Полномочия над записями ролей сотрудников.
//!
//! Правила действуют в пределах одного клуба: актор с ролью в клубе
//! действует на запись роли цели в том же клубе.

use contracts::enums::StaffRole;

/// Управляющее действие над ролью сотрудника в клубе
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffAction {
    ChangeRole,
    Remove,
}

/// Может ли актор выполнить действие над целью в данном клубе.
///
/// - владелец управляет кем угодно, кроме другого владельца;
/// - администратор может только удалить тренера;
/// - тренер не управляет никем.
///
/// Отдельный флаг `is_owner` записи роли равносилен роли владельца:
/// проверяются оба признака.
pub fn can_act_on(
    actor_role: StaffRole,
    actor_is_owner: bool,
    target_role: StaffRole,
    action: StaffAction,
) -> bool {
    if actor_is_owner || actor_role == StaffRole::Owner {
        return target_role != StaffRole::Owner;
    }

    match actor_role {
        StaffRole::Admin => action == StaffAction::Remove && target_role == StaffRole::Coach,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_manages_everyone_but_owners() {
        for action in [StaffAction::ChangeRole, StaffAction::Remove] {
            assert!(can_act_on(StaffRole::Owner, false, StaffRole::Admin, action));
            assert!(can_act_on(StaffRole::Owner, false, StaffRole::Coach, action));
            assert!(!can_act_on(StaffRole::Owner, false, StaffRole::Owner, action));
        }
    }

    #[test]
    fn is_owner_flag_grants_owner_authority() {
        // роль на записи — тренер, но флаг владельца выставлен
        assert!(can_act_on(StaffRole::Coach, true, StaffRole::Admin, StaffAction::ChangeRole));
        assert!(!can_act_on(StaffRole::Coach, true, StaffRole::Owner, StaffAction::Remove));
    }

    #[test]
    fn admin_only_removes_coaches() {
        assert!(can_act_on(StaffRole::Admin, false, StaffRole::Coach, StaffAction::Remove));
        assert!(!can_act_on(StaffRole::Admin, false, StaffRole::Coach, StaffAction::ChangeRole));
        assert!(!can_act_on(StaffRole::Admin, false, StaffRole::Admin, StaffAction::Remove));
        assert!(!can_act_on(StaffRole::Admin, false, StaffRole::Owner, StaffAction::Remove));
    }

    #[test]
    fn coach_has_no_authority() {
        for target in StaffRole::all() {
            for action in [StaffAction::ChangeRole, StaffAction::Remove] {
                assert!(!can_act_on(StaffRole::Coach, false, target, action));
            }
        }
    }
}
