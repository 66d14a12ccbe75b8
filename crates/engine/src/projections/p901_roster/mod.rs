//! Сведение ростера сотрудников (p901).
//!
//! Два независимых источника — подтверждённые участники команды и ожидающие
//! приглашения по клубам — сводятся в один список [`Employee`], по одному на
//! нормализованный телефонный ключ. Проекция пересчитывается заново при
//! каждой загрузке данных; инкрементальных мутаций между загрузками нет.

use std::collections::HashMap;

use contracts::domain::a002_staff_member::aggregate::StaffMemberRecord;
use contracts::domain::a003_invitation::aggregate::InvitationRecord;
use contracts::enums::{ParticipationStatus, StaffRole};
use contracts::projections::p901_roster::{ClubRoleState, Employee, RoleOrigin};

use crate::shared::api::{ApiError, StaffApi};
use crate::shared::phone::identity_key;

/// Загрузить и свести ростер.
///
/// Участники и список клубов обязательны; сбой загрузки приглашений одного
/// клуба не срывает сведение — такой клуб считается клубом без приглашений.
pub async fn load(api: &dyn StaffApi) -> Result<Vec<Employee>, ApiError> {
    let members = api.get_staff_members().await?;
    let clubs = api.get_clubs_with_role().await?;

    let mut invitations_by_club: HashMap<i64, Vec<InvitationRecord>> = HashMap::new();
    for club_role in &clubs {
        let club_id = club_role.club.id;
        match api.get_club_invitations(club_id).await {
            Ok(invitations) => {
                invitations_by_club.insert(club_id, invitations);
            }
            Err(err) => {
                tracing::warn!("invitations fetch failed for club {}: {}", club_id, err);
            }
        }
    }

    Ok(merge(&members, &invitations_by_club))
}

/// Свести участников и приглашения в список сотрудников.
///
/// Чистая функция: повторный вызов на тех же входных данных даёт тот же
/// результат. Правила:
/// - запись членства даёт активную роль в клубе, если её флаг активности
///   не снят, иначе ожидающую;
/// - открытое приглашение добавляет ожидающую роль только в клуб, где у
///   сотрудника ещё нет записи — при конфликте за один клуб членство
///   побеждает устаревшее приглашение;
/// - приглашения на телефон без записи членства копятся в одного
///   сотрудника-«призрака» с пустым именем.
pub fn merge(
    members: &[StaffMemberRecord],
    invitations_by_club: &HashMap<i64, Vec<InvitationRecord>>,
) -> Vec<Employee> {
    let mut employees: Vec<Employee> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for member in members {
        let key = identity_key(&member.phone_number);
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                employees.push(employee_from_member(key.clone(), member));
                index.insert(key, employees.len() - 1);
                employees.len() - 1
            }
        };

        let employee = &mut employees[slot];
        for entry in &member.clubs_and_roles {
            if employee.role_in_club(entry.club_id).is_some() {
                continue;
            }
            employee.club_roles.push(ClubRoleState {
                club_id: entry.club_id,
                role: entry.role,
                status: if entry.is_active {
                    ParticipationStatus::Active
                } else {
                    ParticipationStatus::Pending
                },
                origin: RoleOrigin::Membership,
                invitation_id: None,
            });
        }
    }

    // Клубы в возрастающем порядке: выбор «первого» приглашения призрака
    // детерминирован независимо от порядка hash-карты.
    let mut club_ids: Vec<i64> = invitations_by_club.keys().copied().collect();
    club_ids.sort_unstable();

    for club_id in club_ids {
        for invitation in &invitations_by_club[&club_id] {
            if !invitation.is_open() {
                continue;
            }
            let key = identity_key(&invitation.phone_number);
            let slot = match index.get(&key) {
                Some(&slot) => slot,
                None => {
                    employees.push(ghost_from_invitation(key.clone(), invitation));
                    index.insert(key, employees.len() - 1);
                    employees.len() - 1
                }
            };

            let employee = &mut employees[slot];
            if employee.role_in_club(invitation.club_id).is_some() {
                // Членство (или более раннее приглашение) уже занимает
                // этот клуб — приглашение в слот не попадает.
                continue;
            }
            employee.club_roles.push(ClubRoleState {
                club_id: invitation.club_id,
                role: invitation.role,
                status: ParticipationStatus::Pending,
                origin: RoleOrigin::Invitation,
                invitation_id: Some(invitation.id),
            });
        }
    }

    for employee in &mut employees {
        employee.recalc();
    }
    employees
}

/// Оптимистичное удаление приглашения из уже загруженного списка.
///
/// Убирает только записи ролей с совпавшим id приглашения; сам сотрудник
/// (в том числе оставшийся без ролей «призрак») исчезает из ростера лишь
/// при следующем сведении.
pub fn remove_invitation_entry(employees: &mut [Employee], invitation_id: i64) {
    for employee in employees.iter_mut() {
        let before = employee.club_roles.len();
        employee
            .club_roles
            .retain(|state| state.invitation_id != Some(invitation_id));
        if employee.club_roles.len() != before {
            if employee.invitation_id == Some(invitation_id) {
                employee.invitation_id = None;
            }
            employee.recalc();
        }
    }
}

fn employee_from_member(key: String, member: &StaffMemberRecord) -> Employee {
    Employee {
        identity_key: key,
        user_id: Some(member.id),
        first_name: member.first_name.clone().unwrap_or_default(),
        last_name: member.last_name.clone().unwrap_or_default(),
        phone: member.phone_number.clone(),
        username: member.username.clone(),
        photo_url: member.photo_url.clone(),
        primary_role: StaffRole::Coach,
        club_ids: Vec::new(),
        club_roles: Vec::new(),
        status: ParticipationStatus::Pending,
        invitation_id: None,
        created_at: member.created_at,
    }
}

fn ghost_from_invitation(key: String, invitation: &InvitationRecord) -> Employee {
    Employee {
        identity_key: key,
        user_id: None,
        first_name: String::new(),
        last_name: String::new(),
        phone: invitation.phone_number.clone(),
        username: None,
        photo_url: None,
        primary_role: StaffRole::Coach,
        club_ids: Vec::new(),
        club_roles: Vec::new(),
        status: ParticipationStatus::Pending,
        invitation_id: Some(invitation.id),
        created_at: invitation.created_at,
    }
}
