//! Выбор зоны доступа тарифа: клуб ⊇ секция ⊇ группа.
//!
//! Состояние — три явных набора выбранных id плюс неизменяемый индекс
//! вложенности. «Полная выбранность» узла — чистая функция от наборов и
//! предков, а не хранимый флаг: один источник истины на узел.

use std::collections::{HashMap, HashSet};

use contracts::domain::a004_section::aggregate::Section;
use contracts::enums::PackageType;
use contracts::usecases::common::{UseCaseError, UseCaseResult};

/// Индекс вложенности клуб → секции → группы.
/// Строится один раз из ответа эндпоинта секций и не меняется
/// за время жизни формы.
#[derive(Debug, Clone, Default)]
pub struct ContainmentIndex {
    sections_by_club: HashMap<i64, Vec<i64>>,
    groups_by_section: HashMap<i64, Vec<i64>>,
    club_of_section: HashMap<i64, i64>,
}

impl ContainmentIndex {
    pub fn build(sections: &[Section]) -> Self {
        let mut index = ContainmentIndex::default();
        for section in sections {
            index
                .sections_by_club
                .entry(section.club_id)
                .or_default()
                .push(section.id);
            index.club_of_section.insert(section.id, section.club_id);
            index
                .groups_by_section
                .entry(section.id)
                .or_default()
                .extend(section.groups.iter().map(|group| group.id));
        }
        index
    }

    pub fn sections_of(&self, club_id: i64) -> &[i64] {
        self.sections_by_club
            .get(&club_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn groups_of(&self, section_id: i64) -> &[i64] {
        self.groups_by_section
            .get(&section_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn club_of(&self, section_id: i64) -> Option<i64> {
        self.club_of_section.get(&section_id).copied()
    }
}

/// Состояние выбора зоны доступа. Создаётся пустым при открытии формы
/// тарифа и отбрасывается при закрытии/сохранении.
#[derive(Debug, Clone)]
pub struct AccessScopeSelector {
    index: ContainmentIndex,
    selected_clubs: HashSet<i64>,
    selected_sections: HashSet<i64>,
    selected_groups: HashSet<i64>,
}

impl AccessScopeSelector {
    pub fn new(index: ContainmentIndex) -> Self {
        Self {
            index,
            selected_clubs: HashSet::new(),
            selected_sections: HashSet::new(),
            selected_groups: HashSet::new(),
        }
    }

    /// Переключить выбор клуба.
    ///
    /// Выбор клуба явно записывает в наборы и все его секции и группы —
    /// после массового выбора отдельные потомки переключаются без
    /// пересчёта предка. Снятие каскадно очищает потомков.
    pub fn toggle_club(&mut self, club_id: i64) {
        if self.selected_clubs.remove(&club_id) {
            for section_id in self.index.sections_of(club_id).to_vec() {
                self.selected_sections.remove(&section_id);
                for group_id in self.index.groups_of(section_id) {
                    self.selected_groups.remove(group_id);
                }
            }
        } else {
            self.selected_clubs.insert(club_id);
            for section_id in self.index.sections_of(club_id).to_vec() {
                self.selected_sections.insert(section_id);
                self.selected_groups
                    .extend(self.index.groups_of(section_id).iter().copied());
            }
        }
    }

    /// Переключить выбор секции. Пока выбран родительский клуб, вызов
    /// игнорируется: покрытие сверху уже полное, UI дизейблит контрол.
    pub fn toggle_section(&mut self, section_id: i64) {
        if let Some(club_id) = self.index.club_of(section_id) {
            if self.selected_clubs.contains(&club_id) {
                return;
            }
        }
        if self.selected_sections.remove(&section_id) {
            for group_id in self.index.groups_of(section_id) {
                self.selected_groups.remove(group_id);
            }
        } else {
            self.selected_sections.insert(section_id);
            self.selected_groups
                .extend(self.index.groups_of(section_id).iter().copied());
        }
    }

    /// Переключить выбор группы. Игнорируется, пока выбран родительский
    /// клуб или секция.
    pub fn toggle_group(&mut self, group_id: i64, parent_section_id: i64) {
        if self.selected_sections.contains(&parent_section_id) {
            return;
        }
        if let Some(club_id) = self.index.club_of(parent_section_id) {
            if self.selected_clubs.contains(&club_id) {
                return;
            }
        }
        if !self.selected_groups.remove(&group_id) {
            self.selected_groups.insert(group_id);
        }
    }

    pub fn is_club_fully_selected(&self, club_id: i64) -> bool {
        self.selected_clubs.contains(&club_id)
    }

    /// Секция выбрана явно или покрыта выбранным клубом
    pub fn is_section_fully_selected(&self, section_id: i64) -> bool {
        if self.selected_sections.contains(&section_id) {
            return true;
        }
        self.index
            .club_of(section_id)
            .is_some_and(|club_id| self.selected_clubs.contains(&club_id))
    }

    /// Группа выбрана явно или покрыта выбранной секцией/клубом
    pub fn is_group_selected(&self, group_id: i64, parent_section_id: i64) -> bool {
        self.selected_groups.contains(&group_id)
            || self.is_section_fully_selected(parent_section_id)
    }

    /// Тип пакета по текущему выбору. Вычисляется в момент отправки формы
    /// и нигде не кэшируется.
    pub fn package_type(&self) -> PackageType {
        if !self.selected_clubs.is_empty() {
            PackageType::FullClub
        } else if !self.selected_sections.is_empty() && self.selected_groups.is_empty() {
            PackageType::FullSection
        } else if self.selected_groups.len() == 1 {
            PackageType::SingleGroup
        } else {
            PackageType::MultipleGroups
        }
    }

    /// Пустая зона доступа — невалидный тариф
    pub fn validate(&self) -> UseCaseResult<()> {
        if self.selected_clubs.is_empty()
            && self.selected_sections.is_empty()
            && self.selected_groups.is_empty()
        {
            return Err(UseCaseError::validation(
                "Выберите хотя бы один клуб, секцию или группу",
            ));
        }
        Ok(())
    }

    pub fn selected_clubs(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.selected_clubs.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn selected_sections(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.selected_sections.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn selected_groups(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.selected_groups.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use contracts::domain::a004_section::aggregate::TrainingGroup;

    use super::*;

    fn group(id: i64) -> TrainingGroup {
        TrainingGroup {
            id,
            name: format!("Группа {}", id),
            level: None,
            capacity: None,
        }
    }

    fn section(id: i64, club_id: i64, groups: &[i64]) -> Section {
        Section {
            id,
            club_id,
            name: Some(format!("Секция {}", id)),
            groups: groups.iter().copied().map(group).collect(),
        }
    }

    fn selector() -> AccessScopeSelector {
        // клуб 1: секции 10 (группы 100, 101) и 11 (группа 110); клуб 2: секция 20
        let sections = vec![
            section(10, 1, &[100, 101]),
            section(11, 1, &[110]),
            section(20, 2, &[200]),
        ];
        AccessScopeSelector::new(ContainmentIndex::build(&sections))
    }

    #[test]
    fn selecting_club_cascades_to_descendants() {
        let mut sel = selector();
        sel.toggle_club(1);

        assert_eq!(sel.selected_clubs(), vec![1]);
        assert_eq!(sel.selected_sections(), vec![10, 11]);
        assert_eq!(sel.selected_groups(), vec![100, 101, 110]);
        assert!(sel.is_group_selected(100, 10));
        assert!(sel.is_section_fully_selected(11));
        assert!(!sel.is_section_fully_selected(20));
    }

    #[test]
    fn deselecting_club_cascades_down() {
        let mut sel = selector();
        sel.toggle_club(1);
        sel.toggle_club(1);

        assert!(sel.selected_clubs().is_empty());
        assert!(sel.selected_sections().is_empty());
        assert!(sel.selected_groups().is_empty());
        assert!(!sel.is_group_selected(100, 10));
    }

    #[test]
    fn section_toggle_cascades_to_groups_only() {
        let mut sel = selector();
        sel.toggle_section(10);

        assert!(sel.selected_clubs().is_empty());
        assert_eq!(sel.selected_sections(), vec![10]);
        assert_eq!(sel.selected_groups(), vec![100, 101]);

        sel.toggle_section(10);
        assert!(sel.selected_sections().is_empty());
        assert!(sel.selected_groups().is_empty());
    }

    #[test]
    fn child_toggle_is_ignored_under_selected_ancestor() {
        let mut sel = selector();
        sel.toggle_club(1);

        sel.toggle_section(10);
        sel.toggle_group(100, 10);

        // покрытие сверху осталось полным
        assert!(sel.is_section_fully_selected(10));
        assert!(sel.is_group_selected(100, 10));
        assert_eq!(sel.selected_sections(), vec![10, 11]);
        assert_eq!(sel.selected_groups(), vec![100, 101, 110]);
    }

    #[test]
    fn ancestor_coverage_wins_over_missing_explicit_entry() {
        let mut sel = selector();
        sel.selected_clubs.insert(1);

        // секции/группы клуба не записаны явно, но покрыты предком
        assert!(sel.is_section_fully_selected(10));
        assert!(sel.is_group_selected(101, 10));
    }

    #[test]
    fn package_type_priority_order() {
        let mut sel = selector();

        sel.toggle_group(100, 10);
        assert_eq!(sel.package_type(), PackageType::SingleGroup);

        sel.toggle_group(101, 10);
        assert_eq!(sel.package_type(), PackageType::MultipleGroups);

        // выбранный клуб старше любых секций и групп
        sel.toggle_club(2);
        assert_eq!(sel.package_type(), PackageType::FullClub);
    }

    #[test]
    fn groupless_section_classifies_as_full_section() {
        let sections = vec![section(30, 3, &[])];
        let mut sel = AccessScopeSelector::new(ContainmentIndex::build(&sections));

        sel.toggle_section(30);
        assert_eq!(sel.package_type(), PackageType::FullSection);
    }

    #[test]
    fn empty_selection_fails_validation() {
        let sel = selector();
        let err = sel.validate().unwrap_err();
        assert!(err.is_validation());
    }
}
