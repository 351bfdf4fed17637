use alimento_recipe::{Catalog, Nutrition};
use alimento_shared::Day;
use alimento_shared::mealplan::MealType;
use serde::{Deserialize, Serialize};

/// Breakfast, lunch and dinner assignment for a single day.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MealPlanEntry {
    pub day: Day,
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
}

impl MealPlanEntry {
    /// Entry with every slot empty.
    pub fn empty(day: impl Into<Day>) -> Self {
        Self {
            day: day.into(),
            breakfast: None,
            lunch: None,
            dinner: None,
        }
    }

    pub fn slot(&self, meal_type: MealType) -> Option<&str> {
        match meal_type {
            MealType::Breakfast => self.breakfast.as_deref(),
            MealType::Lunch => self.lunch.as_deref(),
            MealType::Dinner => self.dinner.as_deref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, meal_type: MealType) -> &mut Option<String> {
        match meal_type {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.breakfast.is_none() && self.lunch.is_none() && self.dinner.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.breakfast.is_some() && self.lunch.is_some() && self.dinner.is_some()
    }

    /// Assigned recipe ids in breakfast, lunch, dinner order.
    pub fn recipe_ids(&self) -> impl Iterator<Item = &str> {
        [&self.breakfast, &self.lunch, &self.dinner]
            .into_iter()
            .filter_map(|id| id.as_deref())
    }

    /// Summed nutrition of the assigned recipes; unknown ids are skipped.
    pub fn nutrition(&self, catalog: &Catalog) -> Nutrition {
        self.recipe_ids()
            .filter_map(|id| catalog.find_recipe_by_id(Some(id)))
            .map(|recipe| recipe.nutrition)
            .sum()
    }
}

/// Per-day meal assignments. At most one entry exists per calendar day.
///
/// Every operation takes `&self` and returns a new plan; the caller decides
/// whether to adopt it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MealPlan {
    entries: Vec<MealPlanEntry>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(entries: Vec<MealPlanEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MealPlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by day.
    pub fn entries_by_day(&self) -> Vec<&MealPlanEntry> {
        let mut entries = self.entries.iter().collect::<Vec<_>>();
        entries.sort_by_key(|entry| entry.day);
        entries
    }

    pub fn find_entry(&self, day: impl Into<Day>) -> Option<&MealPlanEntry> {
        let day = day.into();
        self.entries.iter().find(|entry| entry.day == day)
    }

    /// Entry for `day`, or an empty one carrying that day.
    pub fn entry_or_default(&self, day: impl Into<Day>) -> MealPlanEntry {
        let day = day.into();
        self.find_entry(day)
            .cloned()
            .unwrap_or_else(|| MealPlanEntry::empty(day))
    }

    pub fn set_slot(
        &self,
        day: impl Into<Day>,
        meal_type: MealType,
        recipe_id: impl Into<String>,
    ) -> MealPlan {
        let day = day.into();
        let recipe_id = recipe_id.into();
        let mut plan = self.clone();

        match plan.entries.iter_mut().find(|entry| entry.day == day) {
            Some(entry) => *entry.slot_mut(meal_type) = Some(recipe_id),
            None => {
                let mut entry = MealPlanEntry::empty(day);
                *entry.slot_mut(meal_type) = Some(recipe_id);
                plan.entries.push(entry);
            }
        }

        tracing::debug!(%day, %meal_type, "slot set");

        plan
    }

    pub fn clear_slot(&self, day: impl Into<Day>, meal_type: MealType) -> MealPlan {
        let day = day.into();
        let mut plan = self.clone();

        if let Some(entry) = plan.entries.iter_mut().find(|entry| entry.day == day) {
            *entry.slot_mut(meal_type) = None;
            tracing::debug!(%day, %meal_type, "slot cleared");
        }

        plan
    }

    pub fn daily_nutrition(&self, day: impl Into<Day>, catalog: &Catalog) -> Nutrition {
        self.find_entry(day)
            .map(|entry| entry.nutrition(catalog))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u8) -> Day {
        Day::new(2024, 3, d).unwrap()
    }

    #[test]
    fn test_set_slot_on_empty_plan_creates_entry() {
        let plan = MealPlan::new().set_slot(day(5), MealType::Lunch, "R7");

        assert_eq!(
            plan.entries(),
            &[MealPlanEntry {
                day: day(5),
                breakfast: None,
                lunch: Some("R7".to_owned()),
                dinner: None,
            }]
        );
    }

    #[test]
    fn test_set_slot_leaves_original_untouched() {
        let original = MealPlan::new().set_slot(day(5), MealType::Lunch, "R7");
        let updated = original.set_slot(day(5), MealType::Lunch, "R8");

        assert_eq!(original.entries()[0].lunch.as_deref(), Some("R7"));
        assert_eq!(updated.entries()[0].lunch.as_deref(), Some("R8"));
    }

    #[test]
    fn test_clearing_last_slot_keeps_entry() {
        let plan = MealPlan::new()
            .set_slot(day(5), MealType::Dinner, "R1")
            .clear_slot(day(5), MealType::Dinner);

        assert_eq!(plan.len(), 1);
        assert!(plan.entries()[0].is_empty());
    }

    #[test]
    fn test_entries_by_day_sorts() {
        let plan = MealPlan::new()
            .set_slot(day(9), MealType::Lunch, "a")
            .set_slot(day(2), MealType::Lunch, "b")
            .set_slot(day(4), MealType::Lunch, "c");

        let days = plan
            .entries_by_day()
            .iter()
            .map(|e| e.day)
            .collect::<Vec<_>>();

        assert_eq!(days, vec![day(2), day(4), day(9)]);
    }

    #[test]
    fn test_recipe_ids_in_slot_order() {
        let entry = MealPlanEntry {
            day: day(1),
            breakfast: Some("b".to_owned()),
            lunch: None,
            dinner: Some("d".to_owned()),
        };

        assert_eq!(entry.recipe_ids().collect::<Vec<_>>(), vec!["b", "d"]);
        assert!(!entry.is_complete());
    }
}
