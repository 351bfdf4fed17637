use alimento_shared::recipe::Nutrition;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FoodItem {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub category: String,
    #[validate(nested)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

impl FoodItem {
    pub fn contains_allergen(&self, allergen: &str) -> bool {
        self.allergens
            .iter()
            .any(|a| a.eq_ignore_ascii_case(allergen.trim()))
    }
}

/// Allergy-friendly alternatives for one food item.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SmartSwap<'a> {
    pub food: &'a FoodItem,
    pub triggered_by: Vec<String>,
    pub alternatives: &'a [String],
}

pub(crate) fn smart_swaps<'a, S: AsRef<str>>(
    foods: &'a [FoodItem],
    allergens: &[S],
) -> Vec<SmartSwap<'a>> {
    foods
        .iter()
        .filter(|food| !food.alternatives.is_empty())
        .filter_map(|food| {
            let triggered_by = allergens
                .iter()
                .map(|a| a.as_ref().trim().to_lowercase())
                .filter(|a| !a.is_empty() && food.contains_allergen(a))
                .collect::<Vec<_>>();

            if !allergens.is_empty() && triggered_by.is_empty() {
                return None;
            }

            Some(SmartSwap {
                food,
                triggered_by,
                alternatives: &food.alternatives,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: &str, allergens: &[&str], alternatives: &[&str]) -> FoodItem {
        FoodItem {
            id: id.to_owned(),
            name: format!("food {id}"),
            category: "Test".to_owned(),
            nutrition: Nutrition::default(),
            allergens: allergens.iter().map(|a| a.to_string()).collect(),
            alternatives: alternatives.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn test_no_allergens_lists_every_swappable_food() {
        let foods = vec![
            food("1", &["nuts"], &["sunflower seeds"]),
            food("2", &[], &["brown rice"]),
            food("3", &["dairy"], &[]),
        ];

        let swaps = smart_swaps::<&str>(&foods, &[]);

        assert_eq!(swaps.len(), 2);
        assert!(swaps.iter().all(|s| s.triggered_by.is_empty()));
    }

    #[test]
    fn test_allergen_filter_is_case_insensitive() {
        let foods = vec![
            food("1", &["nuts"], &["sunflower seeds"]),
            food("2", &["dairy", "lactose"], &["oat milk"]),
            food("3", &[], &["quinoa"]),
        ];

        let swaps = smart_swaps(&foods, &["Lactose", " DAIRY "]);

        assert_eq!(swaps.len(), 1);
        assert_eq!(swaps[0].food.id, "2");
        assert_eq!(swaps[0].triggered_by, vec!["lactose", "dairy"]);
        assert_eq!(swaps[0].alternatives, &["oat milk".to_owned()]);
    }
}
