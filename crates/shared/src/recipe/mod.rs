use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Nutrition snapshot of a food item or of one recipe serving.
#[derive(Validate, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Nutrition {
    #[validate(range(min = 0.0))]
    pub calories: f32,
    #[validate(range(min = 0.0))]
    pub protein: f32,
    #[validate(range(min = 0.0))]
    pub carbs: f32,
    #[validate(range(min = 0.0))]
    pub fat: f32,
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, rhs: Self) -> Self::Output {
        Nutrition {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for Nutrition {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_adds_each_field() {
        let total: Nutrition = [
            Nutrition {
                calories: 350.0,
                protein: 14.0,
                carbs: 30.0,
                fat: 20.0,
            },
            Nutrition {
                calories: 450.0,
                protein: 18.0,
                carbs: 65.0,
                fat: 15.0,
            },
        ]
        .into_iter()
        .sum();

        assert_eq!(total.calories, 800.0);
        assert_eq!(total.protein, 32.0);
        assert_eq!(total.carbs, 95.0);
        assert_eq!(total.fat, 35.0);
    }

    #[test]
    fn test_negative_values_fail_validation() {
        let nutrition = Nutrition {
            calories: -1.0,
            ..Default::default()
        };

        assert!(nutrition.validate().is_err());
        assert!(Nutrition::default().validate().is_ok());
    }
}
