use std::hint::black_box;

use alimento_mealplan::{Day, Generate, generate};
use alimento_recipe::{Nutrition, Recipe};
use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn create_bench_recipes(count: usize) -> Vec<Recipe> {
    let tags = ["breakfast", "lunch", "dinner", "vegan", "vegetarian", "low-carb"];

    (0..count)
        .map(|i| Recipe {
            id: format!("recipe_{i}"),
            name: format!("Bench Recipe {i}"),
            prep_time: 10,
            cook_time: 20,
            servings: 2,
            ingredients: vec![],
            instructions: vec![],
            nutrition: Nutrition::default(),
            tags: vec![tags[i % tags.len()].to_owned(), tags[(i + 3) % tags.len()].to_owned()],
        })
        .collect()
}

fn bench_generate(c: &mut Criterion) {
    let recipes = create_bench_recipes(500);
    let start = Day::new(2025, 1, 6).expect("valid date");

    c.bench_function("generate_14_days_no_preference", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| {
            generate(
                black_box(&recipes),
                Generate {
                    start,
                    days: 14,
                    preferences: "",
                },
                &mut rng,
            )
        })
    });

    c.bench_function("generate_14_days_with_preferences", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| {
            generate(
                black_box(&recipes),
                Generate {
                    start,
                    days: 14,
                    preferences: "vegan, low-carb",
                },
                &mut rng,
            )
        })
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
