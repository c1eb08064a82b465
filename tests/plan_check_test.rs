#[macro_use]
extern crate assert_float_eq;

use std::path::PathBuf;

use diet_model_rs::builder::build_program;
use diet_model_rs::data::{load_diet, load_plan, Plan, Serving};
use diet_model_rs::program::evaluate;
use diet_model_rs::{Bounds, Day, DietData, Food, ModelConfig, Requirement, Variant};

fn demo(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(file)
}

#[test]
fn test_demo_plan_cost_and_violations() {
    let data = load_diet(demo("diet.json")).unwrap();
    let config = ModelConfig::default();
    let lp = build_program(&data, &config).unwrap();
    let plan = load_plan(demo("plan.json")).unwrap();

    let values = plan.to_assignment(&data, &lp, config.variant).unwrap();
    let eval = evaluate(&lp, &values);

    // Mon: 0.60 + 4.20 + 1.00 + 1.05 + 0.40, Tue: 0.45 + 0.80 + 1.40 + 0.70
    assert_float_absolute_eq!(eval.objective, 10.6, 1e-9);

    let mon = eval
        .constraints
        .iter()
        .find(|c| c.name == "Calories[Mon]")
        .unwrap();
    assert_float_absolute_eq!(mon.value, 2487.0, 1e-9);
    assert!(!mon.satisfied);
    assert_float_absolute_eq!(mon.violation(), 313.0, 1e-9);

    assert!(eval.domain_violations.is_empty());
    assert!(!eval.is_feasible());
}

fn single_day() -> DietData {
    DietData {
        foods: vec![
            Food::new("Rice", 0.2).with_nutrient("Calories", 200.0),
            Food::new("Beans", 0.5)
                .with_nutrient("Calories", 100.0)
                .with_nutrient("Protein", 10.0),
        ],
        nutrients: vec!["Calories".to_string(), "Protein".to_string()],
        days: vec![Day::rest("Day1")],
        requirements: [
            (
                "Calories".to_string(),
                Requirement::uniform(Bounds::between(1000.0, 1200.0)),
            ),
            (
                "Protein".to_string(),
                Requirement::uniform(Bounds::at_least(30.0)),
            ),
        ]
        .into_iter()
        .collect(),
    }
}

#[test]
fn test_feasible_plan_for_static_variant() {
    let data = single_day();
    let config = ModelConfig {
        variant: Variant::Static,
        ..Default::default()
    };
    let lp = build_program(&data, &config).unwrap();
    let plan = Plan {
        servings: vec![
            Serving {
                food: "rice".to_string(),
                day: None,
                servings: 4.0,
            },
            Serving {
                food: "BEANS".to_string(),
                day: None,
                servings: 3.0,
            },
        ],
    };

    let eval = evaluate(&lp, &plan.to_assignment(&data, &lp, config.variant).unwrap());
    assert_float_absolute_eq!(eval.objective, 2.3, 1e-9);
    assert!(eval.is_feasible());
}

#[test]
fn test_fractional_servings_flagged_unless_relaxed() {
    let data = single_day();
    let plan = Plan {
        servings: vec![
            Serving {
                food: "Rice".to_string(),
                day: None,
                servings: 3.5,
            },
            Serving {
                food: "Beans".to_string(),
                day: None,
                servings: 3.0,
            },
        ],
    };

    let integer = ModelConfig {
        variant: Variant::Static,
        ..Default::default()
    };
    let lp = build_program(&data, &integer).unwrap();
    let eval = evaluate(&lp, &plan.to_assignment(&data, &lp, Variant::Static).unwrap());
    assert_eq!(eval.domain_violations.len(), 1);
    assert_eq!(eval.domain_violations[0].variable, "x[Rice]");

    let relaxed = ModelConfig {
        integer_servings: false,
        ..integer
    };
    let lp = build_program(&data, &relaxed).unwrap();
    let eval = evaluate(&lp, &plan.to_assignment(&data, &lp, Variant::Static).unwrap());
    assert!(eval.is_feasible());
}
