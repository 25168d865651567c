//! Step-by-step narrations of the shop at work.
//!
//! Each function drives the real types and returns the lines it would say,
//! one per step. Blank strings separate sections.

use crate::clock::ManualClock;
use crate::config::ShopConfig;
use crate::cup::TeaCup;
use crate::error::TeaError;
use crate::shop::TeaShop;
use crate::tea::Tea;
use std::sync::Arc;

const DIVIDER: &str = "----------------";

/// Walks through brewing the first `count` house teas by hand.
///
/// At most three teas are prepared; the opening line reports how many.
pub fn tea_preparation(count: usize) -> Vec<String> {
    let teas: Vec<Tea> = ShopConfig::house_blend()
        .teas
        .into_iter()
        .take(count)
        .collect();

    let mut steps = vec![
        format!("Starting tea preparation for {} tea(s)", teas.len()),
        "Boiling water...".to_string(),
    ];

    for tea in &teas {
        steps.push(DIVIDER.to_string());
        steps.push(format!("Preparing {}", tea.name()));
        steps.push(format!(
            "Cooling water to {}°C",
            tea.ideal_temperature_celsius()
        ));
        if tea.is_loose() {
            steps.push("Placing loose tea leaves in an infuser".to_string());
        } else {
            steps.push("Placing tea bag in cup".to_string());
        }
        steps.push(format!(
            "Steeping for {} seconds",
            tea.steeping_time_seconds()
        ));
        if tea.is_loose() {
            steps.push("Removing infuser".to_string());
        } else {
            steps.push("Removing tea bag".to_string());
        }
    }

    steps.push(DIVIDER.to_string());
    steps.push("Tea preparation completed!".to_string());
    steps
}

/// Follows one cup of green tea from empty to drinkable on a hand-driven
/// clock.
pub fn tea_cup_simulation() -> Vec<String> {
    let mut steps = vec!["=== Tea Cup Preparation Simulation ===".to_string()];
    if let Err(e) = run_cup(&mut steps) {
        steps.push(format!("Unexpected error: {}", e));
    }
    steps.push(String::new());
    steps.push("=== End of Tea Cup Simulation ===".to_string());
    steps
}

fn run_cup(steps: &mut Vec<String>) -> Result<(), TeaError> {
    let clock = ManualClock::new(1000);
    let mut cup = TeaCup::with_clock(Arc::new(clock.clone()));
    steps.push("Created a new tea cup".to_string());

    let green_tea = Arc::new(Tea::new("Green Tea", 120, 80, true));
    steps.push(format!(
        "Created {} (steeping time: {}s, ideal temp: {}°C)",
        green_tea.name(),
        green_tea.steeping_time_seconds(),
        green_tea.ideal_temperature_celsius()
    ));

    steps.push(String::new());
    steps.push(format!("Cup isEmpty: {}", cup.is_empty()));

    steps.push(String::new());
    steps.push("Attempting to add tea to empty cup...".to_string());
    match cup.add_tea(Arc::clone(&green_tea)) {
        Ok(()) => steps.push("ERROR: Tea was accepted by an empty cup!".to_string()),
        Err(e) => steps.push(format!("Correctly got error: {}", e)),
    }

    steps.push(String::new());
    steps.push("Adding water at 85°C".to_string());
    cup.add_water(85);
    steps.push(format!("Cup isEmpty: {}", cup.is_empty()));
    steps.push(format!("Cup temperature: {}°C", temperature_of(&cup)));

    steps.push(String::new());
    steps.push("Checking if tea is ready to drink...".to_string());
    steps.push(format!("Is ready to drink: {}", cup.is_ready_to_drink()));

    steps.push(String::new());
    steps.push(format!("Adding {} to cup", green_tea.name()));
    cup.add_tea(Arc::clone(&green_tea))?;
    steps.push(format!(
        "Tea added at time: {} seconds",
        cup.steeping_start_time().unwrap_or_default()
    ));

    steps.push(String::new());
    steps.push("Checking if tea is ready right after adding...".to_string());
    report_progress(steps, &cup);

    clock.set(1060);
    steps.push(String::new());
    steps.push("Time passed: 60 seconds".to_string());
    report_progress(steps, &cup);

    clock.set(1130);
    cup.add_water(70);
    steps.push(String::new());
    steps.push("Time passed: 130 seconds (steeping complete)".to_string());
    steps.push(format!(
        "But the water has cooled to {}°C",
        temperature_of(&cup)
    ));
    report_progress(steps, &cup);

    clock.set(1150);
    cup.add_water(80);
    steps.push(String::new());
    steps.push(format!(
        "Time passed: 150 seconds, water reheated to {}°C",
        temperature_of(&cup)
    ));
    report_progress(steps, &cup);

    Ok(())
}

fn temperature_of(cup: &TeaCup) -> i32 {
    cup.current_temperature_celsius().unwrap_or_default()
}

fn report_progress(steps: &mut Vec<String>, cup: &TeaCup) {
    steps.push(format!("Is ready to drink: {}", cup.is_ready_to_drink()));
    steps.push(format!(
        "Steeping time elapsed: {} seconds",
        cup.steeping_time_elapsed()
    ));
    steps.push(format!(
        "Steeping time remaining: {} seconds",
        cup.steeping_time_remaining()
    ));
}

/// A day at the counter: stocking the catalog, adjusting the kettle,
/// and turning away what cannot be served.
pub fn tea_shop_simulation() -> Vec<String> {
    let mut operations = vec!["=== Tea Shop Simulation ===".to_string()];
    if let Err(e) = run_shop(&mut operations) {
        operations.push(format!("Unexpected error: {}", e));
    }
    operations.push(String::new());
    operations.push("=== End of Tea Shop Simulation ===".to_string());
    operations
}

fn run_shop(operations: &mut Vec<String>) -> Result<(), TeaError> {
    let mut shop = TeaShop::new(90);
    operations.push(format!(
        "Tea shop initialized with water temperature: {}°C",
        shop.water_temperature()
    ));

    for tea in ShopConfig::house_blend().teas {
        operations.push(format!("Added tea: {}", tea.name()));
        shop.add_tea(tea);
    }

    operations.push(String::new());
    operations.push("Available teas:".to_string());
    let mut names: Vec<&String> = shop.available_teas().keys().collect();
    names.sort();
    for name in names {
        operations.push(format!("- {}", name));
    }

    operations.push(String::new());
    operations.push("Preparing teas:".to_string());
    shop.prepare_tea("Green Tea")?;
    operations.push(format!(
        "Prepared Green Tea at {}°C",
        shop.water_temperature()
    ));

    operations.push(String::new());
    operations.push("Adjusting water temperature for optimal green tea brewing...".to_string());
    shop.set_water_temperature(80)?;
    operations.push(format!(
        "Water temperature set to: {}°C",
        shop.water_temperature()
    ));
    shop.prepare_tea("Green Tea")?;
    operations.push(format!(
        "Prepared Green Tea at optimal temperature: {}°C",
        shop.water_temperature()
    ));

    operations.push(String::new());
    operations.push("Adjusting water temperature for black tea...".to_string());
    shop.set_water_temperature(95)?;
    operations.push(format!(
        "Water temperature set to: {}°C",
        shop.water_temperature()
    ));
    shop.prepare_tea("Earl Grey")?;
    operations.push(format!(
        "Prepared Earl Grey at optimal temperature: {}°C",
        shop.water_temperature()
    ));

    operations.push(String::new());
    operations.push("Testing case insensitivity:".to_string());
    shop.prepare_tea("chamomile")?;
    operations.push("Successfully prepared 'chamomile' (lowercase) tea".to_string());

    operations.push(String::new());
    operations.push("Trying to prepare unavailable tea:".to_string());
    if let Err(e) = shop.prepare_tea("Matcha") {
        operations.push(format!("Error: {}", e));
    }

    operations.push(String::new());
    operations.push("Trying to set invalid temperature:".to_string());
    if let Err(e) = shop.set_water_temperature(105) {
        operations.push(format!("Error: {}", e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(lines: &[String], expected: &str) -> bool {
        lines.iter().any(|line| line == expected)
    }

    #[test]
    fn test_tea_preparation_for_two() {
        let steps = tea_preparation(2);

        assert_eq!(steps[0], "Starting tea preparation for 2 tea(s)");
        assert!(contains(&steps, "Boiling water..."));

        assert!(contains(&steps, "Preparing Green Tea"));
        assert!(contains(&steps, "Cooling water to 80°C"));
        assert!(contains(&steps, "Placing loose tea leaves in an infuser"));
        assert!(contains(&steps, "Steeping for 120 seconds"));

        assert!(contains(&steps, "Preparing Earl Grey"));
        assert!(contains(&steps, "Cooling water to 95°C"));
        assert!(contains(&steps, "Placing tea bag in cup"));
        assert!(contains(&steps, "Steeping for 180 seconds"));

        assert!(!contains(&steps, "Preparing Chamomile"));
        assert_eq!(
            steps.last().map(String::as_str),
            Some("Tea preparation completed!")
        );
    }

    #[test]
    fn test_tea_preparation_caps_at_house_teas() {
        let steps = tea_preparation(10);
        assert_eq!(steps[0], "Starting tea preparation for 3 tea(s)");
        assert!(contains(&steps, "Preparing Chamomile"));

        let steps = tea_preparation(0);
        assert_eq!(steps[0], "Starting tea preparation for 0 tea(s)");
        assert!(!steps.iter().any(|s| s.starts_with("Preparing")));
    }

    #[test]
    fn test_tea_cup_simulation() {
        let steps = tea_cup_simulation();

        assert_eq!(steps[0], "=== Tea Cup Preparation Simulation ===");
        assert!(contains(&steps, "Created a new tea cup"));
        assert!(contains(&steps, "Cup isEmpty: true"));
        assert!(contains(
            &steps,
            "Correctly got error: Cannot add tea to an empty cup!"
        ));
        assert!(contains(&steps, "Cup isEmpty: false"));
        assert!(contains(&steps, "Tea added at time: 1000 seconds"));
        assert!(contains(&steps, "Steeping time remaining: 120 seconds"));
        assert!(contains(&steps, "Steeping time elapsed: 60 seconds"));
        assert!(contains(&steps, "Steeping time elapsed: 130 seconds"));
        assert!(contains(&steps, "Is ready to drink: true"));
        assert!(!steps.iter().any(|s| s.starts_with("Unexpected error")));
        assert_eq!(
            steps.last().map(String::as_str),
            Some("=== End of Tea Cup Simulation ===")
        );
    }

    #[test]
    fn test_tea_cup_simulation_not_ready_while_cooled() {
        let steps = tea_cup_simulation();
        let cooled = steps
            .iter()
            .position(|s| s == "But the water has cooled to 70°C")
            .unwrap();
        assert_eq!(steps[cooled + 1], "Is ready to drink: false");
        assert_eq!(steps[cooled + 3], "Steeping time remaining: 0 seconds");
    }

    #[test]
    fn test_tea_shop_simulation() {
        let operations = tea_shop_simulation();

        assert_eq!(operations[0], "=== Tea Shop Simulation ===");
        assert!(contains(
            &operations,
            "Tea shop initialized with water temperature: 90°C"
        ));
        assert!(contains(&operations, "Added tea: Green Tea"));
        assert!(contains(&operations, "Added tea: Earl Grey"));
        assert!(contains(&operations, "Added tea: Chamomile"));
        assert!(contains(&operations, "- chamomile"));
        assert!(contains(&operations, "Water temperature set to: 80°C"));
        assert!(contains(&operations, "Water temperature set to: 95°C"));
        assert!(contains(
            &operations,
            "Successfully prepared 'chamomile' (lowercase) tea"
        ));
        assert!(contains(&operations, "Error: Tea not available: Matcha"));
        assert!(contains(
            &operations,
            "Error: Water temperature must be between 0 and 100°C"
        ));
        assert_eq!(
            operations.last().map(String::as_str),
            Some("=== End of Tea Shop Simulation ===")
        );
    }
}
