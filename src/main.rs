use std::time::Duration;
use teashop::prelude::*;
use teashop::{brew, narration};

const USAGE: &str = "usage: teashop <tea [count] | cup | shop | brew <name>>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let lines = match args.first().map(String::as_str) {
        Some("tea") => {
            let count = match args.get(1) {
                Some(count) => count.parse()?,
                None => 3,
            };
            narration::tea_preparation(count)
        }
        Some("cup") => narration::tea_cup_simulation(),
        Some("shop") => narration::tea_shop_simulation(),
        Some("brew") if args.len() > 1 => {
            brew_one(&args[1..].join(" ")).await?;
            return Ok(());
        }
        _ => {
            eprintln!("{}", USAGE);
            return Ok(());
        }
    };

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

/// Prepares a house tea at its ideal temperature and waits until it is ready.
async fn brew_one(name: &str) -> Result<(), TeaError> {
    let mut shop = TeaShop::from_config(ShopConfig::house_blend())?;

    let ideal = shop
        .available_teas()
        .get(&name.to_lowercase())
        .map(|tea| tea.ideal_temperature_celsius())
        .ok_or_else(|| TeaError::TeaNotFound(name.to_string()))?;
    shop.set_water_temperature(ideal)?;

    let cup = shop.prepare_tea(name)?;
    println!(
        "Steeping {} at {}°C for {} seconds...",
        name,
        ideal,
        cup.steeping_time_remaining()
    );

    brew::wait_until_ready(&cup, Duration::from_secs(10)).await?;
    println!("{} is ready to drink", name);
    Ok(())
}
