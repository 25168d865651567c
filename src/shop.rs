use crate::clock::{Clock, SystemClock};
use crate::config::ShopConfig;
use crate::cup::TeaCup;
use crate::error::TeaError;
use crate::tea::Tea;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::{info, warn};

/// Water temperatures the shop accepts, in °C.
pub const WATER_TEMPERATURE_RANGE: RangeInclusive<i32> = 0..=100;

/// A catalog of teas and a kettle.
///
/// Tea names are matched without regard to case. Each prepared cup is
/// independent of the shop once handed out.
///
/// # Examples
///
/// ```
/// use teashop::{Tea, TeaShop};
///
/// let mut shop = TeaShop::new(90);
/// shop.add_tea(Tea::new("Green Tea", 120, 80, true));
///
/// let cup = shop.prepare_tea("GREEN TEA")?;
/// assert_eq!(cup.tea().map(|t| t.name()), Some("Green Tea"));
/// assert_eq!(cup.current_temperature_celsius(), Some(90));
/// # Ok::<(), teashop::TeaError>(())
/// ```
#[derive(Debug)]
pub struct TeaShop {
    catalog: HashMap<String, Arc<Tea>>,
    water_temperature_celsius: i32,
    clock: Arc<dyn Clock>,
}

impl TeaShop {
    /// Opens a shop with an empty catalog.
    ///
    /// The initial temperature is taken as given; only later changes go
    /// through [`set_water_temperature`](Self::set_water_temperature).
    pub fn new(water_temperature_celsius: i32) -> Self {
        Self::with_clock(water_temperature_celsius, Arc::new(SystemClock))
    }

    /// Opens a shop whose cups read time from `clock`.
    pub fn with_clock(water_temperature_celsius: i32, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog: HashMap::new(),
            water_temperature_celsius,
            clock,
        }
    }

    /// Opens a shop from a configuration, validating its water temperature.
    pub fn from_config(config: ShopConfig) -> Result<Self, TeaError> {
        Self::from_config_with_clock(config, Arc::new(SystemClock))
    }

    pub fn from_config_with_clock(
        config: ShopConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, TeaError> {
        let mut shop = Self::with_clock(config.water_temperature_celsius, clock);
        shop.set_water_temperature(config.water_temperature_celsius)?;
        for tea in config.teas {
            shop.add_tea(tea);
        }
        Ok(shop)
    }

    /// Adds a tea, replacing any tea whose name differs only in case.
    pub fn add_tea(&mut self, tea: impl Into<Arc<Tea>>) {
        let tea = tea.into();
        info!("Added tea: {}", tea.name());
        self.catalog.insert(tea.catalog_key(), tea);
    }

    /// Pours a cup of the named tea, already steeping.
    ///
    /// # Errors
    ///
    /// Returns [`TeaError::TeaNotFound`] if no tea matches `name`.
    pub fn prepare_tea(&self, name: &str) -> Result<TeaCup, TeaError> {
        let Some(tea) = self.catalog.get(&name.to_lowercase()) else {
            warn!("Tea not available: {}", name);
            return Err(TeaError::TeaNotFound(name.to_string()));
        };

        let mut cup = TeaCup::with_clock(Arc::clone(&self.clock));
        cup.add_water(self.water_temperature_celsius);
        cup.add_tea(Arc::clone(tea))?;
        info!(
            "Prepared {} at {}°C",
            tea.name(),
            self.water_temperature_celsius
        );
        Ok(cup)
    }

    /// Changes the water temperature for cups prepared from now on.
    ///
    /// # Errors
    ///
    /// Returns [`TeaError::WaterTemperatureOutOfRange`] outside 0..=100 °C,
    /// leaving the current temperature in place.
    pub fn set_water_temperature(&mut self, celsius: i32) -> Result<(), TeaError> {
        if !WATER_TEMPERATURE_RANGE.contains(&celsius) {
            warn!("Rejected water temperature {}°C", celsius);
            return Err(TeaError::WaterTemperatureOutOfRange(celsius));
        }
        self.water_temperature_celsius = celsius;
        Ok(())
    }

    pub fn water_temperature(&self) -> i32 {
        self.water_temperature_celsius
    }

    /// Read-only view of the catalog, keyed by lower-cased name.
    pub fn available_teas(&self) -> &HashMap<String, Arc<Tea>> {
        &self.catalog
    }
}
