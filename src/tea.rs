use serde::{Deserialize, Serialize};

/// A brewing recipe.
///
/// No field is validated; whatever the caller supplies is stored as is.
///
/// # Examples
///
/// ```
/// use teashop::Tea;
///
/// let mut tea = Tea::new("Green Tea", 120, 80, true);
/// assert_eq!(tea.name(), "Green Tea");
///
/// tea.set_steeping_time_seconds(150);
/// assert_eq!(tea.steeping_time_seconds(), 150);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tea {
    name: String,
    steeping_time_seconds: u32,
    ideal_temperature_celsius: i32,
    /// Loose leaf (needs an infuser) rather than a bag.
    #[serde(default)]
    is_loose: bool,
}

impl Tea {
    pub fn new(
        name: impl Into<String>,
        steeping_time_seconds: u32,
        ideal_temperature_celsius: i32,
        is_loose: bool,
    ) -> Self {
        Self {
            name: name.into(),
            steeping_time_seconds,
            ideal_temperature_celsius,
            is_loose,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn steeping_time_seconds(&self) -> u32 {
        self.steeping_time_seconds
    }

    pub fn set_steeping_time_seconds(&mut self, seconds: u32) {
        self.steeping_time_seconds = seconds;
    }

    pub fn ideal_temperature_celsius(&self) -> i32 {
        self.ideal_temperature_celsius
    }

    pub fn set_ideal_temperature_celsius(&mut self, celsius: i32) {
        self.ideal_temperature_celsius = celsius;
    }

    pub fn is_loose(&self) -> bool {
        self.is_loose
    }

    pub fn set_loose(&mut self, loose: bool) {
        self.is_loose = loose;
    }

    /// Catalog key for this tea: the lower-cased name.
    pub(crate) fn catalog_key(&self) -> String {
        self.name.to_lowercase()
    }
}
