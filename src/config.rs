use crate::error::TeaError;
use crate::tea::Tea;
use serde::{Deserialize, Serialize};

/// Settings a [`TeaShop`](crate::TeaShop) is opened with.
///
/// # Examples
///
/// ```
/// use teashop::{ShopConfig, TeaShop};
///
/// let config = ShopConfig::from_json(
///     r#"{
///         "water_temperature_celsius": 85,
///         "teas": [
///             { "name": "Sencha", "steeping_time_seconds": 60, "ideal_temperature_celsius": 75, "is_loose": true }
///         ]
///     }"#,
/// )?;
///
/// let shop = TeaShop::from_config(config)?;
/// assert_eq!(shop.water_temperature(), 85);
/// # Ok::<(), teashop::TeaError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Kettle temperature in °C. Default: 90.
    pub water_temperature_celsius: i32,
    /// Teas on offer. Default: none.
    pub teas: Vec<Tea>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            water_temperature_celsius: 90,
            teas: Vec::new(),
        }
    }
}

impl ShopConfig {
    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TeaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The three teas every shop starts out with, at 90 °C.
    pub fn house_blend() -> Self {
        Self {
            water_temperature_celsius: 90,
            teas: vec![
                Tea::new("Green Tea", 120, 80, true),
                Tea::new("Earl Grey", 180, 95, false),
                Tea::new("Chamomile", 300, 100, true),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_config() {
        let config = ShopConfig::default();
        assert_eq!(config.water_temperature_celsius, 90);
        assert!(config.teas.is_empty());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ShopConfig::from_json("{}").unwrap();
        assert_eq!(config, ShopConfig::default());

        let config = ShopConfig::from_json(r#"{"water_temperature_celsius": 70}"#).unwrap();
        assert_eq!(config.water_temperature_celsius, 70);
    }

    #[test]
    fn test_from_json_reads_teas() {
        let json = serde_json::to_string(&ShopConfig::house_blend()).unwrap();
        let config = ShopConfig::from_json(&json).unwrap();

        assert_eq!(config.teas.len(), 3);
        assert_eq!(config.teas[1], Tea::new("Earl Grey", 180, 95, false));
    }

    #[test]
    fn test_from_json_malformed() {
        let error = ShopConfig::from_json(r#"{"teas": 3"#).unwrap_err();
        assert!(matches!(error, TeaError::Config(_)));
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_from_json_rejects_negative_steeping_time() {
        let json = r#"{"teas":[{"name":"X","steeping_time_seconds":-1,"ideal_temperature_celsius":80}]}"#;
        assert!(ShopConfig::from_json(json).is_err());
    }
}
