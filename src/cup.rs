use crate::clock::{Clock, SystemClock};
use crate::error::TeaError;
use crate::tea::Tea;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Observable stage of a [`TeaCup`].
///
/// Readiness is not a stage of its own; it is derived from `Steeping` by
/// [`TeaCup::is_ready_to_drink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CupState {
    /// No water yet.
    Empty,
    /// Water poured, no tea.
    Filled,
    /// Tea is in the water and the steeping clock is running.
    Steeping,
}

impl fmt::Display for CupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CupState::Empty => write!(f, "empty"),
            CupState::Filled => write!(f, "filled"),
            CupState::Steeping => write!(f, "steeping"),
        }
    }
}

/// Decides whether the water is at the right temperature for a tea.
pub trait TemperaturePolicy: Send + Sync + fmt::Debug {
    fn is_ideal(&self, current_celsius: i32, tea: &Tea) -> bool;
}

/// Accepts water within a fixed number of degrees of the tea's ideal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance {
    celsius: u32,
}

impl Tolerance {
    /// The ±5 °C window used unless a cup is told otherwise.
    pub const DEFAULT_CELSIUS: u32 = 5;

    pub fn new(celsius: u32) -> Self {
        Self { celsius }
    }

    pub fn celsius(&self) -> u32 {
        self.celsius
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELSIUS)
    }
}

impl TemperaturePolicy for Tolerance {
    fn is_ideal(&self, current_celsius: i32, tea: &Tea) -> bool {
        current_celsius.abs_diff(tea.ideal_temperature_celsius()) <= self.celsius
    }
}

#[derive(Debug, Clone)]
enum Contents {
    Empty,
    Filled {
        temperature_celsius: i32,
    },
    Steeping {
        temperature_celsius: i32,
        tea: Arc<Tea>,
        started_at: i64,
    },
}

/// A cup moving from empty, to filled, to steeping.
///
/// The tea is shared with whoever else holds it; the cup never owns the
/// recipe. Time is read from an injected [`Clock`] and temperature is judged
/// by an injected [`TemperaturePolicy`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use teashop::{ManualClock, Tea, TeaCup};
///
/// let clock = ManualClock::new(1000);
/// let mut cup = TeaCup::with_clock(Arc::new(clock.clone()));
///
/// cup.add_water(80);
/// cup.add_tea(Tea::new("Green Tea", 120, 80, true))?;
/// assert!(!cup.is_ready_to_drink());
///
/// clock.advance(120);
/// assert!(cup.is_ready_to_drink());
/// # Ok::<(), teashop::TeaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TeaCup {
    contents: Contents,
    clock: Arc<dyn Clock>,
    temperature_policy: Arc<dyn TemperaturePolicy>,
}

impl Default for TeaCup {
    fn default() -> Self {
        Self::new()
    }
}

impl TeaCup {
    /// Creates an empty cup reading wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty cup reading time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            contents: Contents::Empty,
            clock,
            temperature_policy: Arc::new(Tolerance::default()),
        }
    }

    /// Replaces the rule deciding whether the water temperature suits the tea.
    pub fn with_temperature_policy(mut self, policy: impl TemperaturePolicy + 'static) -> Self {
        self.temperature_policy = Arc::new(policy);
        self
    }

    /// Pours water at the given temperature.
    ///
    /// Allowed at any stage. While steeping this only changes the
    /// temperature; the tea and its clock are kept.
    pub fn add_water(&mut self, temperature_celsius: i32) {
        if let Contents::Steeping {
            temperature_celsius: current,
            ..
        } = &mut self.contents
        {
            debug!(
                "Water in steeping cup changed from {}°C to {}°C",
                current, temperature_celsius
            );
            *current = temperature_celsius;
            return;
        }

        debug!("Cup filled with water at {}°C", temperature_celsius);
        self.contents = Contents::Filled {
            temperature_celsius,
        };
    }

    /// Puts a tea in the water and starts the steeping clock.
    ///
    /// Adding a tea to a cup that is already steeping replaces the tea and
    /// restarts the clock.
    ///
    /// # Errors
    ///
    /// Returns [`TeaError::EmptyCup`] if no water has been poured; the cup
    /// is left untouched.
    pub fn add_tea(&mut self, tea: impl Into<Arc<Tea>>) -> Result<(), TeaError> {
        let temperature_celsius = match &self.contents {
            Contents::Empty => {
                warn!("Rejected tea for an empty cup");
                return Err(TeaError::EmptyCup);
            }
            Contents::Filled {
                temperature_celsius,
            }
            | Contents::Steeping {
                temperature_celsius,
                ..
            } => *temperature_celsius,
        };

        let tea = tea.into();
        let started_at = self.clock.now_secs();
        debug!("Steeping '{}' from t={}s", tea.name(), started_at);
        self.contents = Contents::Steeping {
            temperature_celsius,
            tea,
            started_at,
        };
        Ok(())
    }

    /// True once the tea has steeped long enough in water of the right
    /// temperature. Always false before a tea is added.
    pub fn is_ready_to_drink(&self) -> bool {
        match &self.contents {
            Contents::Steeping { tea, .. } => {
                self.steeping_time_elapsed() >= i64::from(tea.steeping_time_seconds())
                    && self.is_temperature_ideal()
            }
            _ => false,
        }
    }

    /// Whether the water suits the tea, according to the cup's policy.
    pub fn is_temperature_ideal(&self) -> bool {
        match &self.contents {
            Contents::Steeping {
                temperature_celsius,
                tea,
                ..
            } => self.temperature_policy.is_ideal(*temperature_celsius, tea),
            _ => false,
        }
    }

    pub fn state(&self) -> CupState {
        match self.contents {
            Contents::Empty => CupState::Empty,
            Contents::Filled { .. } => CupState::Filled,
            Contents::Steeping { .. } => CupState::Steeping,
        }
    }

    /// Temperature of the water, `None` while the cup is empty.
    pub fn current_temperature_celsius(&self) -> Option<i32> {
        match self.contents {
            Contents::Empty => None,
            Contents::Filled {
                temperature_celsius,
            }
            | Contents::Steeping {
                temperature_celsius,
                ..
            } => Some(temperature_celsius),
        }
    }

    pub fn tea(&self) -> Option<&Tea> {
        match &self.contents {
            Contents::Steeping { tea, .. } => Some(tea),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.contents, Contents::Empty)
    }

    /// Clock reading at the moment the tea went in.
    pub fn steeping_start_time(&self) -> Option<i64> {
        match self.contents {
            Contents::Steeping { started_at, .. } => Some(started_at),
            _ => None,
        }
    }

    /// Seconds since the tea went in, 0 before that.
    pub fn steeping_time_elapsed(&self) -> i64 {
        match self.contents {
            Contents::Steeping { started_at, .. } => self.clock.now_secs() - started_at,
            _ => 0,
        }
    }

    /// Seconds of steeping still required, never negative.
    pub fn steeping_time_remaining(&self) -> i64 {
        match &self.contents {
            Contents::Steeping { tea, .. } => {
                let required = i64::from(tea.steeping_time_seconds());
                (required - self.steeping_time_elapsed()).max(0)
            }
            _ => 0,
        }
    }
}
