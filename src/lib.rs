//! # Teashop
//!
//! A small tea shop where every cup is a state machine.
//!
//! A cup starts empty, is filled with water, and starts steeping once a tea
//! goes in. It is ready to drink when the tea has steeped long enough in
//! water within a few degrees of the tea's ideal temperature.
//!
//! ## Features
//!
//! - **Explicit states**: [`TeaCup`] moves through [`CupState`] and refuses
//!   tea before water
//! - **Injectable time**: cups read a [`Clock`]; swap in [`ManualClock`] to
//!   move time by hand
//! - **Pluggable temperature rule**: [`TemperaturePolicy`], ±5 °C by default
//! - **Case-insensitive catalog**: [`TeaShop`] finds "GREEN TEA" and
//!   "green tea" alike
//! - **Error Handling**: Structured errors with `thiserror`
//!
//! ## Quick Start
//!
//! ```rust
//! use teashop::prelude::*;
//!
//! let mut shop = TeaShop::new(80);
//! shop.add_tea(Tea::new("Green Tea", 120, 80, true));
//!
//! let cup = shop.prepare_tea("green tea")?;
//! assert_eq!(cup.state(), CupState::Steeping);
//! assert_eq!(cup.steeping_time_remaining(), 120);
//! # Ok::<(), TeaError>(())
//! ```
//!
//! ## Driving Time by Hand
//!
//! ```rust
//! use std::sync::Arc;
//! use teashop::prelude::*;
//!
//! let clock = ManualClock::new(1000);
//! let mut cup = TeaCup::with_clock(Arc::new(clock.clone()));
//!
//! cup.add_water(85);
//! cup.add_tea(Tea::new("T", 120, 80, false))?;
//! assert_eq!(cup.steeping_time_elapsed(), 0);
//!
//! clock.set(1121);
//! assert!(cup.is_ready_to_drink());
//! # Ok::<(), TeaError>(())
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use teashop::prelude::*;
//!
//! let mut shop = TeaShop::new(90);
//!
//! if let Err(error) = shop.set_water_temperature(105) {
//!     match error.kind() {
//!         ErrorKind::Validation => eprintln!("Rejected: {}", error),
//!         _ => eprintln!("Error: {}", error),
//!     }
//! }
//! assert_eq!(shop.water_temperature(), 90);
//! ```

mod clock;
mod config;
mod cup;
mod error;
mod shop;
mod tea;

pub mod brew;
pub mod narration;
pub mod prelude;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ShopConfig;
pub use cup::{CupState, TeaCup, TemperaturePolicy, Tolerance};
pub use error::{ErrorKind, TeaError};
pub use shop::{TeaShop, WATER_TEMPERATURE_RANGE};
pub use tea::Tea;
