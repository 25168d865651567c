//! Commonly used types and traits

pub use crate::clock::{Clock, ManualClock};
pub use crate::config::ShopConfig;
pub use crate::cup::{CupState, TeaCup};
pub use crate::error::{ErrorKind, TeaError};
pub use crate::shop::TeaShop;
pub use crate::tea::Tea;
