//! Domain Value Objects
//!
//! Immutable types that carry no identity of their own.

mod config_warning;
pub mod emission_factors;
mod suggestion;

pub use config_warning::{ConfigWarning, ConfigWarningKind};
pub use emission_factors::{is_builtin, EmissionFactors, BEEF_KG, CAR_MILES, ELECTRICITY_KWH};
pub use suggestion::{suggestions, Suggestion};
