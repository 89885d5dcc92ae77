//! Tuning overrides for groove
//!
//! Every tunable in `groove_core::constants` can be overridden from a TOML or
//! JSON file (or inline JSON in the environment). [`load`] resolves the
//! source, builds a [`groove_core::Tuning`] and runs [`apply_guard_rails`]
//! over it.

pub mod error;
pub mod loader;
pub mod overrides;
pub mod validation;

pub use error::ConfigLoadError;
pub use loader::{ConfigSource, LoadedConfig, load};
pub use overrides::{
    InputOverrides, LayoutOverrides, RuntimeOverrides, StackOverrides,
    TurntableOverrides,
};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
