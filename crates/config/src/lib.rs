//! Traption Config
//!
//! Settings structures and configuration loading for the caption service.

pub mod configurable_value;
pub mod loader;
pub mod settings;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::load_config;
pub use settings::{
	CompletionSettings, LogFormat, LoggingSettings, ServerSettings, Settings, TimeoutSettings,
};
