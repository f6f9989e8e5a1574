//! Configuration module for Aeyla
//!
//! Holds the runtime settings that shape a session: where id assignment
//! starts, what balance new students open with, and banner layout.

pub mod settings;

pub use settings::Settings;
