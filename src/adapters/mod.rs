//! Adapters - Connections between the engine and the outside world.
//!
//! - `payload` - JSON/YAML request and response documents

pub mod payload;
