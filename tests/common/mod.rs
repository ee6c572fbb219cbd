//! Common test utilities and infrastructure
//!
//! Provides the Cucumber world shared by all step modules.

pub mod world;

pub use world::LookupWorld;
