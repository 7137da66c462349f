//! Adapters - concrete implementations of the ports

pub mod backengine;

pub use backengine::BackengineClient;
