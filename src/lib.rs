//! AIFortune - deterministic fortune-telling service for token contract
//! addresses.
//!
//! This crate turns a contract address into a reproducible "fortune": a
//! composite score built from external market metrics, a seeded symbolic
//! draw (I-Ching hexagram, three tarot cards, a mantra), and an LLM-written
//! narrative. The draw is a pure function of the address, exposed seed
//! included, so identical addresses always read the same.

pub mod config;
pub mod error;
pub mod fortune;
pub mod server;
pub mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use fortune::FortuneEngine;
pub use types::{PredictRequest, PredictResponse, Prediction};
