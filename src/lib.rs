//! Decoder for stellar spectral classification notation such as `G5II-III`,
//! `sdM4`, `S5,3` or `DA2PEC`, with optional averaging of reference
//! physical properties.

pub mod classifier;
pub mod classify;
pub mod config;
pub mod error;
pub mod grammar;
pub mod merge;
pub mod model;
pub mod reference;
pub mod tree;

pub type Result<T> = anyhow::Result<T>;

pub use classifier::Classifier;
pub use config::Config;
pub use error::{DecodeError, DecodeResult};
pub use model::{PropertySet, SpectralClassification};
