//! Core analysis engine: material table, population sampling, and the
//! ram-pressure outcome model.

pub mod classify;
pub mod material;
pub mod sample;

pub use classify::{classify, ImpactStats};
pub use material::{Material, MaterialProfile};
pub use sample::SampleBatch;
