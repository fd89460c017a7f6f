//! Data layer: spectrum types and file loading.
//!
//! Architecture:
//! ```text
//!  .parquet / .json / .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → SpectralDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────────┐
//!   │ SpectralDataset │  Vec<Spectrum>, one per label
//!   └────────────────┘
//! ```

pub mod loader;
pub mod model;
