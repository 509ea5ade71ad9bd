//! sipp-entropy - Delentropy and conventional entropy
//!
//! - [`DelentropyCalculator`] - entropy of a joint gradient histogram, with
//!   per-bin and per-pixel renderings
//! - [`EntropyTable`] - entropy contribution of each distinct bin count
//! - [`ConventionalEntropy`] - first-order entropy of gray levels

pub mod conventional;
pub mod delentropy;
mod error;
pub mod table;

pub use conventional::{ConventionalEntropy, conventional_entropy};
pub use delentropy::DelentropyCalculator;
pub use error::{EntropyError, EntropyResult};
pub use table::EntropyTable;
