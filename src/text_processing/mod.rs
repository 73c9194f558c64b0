pub mod number_normalization;
pub mod whitespace;

pub use number_normalization::{normalize, NormalizedNumber, NumberNormalizer};
