//! Effective style records.

mod effective;

pub use effective::EffectiveStyle;
