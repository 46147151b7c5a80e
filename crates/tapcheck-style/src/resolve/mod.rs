//! Style resolution engine.

mod cascade;
mod engine;

pub use cascade::cascade_declarations;
pub use engine::CascadeResolver;
