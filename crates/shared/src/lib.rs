pub mod emotion;
pub mod schemas;

pub use emotion::{classify, EmotionLabel, EmotionReport};
pub use schemas::{Validate, ValidationError};
