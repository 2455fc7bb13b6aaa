pub mod effect_trigger;

pub use effect_trigger::*;
