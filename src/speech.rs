pub mod roster;
pub mod synth;
pub mod volume;
