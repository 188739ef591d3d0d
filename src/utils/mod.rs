pub mod clock;
pub mod patch;
