//! Face trait implementations, one module per panel

pub mod epaper;
pub mod lcd;
