//! Structural passes shared by every conversion.

pub mod endlines;
pub mod verbatim;
