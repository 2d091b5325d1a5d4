//! Font source I/O

pub mod conversions;
pub mod ufo;
