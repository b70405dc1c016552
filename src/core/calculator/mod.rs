//! Pure earnings arithmetic. No I/O, full precision; rounding is left to
//! whoever displays the numbers.

pub mod earnings;
pub mod summary;
