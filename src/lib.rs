pub mod align;
pub mod error;
pub mod prelude;
pub mod prob;

#[macro_use]
extern crate approx;
