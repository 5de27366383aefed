/*
    Top-level
*/

mod dyadic;
mod error;
mod ops;
mod rational;
mod round;

pub mod ieee754;
pub use dyadic::*;
pub use error::*;
pub use ops::*;
pub use rational::*;
pub use round::*;
