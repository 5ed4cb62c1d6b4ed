//! # numerics Core
//! This library contains the numerical routines used by statistics code to invert
//! functions: scalar root finding, and the special functions which typically need
//! inverting.
//!
//! This crate is left as a stand alone Rust crate, completely independent of the
//! Python wrappers. This is done intentionally, as it makes these functions available
//! outside of the python module so that wrappers may be written for other languages
//! later.
//!

pub mod fitting;
pub mod special;

/// Common useful imports
pub mod prelude {
    pub use crate::fitting::{
        ConvergenceError, Finder, FinderConfig, FinderOption, FittingResult, Homeier, Method,
        NewtonRaphson, bisect, find, try_bisect, try_find,
    };
    pub use crate::special::{
        beta, beta_incomplete, beta_incomplete_regular, binomial, ln_gamma, sign,
    };
}
