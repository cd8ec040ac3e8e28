extern crate conv;
#[macro_use]
extern crate quick_error;
#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate rand_xorshift;

pub mod isqrt;
pub mod run;
pub mod scalar_io;
