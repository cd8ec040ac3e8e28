//! The two request/response cycles of the program.
use super::isqrt;
use super::scalar_io::ScalarIo;
use std::io;

quick_error! {
    /// Error type for [`run`].
    #[derive(Debug)]
    pub enum Error {
        Io(err: io::Error) {
            from()
            display("i/o failure: {}", err)
        }
        Isqrt(err: isqrt::Error) {
            from()
            display("{}", err)
        }
    }
}

/// Read an integer and print its integer square root, then read a float and
/// print it doubled.  The two cycles are unrelated; each performs exactly
/// one read and one write, in that order.
///
/// The starting guess for the refinement is half the radicand, so a zero or
/// negative input surfaces as an [`isqrt::Error`] before anything is
/// printed for that cycle.
pub fn run<S: ScalarIo>(io: &mut S) -> Result<(), Error> {
    let num = io.read_int()?;
    let root = isqrt::isqrt(num, num / 2)?;
    io.print_int(root)?;

    let f = io.read_float()?;
    io.print_float(f * 2.0)?;
    Ok(())
}
