//! Scalar input and output at the program boundary.
//!
//! The orchestration in [`run`](../run/index.html) only ever sees the
//! [`ScalarIo`] trait, so the same code runs against real streams and
//! against a fixed-value harness in tests.
use std::collections::VecDeque;
use std::error::Error;
use std::io;
use std::str;

/// Helper function for creating `io::Error` with
/// `io::ErrorKind::InvalidData`.
pub fn invalid_data<E: Into<Box<dyn Error + Send + Sync>>>(error: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, error)
}

/// The four scalar operations at the program boundary.
pub trait ScalarIo {
    /// Return the next available integer value.
    fn read_int(&mut self) -> io::Result<i64>;
    /// Render an integer value.
    fn print_int(&mut self, value: i64) -> io::Result<()>;
    /// Return the next available floating-point value.
    fn read_float(&mut self) -> io::Result<f64>;
    /// Render a floating-point value.
    fn print_float(&mut self, value: f64) -> io::Result<()>;
}

/// Reads whitespace-separated tokens from a stream and writes one rendered
/// value per line.
#[derive(Debug)]
pub struct StreamIo<R, W> {
    reader: R,
    writer: W,
}

impl<R: io::BufRead, W: io::Write> StreamIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn next_token(&mut self) -> io::Result<Vec<u8>> {
        // skip leading whitespace
        loop {
            let skip = {
                let available = self.reader.fill_buf()?;
                if available.is_empty() {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "expected a value",
                    ));
                }
                match available.iter().position(|&c| !c.is_ascii_whitespace()) {
                    Some(0) => break,
                    Some(i) => i,
                    None => available.len(),
                }
            };
            self.reader.consume(skip);
        }
        // accumulate until the next whitespace or end of input
        let mut token = Vec::new();
        loop {
            let (used, done) = {
                let available = self.reader.fill_buf()?;
                match available.iter().position(|&c| c.is_ascii_whitespace()) {
                    Some(i) => {
                        token.extend_from_slice(&available[.. i]);
                        (i, true)
                    }
                    None => {
                        token.extend_from_slice(available);
                        (available.len(), available.is_empty())
                    }
                }
            };
            self.reader.consume(used);
            if done {
                return Ok(token);
            }
        }
    }

    fn next_parsed<T>(&mut self) -> io::Result<T>
        where T: str::FromStr,
              T::Err: Into<Box<dyn Error + Send + Sync>>,
    {
        let token = self.next_token()?;
        str::from_utf8(&token)
            .map_err(invalid_data)?
            .parse()
            .map_err(invalid_data)
    }
}

impl<R: io::BufRead, W: io::Write> ScalarIo for StreamIo<R, W> {
    fn read_int(&mut self) -> io::Result<i64> {
        self.next_parsed()
    }

    fn print_int(&mut self, value: i64) -> io::Result<()> {
        writeln!(self.writer, "{}", value)?;
        self.writer.flush()
    }

    fn read_float(&mut self) -> io::Result<f64> {
        self.next_parsed()
    }

    fn print_float(&mut self, value: f64) -> io::Result<()> {
        writeln!(self.writer, "{}", value)?;
        self.writer.flush()
    }
}

/// Fixed-value harness: inputs are popped from the queues, outputs are
/// recorded in order of arrival.
#[derive(Clone, Debug, Default)]
pub struct FixedIo {
    pub ints: VecDeque<i64>,
    pub floats: VecDeque<f64>,
    pub printed_ints: Vec<i64>,
    pub printed_floats: Vec<f64>,
}

impl FixedIo {
    pub fn new<I, F>(ints: I, floats: F) -> Self
        where I: IntoIterator<Item = i64>,
              F: IntoIterator<Item = f64>,
    {
        Self {
            ints: ints.into_iter().collect(),
            floats: floats.into_iter().collect(),
            printed_ints: Default::default(),
            printed_floats: Default::default(),
        }
    }
}

impl ScalarIo for FixedIo {
    fn read_int(&mut self) -> io::Result<i64> {
        self.ints.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "out of integer inputs")
        })
    }

    fn print_int(&mut self, value: i64) -> io::Result<()> {
        self.printed_ints.push(value);
        Ok(())
    }

    fn read_float(&mut self) -> io::Result<f64> {
        self.floats.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "out of float inputs")
        })
    }

    fn print_float(&mut self, value: f64) -> io::Result<()> {
        self.printed_floats.push(value);
        Ok(())
    }
}
