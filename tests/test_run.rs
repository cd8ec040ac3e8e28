extern crate heron;

use heron::isqrt;
use heron::run::{run, Error};
use heron::scalar_io::{FixedIo, StreamIo};
use std::io::Cursor;

fn run_fixed(num: i64, f: f64) -> FixedIo {
    let mut io = FixedIo::new(vec![num], vec![f]);
    run(&mut io).unwrap();
    io
}

#[test]
fn test_sixteen_and_a_quarter() {
    let io = run_fixed(16, 1.25);
    assert_eq!(io.printed_ints, [4]);
    assert_eq!(io.printed_floats, [2.5]);
    assert!(io.ints.is_empty());
    assert!(io.floats.is_empty());
}

#[test]
fn test_floor_of_irrationals() {
    assert_eq!(run_fixed(2, 0.0).printed_ints, [1]);
    assert_eq!(run_fixed(99, 0.0).printed_ints, [9]);
}

#[test]
fn test_float_doubling_is_exact() {
    assert_eq!(run_fixed(4, 3.5).printed_floats, [7.0]);
    assert_eq!(run_fixed(4, 0.0).printed_floats, [0.0]);
    assert_eq!(run_fixed(4, -0.75).printed_floats, [-1.5]);
}

#[test]
fn test_zero_input_violates_guess_precondition() {
    // radicand 0 makes the derived guess 0, which the refinement rejects
    // before any output is produced
    let mut io = FixedIo::new(vec![0], vec![1.25]);
    match run(&mut io) {
        Err(Error::Isqrt(isqrt::Error::NonpositiveGuess)) => {}
        r => panic!("expected a guess violation, got {:?}", r),
    }
    assert!(io.printed_ints.is_empty());
    assert!(io.printed_floats.is_empty());
    assert_eq!(io.floats.len(), 1);
}

#[test]
fn test_negative_input_rejected() {
    let mut io = FixedIo::new(vec![-9], vec![1.25]);
    match run(&mut io) {
        Err(Error::Isqrt(isqrt::Error::NegativeRadicand(-9))) => {}
        r => panic!("expected a domain violation, got {:?}", r),
    }
    assert!(io.printed_ints.is_empty());
}

#[test]
fn test_missing_input_is_an_io_error() {
    let mut io = FixedIo::new(vec![25], vec![]);
    match run(&mut io) {
        Err(Error::Io(_)) => {}
        r => panic!("expected an i/o error, got {:?}", r),
    }
    // the integer cycle already completed
    assert_eq!(io.printed_ints, [5]);
}

#[test]
fn test_streams_end_to_end() {
    let mut out = Vec::new();
    {
        let mut io = StreamIo::new(Cursor::new(b"16 1.25".to_vec()), &mut out);
        run(&mut io).unwrap();
    }
    assert_eq!(out, b"4\n2.5\n");
}
