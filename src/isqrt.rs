//! Integer square roots by Heron (integer Newton) refinement.
use conv::ValueInto;

quick_error! {
    /// Contract violations detected before entering the refinement loop.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Error {
        /// The refinement step divides by the guess, so a zero or negative
        /// starting guess can never enter the loop.
        NonpositiveGuess {
            display("starting guess must be positive")
        }
        /// No integer square root exists for a negative radicand.
        NegativeRadicand(n: i64) {
            display("square root of negative number {}", n)
        }
    }
}

/// Shorthand for casting numbers.  Panics if out of range; callers validate
/// their inputs first.
fn cast<T: ValueInto<U>, U>(x: T) -> U {
    x.value_into().expect("integer conversion failure")
}

/// One Heron refinement step `(g + n / g) / 2` with truncating division.
///
/// Requires `g > 0` and that `g + n / g` does not overflow.  Both entry
/// points in this crate keep their arguments well inside that range.
pub fn refine(n: u64, g: u64) -> u64 {
    (g + n / g) / 2
}

/// Run the refinement to completion, counting steps.
/// Requires `g > 0`.
fn converge(n: u64, g: u64) -> (u64, u32) {
    if n == 0 {
        // the loop below would halve any guess down to 0 and then divide
        // by it, so a zero radicand never enters the loop
        return (0, 0);
    }
    // One unconditional step first: `(g + n/g) / 2 ≥ ⌊√n⌋` for any positive
    // integer `g` (arithmetic mean ≥ geometric mean), so after it the guess
    // sits at or above the root no matter how bad the seed was.
    let mut r = refine(n, g);
    let mut steps = 1;
    loop { // [invariant] n > 0 && r ≥ ⌊√n⌋ && r > 0
        let r_new = refine(n, r);
        steps += 1;
        // above the root the sequence strictly decreases; the first
        // non-decreasing step means r has landed exactly on ⌊√n⌋
        if r_new >= r {
            return (r, steps);
        }
        r = r_new;
    }
}

/// Calculate `⌊√n⌋` by refining the caller's starting guess `g`.
///
/// The result does not depend on the guess, only the number of refinement
/// steps does.  Rejects a negative radicand and a nonpositive guess.
pub fn isqrt(n: i64, g: i64) -> Result<i64, Error> {
    isqrt_steps(n, g).map(|(r, _)| r)
}

/// Like [`isqrt`], but also reports how many refinement steps were taken.
pub fn isqrt_steps(n: i64, g: i64) -> Result<(i64, u32), Error> {
    if n < 0 {
        return Err(Error::NegativeRadicand(n));
    }
    if g <= 0 {
        return Err(Error::NonpositiveGuess);
    }
    let (r, steps) = converge(cast(n), cast(g));
    Ok((cast(r), steps))
}

/// Calculate `⌊√n⌋` over the full `u64` range, seeding the refinement from
/// the floating-point square root.
pub fn isqrt_u64(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    // within a few ulps of the true root; the loop tolerates the slack
    let seed = (n as f64).sqrt() as u64;
    converge(n, seed.max(1)).0
}

#[cfg(test)]
const RNG_SEED: [u8; 16] = [
    0x9c, 0x21, 0x5e, 0xd3, 0x4b, 0x0a, 0xf1, 0x77, 0x62, 0x8d, 0x10, 0xe5, 0x3f, 0xc8, 0x94, 0x06,
];

#[test]
fn test_floor_root() {
    for n in 0 .. 65535 {
        let r = isqrt(n, (n / 2).max(1)).unwrap();
        assert!(r * r <= n, "⌊√{n}⌋^2 ≤ {n}", n = n);
        assert!((r + 1) * (r + 1) > n, "(⌊√{n}⌋ + 1)^2 > {n}", n = n);
    }
}

#[test]
fn test_near_perfect_squares() {
    for r in 0 .. 65535u64 {
        if r > 0 {
            let n = r * r - 1;
            assert_eq!(isqrt_u64(n), r - 1, "⌊√{}⌋ == {}", n, r - 1);
        }
        let n = r * r;
        assert_eq!(isqrt_u64(n), r, "⌊√{}⌋ == {}", n, r);
        if r > 0 {
            let n = r * r + 1;
            assert_eq!(isqrt_u64(n), r, "⌊√{}⌋ == {}", n, r);
        }
    }
}

#[test]
fn test_extremes() {
    for r in 4294967000u64 .. 4294967296 {
        let n = r * r - 1;
        assert_eq!(isqrt_u64(n), r - 1, "⌊√{}⌋ == {}", n, r - 1);
        let n = r * r;
        assert_eq!(isqrt_u64(n), r, "⌊√{}⌋ == {}", n, r);
    }
    for n in 0xffffffffffffff00u64 ..= 0xffffffffffffffff {
        assert_eq!(isqrt_u64(n), 0xffffffff);
    }
    let max = i64::max_value();
    assert_eq!(isqrt(max, max / 2).unwrap(), 3037000499);
}

#[test]
fn test_guess_independence() {
    use rand::{Rng, SeedableRng};
    let mut rng = rand_xorshift::XorShiftRng::from_seed(RNG_SEED);
    for _ in 0 .. 2000 {
        let n = rng.gen_range(0 .. 1i64 << 32);
        let expected = isqrt(n, 1).unwrap();
        for _ in 0 .. 8 {
            let g = rng.gen_range(1 .. 1i64 << 32);
            assert_eq!(isqrt(n, g).unwrap(), expected,
                       "⌊√{}⌋ from guess {}", n, g);
        }
    }
}

#[test]
fn test_small_radicands_all_guesses() {
    // radicand 3 makes the naive fixed-point recursion cycle between 1 and
    // 2, so the small cases get every guess up to 10
    for n in 0 .. 5 {
        let expected = [0, 1, 1, 1, 2][n as usize];
        for g in 1 .. 11 {
            assert_eq!(isqrt(n, g).unwrap(), expected);
        }
    }
}

#[test]
fn test_step_bound() {
    use rand::{Rng, SeedableRng};
    let mut rng = rand_xorshift::XorShiftRng::from_seed(RNG_SEED);
    for _ in 0 .. 2000 {
        let n = rng.gen_range(0 .. 1i64 << 32);
        let g = rng.gen_range(1 .. 1i64 << 32);
        let (_, steps) = isqrt_steps(n, g).unwrap();
        assert!(steps < 40, "√{} from guess {} took {} steps", n, g, steps);
    }
    assert!(isqrt_steps(1, (1 << 31) - 1).unwrap().1 < 40);
}

#[test]
fn test_fixed_point_is_stable() {
    for n in 1 .. 4096u64 {
        let r = isqrt_u64(n);
        if refine(n, r) == r {
            assert_eq!(refine(n, refine(n, r)), r);
        }
    }
}

#[test]
fn test_contract_violations() {
    assert_eq!(isqrt(16, 0), Err(Error::NonpositiveGuess));
    assert_eq!(isqrt(0, 0), Err(Error::NonpositiveGuess));
    assert_eq!(isqrt(7, -1), Err(Error::NonpositiveGuess));
    assert_eq!(isqrt(-5, 2), Err(Error::NegativeRadicand(-5)));
    // a zero radicand with a valid guess is fine
    assert_eq!(isqrt(0, 7), Ok(0));
}
