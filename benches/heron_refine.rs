#![feature(test)]

extern crate heron;
extern crate rand;
extern crate rand_xorshift;
extern crate test;

use heron::isqrt::{isqrt, isqrt_u64};
use rand::{Rng, SeedableRng};

const RNG_SEED: [u8; 16] = [
    0x9c, 0x21, 0x5e, 0xd3, 0x4b, 0x0a, 0xf1, 0x77, 0x62, 0x8d, 0x10, 0xe5, 0x3f, 0xc8, 0x94, 0x06,
];

#[bench]
fn bench_isqrt_u64_full_range(bencher: &mut test::Bencher) {
    let mut rng = rand_xorshift::XorShiftRng::from_seed(RNG_SEED);
    let ns: Vec<u64> = (0 .. 1024).map(|_| rng.gen()).collect();
    bencher.iter(|| {
        let mut acc = 0u64;
        for &n in &ns {
            acc = acc.wrapping_add(isqrt_u64(n));
        }
        acc
    });
}

#[bench]
fn bench_isqrt_half_radicand_guess(bencher: &mut test::Bencher) {
    let mut rng = rand_xorshift::XorShiftRng::from_seed(RNG_SEED);
    let ns: Vec<i64> = (0 .. 1024).map(|_| rng.gen_range(2 .. 1i64 << 32)).collect();
    bencher.iter(|| {
        let mut acc = 0i64;
        for &n in &ns {
            acc = acc.wrapping_add(isqrt(n, n / 2).unwrap());
        }
        acc
    });
}
