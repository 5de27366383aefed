use exact_float::ieee754::constants::*;
use exact_float::ieee754::*;
use exact_float::{Error, Rational, RoundingMode};
use num_bigint::BigInt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_finite_f64(rng: &mut ChaCha8Rng) -> f64 {
    loop {
        let x = f64::from_bits(rng.random::<u64>());
        if x.is_finite() {
            return x;
        }
    }
}

fn random_finite_f32(rng: &mut ChaCha8Rng) -> f32 {
    loop {
        let x = f32::from_bits(rng.random::<u32>());
        if x.is_finite() {
            return x;
        }
    }
}

#[test]
fn parameters() {
    assert_eq!(<f64 as Ieee754>::N, 64);
    assert_eq!(<f64 as Ieee754>::E, 11);
    assert_eq!(<f64 as Ieee754>::PREC, 53);
    assert_eq!(<f64 as Ieee754>::M, 52);
    assert_eq!(<f64 as Ieee754>::EMAX, 1023);
    assert_eq!(<f64 as Ieee754>::EMIN, -1022);
    assert_eq!(<f64 as Ieee754>::EXPMAX, 971);
    assert_eq!(<f64 as Ieee754>::EXPMIN, -1074);
    assert_eq!(<f64 as Ieee754>::BIAS, 1023);

    assert_eq!(<f32 as Ieee754>::N, 32);
    assert_eq!(<f32 as Ieee754>::E, 8);
    assert_eq!(<f32 as Ieee754>::PREC, 24);
    assert_eq!(<f32 as Ieee754>::M, 23);
    assert_eq!(<f32 as Ieee754>::EMAX, 127);
    assert_eq!(<f32 as Ieee754>::EMIN, -126);
    assert_eq!(<f32 as Ieee754>::EXPMAX, 104);
    assert_eq!(<f32 as Ieee754>::EXPMIN, -149);
    assert_eq!(<f32 as Ieee754>::BIAS, 127);
}

#[test]
fn split_and_decode() {
    assert_eq!(1.0_f64.split(), (false, 1023, 0));
    assert_eq!((-2.0_f32).split(), (true, 128, 0));
    assert_eq!(<f64 as Ieee754>::pack(false, 1023, 1 << 51), 1.5);

    assert_eq!(1.0_f64.decode(), Some((false, -52, 1 << 52)));
    assert_eq!(f64::MIN_POSITIVE.decode(), Some((false, -1074, 1 << 52)));
    assert_eq!(F64_MIN_SUBNORMAL.decode(), Some((false, -1074, 1)));
    assert_eq!((-0.0_f64).decode(), Some((true, -1074, 0)));
    assert_eq!(0.1_f32.decode(), Some((false, -27, 13421773)));
    assert_eq!(f64::INFINITY.decode(), None);
    assert_eq!(f32::NAN.decode(), None);

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..1000 {
        let x = random_finite_f64(&mut rng);
        let (s, exp, c) = x.decode().unwrap();
        let y = <f64 as Ieee754>::encode(s, exp, c);
        assert_eq!(x.to_bits(), y.to_bits(), "decode/encode mismatch: {:e}", x);
    }
}

#[test]
fn special_values() {
    assert_eq!(<f64 as Ieee754>::max_finite(false), f64::MAX);
    assert_eq!(<f64 as Ieee754>::max_finite(true), f64::MIN);
    assert_eq!(<f64 as Ieee754>::min_normal(false), f64::MIN_POSITIVE);
    assert_eq!(<f64 as Ieee754>::infinity(true), f64::NEG_INFINITY);
    assert_eq!(<f64 as Ieee754>::zero(true).to_bits(), 0x8000_0000_0000_0000);
    assert_eq!(<f32 as Ieee754>::max_finite(false), f32::MAX);
    assert_eq!(<f32 as Ieee754>::min_subnormal(false), F32_MIN_SUBNORMAL);
    assert_eq!(<f32 as Ieee754>::max_subnormal(false), F32_MAX_SUBNORMAL);
}

#[test]
fn set_bits() {
    assert_eq!(highest_set_bit(0), Ok(-1));
    assert_eq!(highest_set_bit(1), Ok(0));
    assert_eq!(highest_set_bit(1000), Ok(9));
    assert_eq!(highest_set_bit(i64::MAX), Ok(62));
    assert!(matches!(highest_set_bit(-1), Err(Error::Domain(_))));
    assert!(matches!(highest_set_bit(i64::MIN), Err(Error::Domain(_))));

    assert_eq!(lowest_set_bit(0), -1);
    assert_eq!(lowest_set_bit(1), 0);
    assert_eq!(lowest_set_bit(1000), 3);
    assert_eq!(lowest_set_bit(-1), 0);
    assert_eq!(lowest_set_bit(i64::MIN), 63);
}

#[test]
fn powers_of_two() {
    assert_eq!(pow2(0), 1.0);
    assert_eq!(pow2(10), 1024.0);
    assert_eq!(pow2(-1), 0.5);
    assert_eq!(pow2(1023), f64::MAX / (2.0 - f64::EPSILON));
    assert_eq!(pow2(1024), f64::INFINITY);
    assert_eq!(pow2(i32::MAX), f64::INFINITY);
    assert_eq!(pow2(-1022), f64::MIN_POSITIVE);
    assert_eq!(pow2(-1023), f64::MIN_POSITIVE / 2.0);
    assert_eq!(pow2(-1074).to_bits(), 1);
    assert_eq!(pow2(-1075), 0.0);
    assert_eq!(pow2(i32::MIN), 0.0);

    for e in -1074..=1023 {
        let r = Rational::from(1).multiply_two_power(e as i64);
        assert_eq!(pow2(e), r.to_f64(), "2^{}", e);
    }
}

#[test]
fn adjacent_values() {
    assert_eq!(next(1.0_f64), 1.0 + f64::EPSILON);
    assert_eq!(previous(1.0_f64), 1.0 - f64::EPSILON / 2.0);
    assert_eq!(next(1.0_f32), 1.0 + f32::EPSILON);

    // signed zeros
    assert_eq!(next(-0.0_f64).to_bits(), 1);
    assert_eq!(next(0.0_f64).to_bits(), 1);
    assert_eq!(previous(0.0_f64).to_bits(), 0x8000_0000_0000_0001);
    assert_eq!(previous(-0.0_f64).to_bits(), 0x8000_0000_0000_0001);
    assert_eq!(next(-0.0_f32), F32_MIN_SUBNORMAL);
    assert_eq!(previous(0.0_f32), -F32_MIN_SUBNORMAL);
    assert_eq!(next(-F64_MIN_SUBNORMAL).to_bits(), 0x8000_0000_0000_0000);
    assert_eq!(previous(F64_MIN_SUBNORMAL).to_bits(), 0);

    // saturation
    assert_eq!(next(f64::MAX), f64::INFINITY);
    assert_eq!(next(f64::INFINITY), f64::INFINITY);
    assert_eq!(previous(-f64::MAX), f64::NEG_INFINITY);
    assert_eq!(previous(f64::NEG_INFINITY), f64::NEG_INFINITY);
    assert_eq!(next(f64::NEG_INFINITY), -f64::MAX);
    assert_eq!(previous(f64::INFINITY), f64::MAX);
    assert_eq!(next(f32::MAX), f32::INFINITY);
    assert_eq!(previous(-f32::MAX), f32::NEG_INFINITY);
    assert!(next(f64::NAN).is_nan());
    assert!(previous(f32::NAN).is_nan());

    // binade boundaries
    assert_eq!(next(F64_MAX_SUBNORMAL), F64_MIN_NORMAL);
    assert_eq!(previous(F64_MIN_NORMAL), F64_MAX_SUBNORMAL);
    assert_eq!(previous(2.0_f64), 2.0 - f64::EPSILON);

    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..1000 {
        let x = random_finite_f64(&mut rng);
        if x.abs() == f64::MAX {
            continue;
        }
        assert_eq!(next(previous(x)), x, "next(previous({:e}))", x);
        assert_eq!(previous(next(x)), x, "previous(next({:e}))", x);
        assert!(previous(x) < x && x < next(x));

        let y = random_finite_f32(&mut rng);
        if y.abs() == f32::MAX {
            continue;
        }
        assert_eq!(next(previous(y)), y, "next(previous({:e}))", y);
        assert_eq!(previous(next(y)), y, "previous(next({:e}))", y);
    }
}

#[test]
fn floors() {
    assert_eq!(floor(2.5_f64), 2.0);
    assert_eq!(floor(-2.5_f64), -3.0);
    assert_eq!(floor(-3.0_f64), -3.0);
    assert_eq!(floor(0.7_f64).to_bits(), 0);
    assert_eq!(floor(0.0_f64).to_bits(), 0);
    assert_eq!(floor(-0.0_f64).to_bits(), 0x8000_0000_0000_0000);
    assert_eq!(floor(-F64_MIN_SUBNORMAL), -1.0);
    assert_eq!(floor(-0.5_f32), -1.0);
    assert_eq!(floor(4503599627370495.5_f64), 4503599627370495.0);
    assert_eq!(floor(-4503599627370495.5_f64), -4503599627370496.0);
    assert_eq!(floor(f64::MAX), f64::MAX);
    assert_eq!(floor(f64::NEG_INFINITY), f64::NEG_INFINITY);

    let nan = f64::from_bits(0x7ff8_0000_0000_1234);
    assert_eq!(floor(nan).to_bits(), nan.to_bits());
    let nan = f32::from_bits(0xffc0_0042);
    assert_eq!(floor(nan).to_bits(), nan.to_bits());

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..1000 {
        let x = random_finite_f64(&mut rng) / pow2(rng.random_range(0..1000));
        assert_eq!(floor(x).to_bits(), x.floor().to_bits(), "floor({:e})", x);

        let y = random_finite_f32(&mut rng);
        assert_eq!(floor(y).to_bits(), y.floor().to_bits(), "floor({:e})", y);
    }
}

#[test]
fn intervals() {
    assert_eq!(double_interval(0), (0.0, 0.0));
    assert_eq!(double_interval(-12345), (-12345.0, -12345.0));
    assert_eq!(double_interval(i64::MIN), (-pow2(63), -pow2(63)));

    let two53 = 1_i64 << 53;
    assert_eq!(double_interval(two53 + 1), (pow2(53), pow2(53) + 2.0));
    assert_eq!(double_interval(two53 + 3), (pow2(53) + 2.0, pow2(53) + 4.0));
    assert_eq!(double_interval(-(two53 + 1)), (-pow2(53) - 2.0, -pow2(53)));
    assert_eq!(double_interval(i64::MAX), (previous(pow2(63)), pow2(63)));

    assert_eq!(float_interval(1.0), (1.0, 1.0));
    assert_eq!(float_interval(0.1), (previous(0.1_f32), 0.1_f32));
    assert_eq!(float_interval(1e300), (f32::MAX, f32::INFINITY));
    assert_eq!(float_interval(-1e300), (f32::NEG_INFINITY, -f32::MAX));
    assert_eq!(float_interval(f64::INFINITY), (f32::INFINITY, f32::INFINITY));
    assert_eq!(float_interval(1e-50), (0.0, F32_MIN_SUBNORMAL));
    let (lo, hi) = float_interval(-1e-50);
    assert_eq!(lo, -F32_MIN_SUBNORMAL);
    assert_eq!(hi.to_bits(), 0x8000_0000);
    let (lo, hi) = float_interval(f64::NAN);
    assert!(lo.is_nan() && hi.is_nan());

    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..1000 {
        let n = rng.random::<i64>() >> rng.random_range(0..64_u32);
        let (lo, hi) = double_interval(n);
        let exact = Rational::from(n);
        assert!(Rational::from_float(lo).unwrap() <= exact, "{} below {:e}", n, lo);
        assert!(Rational::from_float(hi).unwrap() >= exact, "{} above {:e}", n, hi);
        assert!(lo == hi || next(lo) == hi, "{} not tight: [{:e}, {:e}]", n, lo, hi);

        let d = random_finite_f64(&mut rng) / pow2(rng.random_range(0..1000));
        let (lo, hi) = float_interval(d);
        assert!(lo as f64 <= d && d <= hi as f64, "{:e} not in [{:e}, {:e}]", d, lo, hi);
        assert!(lo == hi || next(lo) == hi, "{:e} not tight: [{:e}, {:e}]", d, lo, hi);
    }
}

#[test]
fn exact_integers() {
    assert!(is_exact_long(pow2(53)));
    assert!(is_exact_long(pow2(53) - 1.0));
    assert!(is_exact_long(pow2(52)));
    assert!(is_exact_long(pow2(52) - 1.0));
    assert!(is_exact_long(-pow2(53)));
    assert!(is_exact_long(0.0_f64));
    assert!(is_exact_long(-0.0_f64));
    assert!(is_exact_long(-17.0_f64));
    assert!(!is_exact_long(next(pow2(53))));
    assert!(!is_exact_long(previous(-pow2(53))));
    assert!(!is_exact_long(pow2(54)));
    assert!(!is_exact_long(0.5_f64));
    assert!(!is_exact_long(pow2(52) - 0.5));
    assert!(!is_exact_long(F64_MIN_SUBNORMAL));
    assert!(!is_exact_long(f64::NAN));
    assert!(!is_exact_long(f64::INFINITY));
    assert!(!is_exact_long(f64::NEG_INFINITY));

    assert!(is_exact_long(16777216.0_f32));
    assert!(is_exact_long(16777215.0_f32));
    assert!(!is_exact_long(16777218.0_f32));
    assert!(!is_exact_long(0.25_f32));
}

#[test]
fn integer_float_comparison() {
    assert_eq!(less_than_or_equal(1, 1.0_f64), Ok(true));
    assert_eq!(less_than_or_equal(1, 1.5_f64), Ok(true));
    assert_eq!(less_than_or_equal(2, 1.5_f64), Ok(false));
    assert_eq!(less_than_or_equal(-2, -1.5_f64), Ok(true));
    assert_eq!(less_than_or_equal(-1, -1.5_f64), Ok(false));
    assert_eq!(less_than_or_equal(0, -0.0_f64), Ok(true));
    assert_eq!(less_than_or_equal(0, -F64_MIN_SUBNORMAL), Ok(false));

    // i64::MAX converts to 2^63, which is strictly greater
    assert_eq!(less_than_or_equal(i64::MAX, i64::MAX as f64), Ok(true));
    assert_eq!(less_than_or_equal(i64::MAX, previous(pow2(63))), Ok(false));
    assert_eq!(less_than_or_equal(i64::MIN, -pow2(63)), Ok(true));
    assert_eq!(less_than_or_equal(i64::MIN, previous(-pow2(63))), Ok(false));
    assert_eq!(less_than_or_equal((1 << 53) + 1, pow2(53)), Ok(false));

    assert_eq!(less_than_or_equal(i64::MAX, f64::INFINITY), Ok(true));
    assert_eq!(less_than_or_equal(i64::MIN, f64::NEG_INFINITY), Ok(false));
    assert_eq!(less_than_or_equal(16777217, 16777216.0_f32), Ok(false));
    assert!(matches!(less_than_or_equal(0, f64::NAN), Err(Error::Domain(_))));
    assert!(matches!(less_than_or_equal(0, f32::NAN), Err(Error::Domain(_))));
}

#[test]
fn minimal_bytes() {
    assert_eq!(get_bytes(0), vec![0x00]);
    assert_eq!(get_bytes(127), vec![0x7F]);
    assert_eq!(get_bytes(128), vec![0x00, 0x80]);
    assert_eq!(get_bytes(-1), vec![0xFF]);
    assert_eq!(get_bytes(-128), vec![0x80]);
    assert_eq!(get_bytes(-129), vec![0xFF, 0x7F]);
    assert_eq!(get_bytes(i64::MIN), vec![0x80, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(
        get_bytes(i64::MAX),
        vec![0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
    );

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..1000 {
        let n = rng.random::<i64>() >> rng.random_range(0..64_u32);
        let bytes = get_bytes(n);
        assert_eq!(BigInt::from_signed_bytes_be(&bytes), BigInt::from(n));
        assert_eq!(bytes, BigInt::from(n).to_signed_bytes_be(), "{}", n);
    }
}

#[test]
fn compensated_sum() {
    assert_eq!(kahan_summation(Vec::new()), 0.0);
    assert_eq!(kahan_summation(vec![1.5, 2.25]), 3.75);

    // naive summation loses both halves of an ULP
    let values = vec![1.0, pow2(-53), pow2(-53)];
    assert_eq!(values.iter().sum::<f64>(), 1.0);
    assert_eq!(kahan_summation(values), 1.0 + pow2(-52));
}

#[test]
fn reference_constants() {
    assert_eq!(F32_MIN_SUBNORMAL.to_bits(), 0x0000_0001);
    assert_eq!(F32_MAX_SUBNORMAL.to_bits(), 0x007F_FFFF);
    assert_eq!(F32_MIN_NORMAL.to_bits(), 0x0080_0000);
    assert_eq!(F64_MIN_SUBNORMAL.to_bits(), 0x0000_0000_0000_0001);
    assert_eq!(F64_MAX_SUBNORMAL.to_bits(), 0x000F_FFFF_FFFF_FFFF);
    assert_eq!(F64_MIN_NORMAL.to_bits(), 0x0010_0000_0000_0000);

    assert_eq!(F32_OVERFLOW_THRESHOLD, pow2(128) - pow2(103));
    assert_eq!(F32_OVERFLOW_THRESHOLD as f32, f32::INFINITY);
    assert_eq!(previous(F32_OVERFLOW_THRESHOLD) as f32, f32::MAX);
    assert_eq!(F32_UNDERFLOW_THRESHOLD, pow2(-150));
    assert_eq!(F32_UNDERFLOW_THRESHOLD as f32, 0.0);
    assert_eq!(next(F32_UNDERFLOW_THRESHOLD) as f32, F32_MIN_SUBNORMAL);

    assert_eq!(F64_OVERFLOW_THRESHOLD.to_f64(), f64::INFINITY);
    let below = &*F64_OVERFLOW_THRESHOLD - &Rational::from(1);
    assert_eq!(below.to_f64(), f64::MAX);
    assert_eq!(F64_UNDERFLOW_THRESHOLD.to_f64(), 0.0);
    assert_eq!(
        F64_UNDERFLOW_THRESHOLD.round_to::<f64>(RoundingMode::Ceiling),
        F64_MIN_SUBNORMAL
    );
}
