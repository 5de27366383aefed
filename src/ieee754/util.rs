/*
    Integer utilities
*/

use crate::{Error, Result};

/// Returns the index of the most significant set bit of `x`,
/// or -1 if `x` is zero.
/// Fails with a domain error for negative `x`.
pub fn highest_set_bit(x: i64) -> Result<i32> {
    if x < 0 {
        log::debug!("highest_set_bit called with negative argument {}", x);
        return Err(Error::Domain("highest set bit of a negative integer"));
    }
    Ok(63 - x.leading_zeros() as i32)
}

/// Returns the index of the least significant set bit of `x`,
/// or -1 if `x` is zero.
pub fn lowest_set_bit(x: i64) -> i32 {
    if x == 0 {
        -1
    } else {
        x.trailing_zeros() as i32
    }
}

/// Returns the minimal big-endian two's-complement encoding of `n`.
/// The result decodes back to `n` with `BigInt::from_signed_bytes_be`.
pub fn get_bytes(n: i64) -> Vec<u8> {
    let bytes = n.to_be_bytes();
    let fill = if n < 0 { 0xFF } else { 0x00 };

    // a leading fill byte is redundant when the next byte
    // already carries the sign in its top bit
    let mut start = 0;
    while start < bytes.len() - 1
        && bytes[start] == fill
        && (bytes[start + 1] & 0x80) == (fill & 0x80)
    {
        start += 1;
    }
    bytes[start..].to_vec()
}

/// Sums `values` with Kahan's compensated summation.
pub fn kahan_summation<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut err = 0.0;
    for v in values {
        let y = v - err;
        let t = sum + y;
        err = (t - sum) - y;
        sum = t;
    }
    sum
}
