/// Saturating 16/32-bit fixed-point operators.
///
/// These follow the ITU-T basic-operator semantics: 16-bit values
/// saturate at [-32768, 32767], 32-bit accumulators at [-2^31, 2^31-1],
/// and shifts by a negative count reverse direction. Every DSP stage in
/// the codec is written against these so the output is bit-exact across
/// platforms.

#[inline]
pub fn saturate(x: i32) -> i16 {
    x.clamp(-32768, 32767) as i16
}

/// 16-bit saturating add.
#[inline]
pub fn add(a: i16, b: i16) -> i16 {
    saturate(a as i32 + b as i32)
}

/// 16-bit saturating subtract.
#[inline]
pub fn sub(a: i16, b: i16) -> i16 {
    saturate(a as i32 - b as i32)
}

/// 16-bit negate; -32768 saturates to 32767.
#[inline]
pub fn negate(a: i16) -> i16 {
    if a == i16::MIN { i16::MAX } else { -a }
}

/// 16-bit absolute value; -32768 saturates to 32767.
#[inline]
pub fn abs_s(a: i16) -> i16 {
    if a == i16::MIN { i16::MAX } else { a.abs() }
}

/// 16-bit left shift with saturation. Negative counts shift right.
#[inline]
pub fn shl(a: i16, n: i16) -> i16 {
    if n < 0 {
        return shr(a, -n);
    }
    if n > 15 {
        return if a == 0 {
            0
        } else if a > 0 {
            32767
        } else {
            -32768
        };
    }
    saturate((a as i32) << n)
}

/// 16-bit arithmetic right shift. Negative counts shift left; counts of
/// 15 or more collapse to the sign.
#[inline]
pub fn shr(a: i16, n: i16) -> i16 {
    if n < 0 {
        return shl(a, -n);
    }
    if n >= 15 {
        return if a < 0 { -1 } else { 0 };
    }
    a >> n
}

/// Q15 multiply: (a * b) >> 15 with saturation.
#[inline]
pub fn mult(a: i16, b: i16) -> i16 {
    saturate((a as i32 * b as i32) >> 15)
}

/// 32-bit saturating add.
#[inline]
pub fn l_add(a: i32, b: i32) -> i32 {
    a.saturating_add(b)
}

/// 32-bit saturating subtract.
#[inline]
pub fn l_sub(a: i32, b: i32) -> i32 {
    a.saturating_sub(b)
}

/// Doubling multiply: 2 * a * b as a 32-bit value with saturation.
#[inline]
pub fn l_mult(a: i16, b: i16) -> i32 {
    ((a as i64 * b as i64) << 1).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Plain multiply: a * b as a 32-bit value.
#[inline]
pub fn l_mult0(a: i16, b: i16) -> i32 {
    a as i32 * b as i32
}

/// Multiply-accumulate with the doubling multiply.
#[inline]
pub fn l_mac(acc: i32, a: i16, b: i16) -> i32 {
    l_add(acc, l_mult(a, b))
}

/// Multiply-accumulate without doubling.
#[inline]
pub fn l_mac0(acc: i32, a: i16, b: i16) -> i32 {
    l_add(acc, l_mult0(a, b))
}

/// 32-bit left shift with saturation. Negative counts shift right.
#[inline]
pub fn l_shl(a: i32, n: i16) -> i32 {
    if n < 0 {
        return l_shr(a, -n);
    }
    if n >= 31 {
        return if a == 0 { 0 } else if a > 0 { i32::MAX } else { i32::MIN };
    }
    ((a as i64) << n).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// 32-bit arithmetic right shift. Negative counts shift left; counts of
/// 31 or more collapse to the sign.
#[inline]
pub fn l_shr(a: i32, n: i16) -> i32 {
    if n < 0 {
        return l_shl(a, -n);
    }
    if n >= 31 {
        return if a < 0 { -1 } else { 0 };
    }
    a >> n
}

/// Low 16 bits of an accumulator.
#[inline]
pub fn extract_l(a: i32) -> i16 {
    a as i16
}

/// High 16 bits of an accumulator.
#[inline]
pub fn extract_h(a: i32) -> i16 {
    (a >> 16) as i16
}

/// Round an accumulator into its high half: add 0x8000, take the top.
#[inline]
pub fn itu_round(a: i32) -> i16 {
    extract_h(l_add(a, 0x8000))
}

/// Left-shift count that normalizes `a` into [0x4000_0000, 0x7FFF_FFFF]
/// (mirrored for negative values). Zero normalizes to zero.
#[inline]
pub fn norm_l(a: i32) -> i16 {
    if a == 0 {
        return 0;
    }
    let mut x = if a < 0 { !a } else { a };
    let mut n = 0i16;
    while x < 0x4000_0000 && n < 31 {
        x <<= 1;
        n += 1;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_saturates() {
        assert_eq!(add(32000, 32000), 32767);
        assert_eq!(add(-32000, -32000), -32768);
        assert_eq!(add(1234, -234), 1000);
    }

    #[test]
    fn test_negate_min() {
        assert_eq!(negate(-32768), 32767);
        assert_eq!(negate(5), -5);
        assert_eq!(abs_s(-32768), 32767);
        assert_eq!(abs_s(-7), 7);
    }

    #[test]
    fn test_shifts_reverse_on_negative_count() {
        assert_eq!(shl(100, -2), shr(100, 2));
        assert_eq!(shr(100, -2), shl(100, 2));
        assert_eq!(l_shl(1000, -3), l_shr(1000, 3));
    }

    #[test]
    fn test_shr_collapses_to_sign() {
        assert_eq!(shr(-5, 15), -1);
        assert_eq!(shr(5, 15), 0);
        assert_eq!(l_shr(-5, 31), -1);
        assert_eq!(l_shr(5, 31), 0);
    }

    #[test]
    fn test_shl_saturates() {
        assert_eq!(shl(0x4000, 2), 32767);
        assert_eq!(shl(-0x4000, 2), -32768);
        assert_eq!(shl(3, 2), 12);
    }

    #[test]
    fn test_l_mult_doubles_and_saturates() {
        assert_eq!(l_mult(2, 3), 12);
        assert_eq!(l_mult(-32768, -32768), i32::MAX);
        assert_eq!(l_mult0(-32768, -32768), 1 << 30);
    }

    #[test]
    fn test_round_picks_nearest() {
        assert_eq!(itu_round(0x0001_8000), 2);
        assert_eq!(itu_round(0x0001_7FFF), 1);
        assert_eq!(itu_round(-0x0001_8000), -1);
    }

    #[test]
    fn test_norm_l_known_values() {
        assert_eq!(norm_l(0), 0);
        assert_eq!(norm_l(1), 30);
        assert_eq!(norm_l(0x4000_0000), 0);
        assert_eq!(norm_l(-1), 31);
        assert_eq!(norm_l(-0x4000_0000), 1);
        assert_eq!(l_shl(0x0000_5000, norm_l(0x0000_5000)), 0x5000_0000);
    }

    #[test]
    fn test_mult_q15() {
        assert_eq!(mult(16384, 16384), 8192);
        assert_eq!(mult(-32768, -32768), 32767);
    }
}
