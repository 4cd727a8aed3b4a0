use crate::error::PoolError;
use solana_program::program_error::ProgramError;
use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer for widening price math
    pub struct U256(4);
}

/// Smallest sqrt price the downstream tick math supports (sqrt price at the
/// minimum tick). Anything below is unrepresentable as a tick.
pub const MIN_SQRT_PRICE_X64: u128 = 4295048016;

/// Largest sqrt price the downstream tick math supports (sqrt price at the
/// maximum tick).
pub const MAX_SQRT_PRICE_X64: u128 = 79226673521066979257578248091;

/// Check that a Q64.64 sqrt price lies within the representable range.
///
/// Zero always fails: a pool cannot open at a zero price, and the lower bound
/// is at least one by construction.
pub fn validate_sqrt_price_x64(sqrt_price_x64: u128) -> Result<(), ProgramError> {
    if sqrt_price_x64 < MIN_SQRT_PRICE_X64 || sqrt_price_x64 > MAX_SQRT_PRICE_X64 {
        return Err(PoolError::SqrtPriceOutOfRange.into());
    }
    Ok(())
}

/// Encode a rational price (token 1 per token 0) as a Q64.64 sqrt price.
///
/// Computes `floor(sqrt(numerator / denominator) * 2^64)` exactly, rounding
/// toward zero. The widening shift needs a 256-bit intermediate: the operand
/// under the square root is `numerator * 2^128 / denominator`.
pub fn encode_sqrt_price_x64(
    price_numerator: u128,
    price_denominator: u128,
) -> Result<u128, ProgramError> {
    if price_denominator == 0 {
        return Err(PoolError::MathOverflow.into());
    }
    if price_numerator == 0 {
        return Err(PoolError::SqrtPriceOutOfRange.into());
    }

    let ratio_x128 = (U256::from(price_numerator) << 128) / U256::from(price_denominator);
    let sqrt_price = isqrt(ratio_x128);

    if sqrt_price > U256::from(MAX_SQRT_PRICE_X64) {
        return Err(PoolError::SqrtPriceOutOfRange.into());
    }

    let sqrt_price_x64 = sqrt_price.low_u128();
    validate_sqrt_price_x64(sqrt_price_x64)?;
    Ok(sqrt_price_x64)
}

/// Convert a Q64.64 sqrt price back to a price ratio. Lossy; off-chain
/// display only.
pub fn sqrt_price_x64_to_price(sqrt_price_x64: u128) -> f64 {
    let sqrt_price = sqrt_price_x64 as f64 / 18446744073709551616.0; // 2^64
    sqrt_price * sqrt_price
}

/// Integer square root, truncated: largest r with r * r <= x.
fn isqrt(x: U256) -> U256 {
    if x == U256::zero() {
        return U256::zero();
    }

    let mut z = x;
    let mut y = (x + U256::one()) >> 1;

    while y < z {
        z = y;
        y = (x / y + y) >> 1;
    }

    z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isqrt_truncates() {
        assert_eq!(isqrt(U256::from(0u64)), U256::from(0u64));
        assert_eq!(isqrt(U256::from(1u64)), U256::from(1u64));
        assert_eq!(isqrt(U256::from(3u64)), U256::from(1u64));
        assert_eq!(isqrt(U256::from(4u64)), U256::from(2u64));
        assert_eq!(isqrt(U256::from(99u64)), U256::from(9u64));
        assert_eq!(isqrt(U256::from(100u64)), U256::from(10u64));
    }

    #[test]
    fn unit_price_is_exact() {
        assert_eq!(encode_sqrt_price_x64(1, 1).unwrap(), 1u128 << 64);
    }
}
