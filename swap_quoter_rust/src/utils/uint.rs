use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

/// Largest exponent for which `10^exp` still fits in a `U256`.
pub const MAX_POW10_EXPONENT: u8 = 77;

/// `10^exp`, or `None` when it would overflow 256 bits.
pub fn pow10(exp: u8) -> Option<U256> {
    let ten = U256::from(10u8);
    let mut result = U256::one();
    for _ in 0..exp {
        result = result.checked_mul(ten)?;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), Some(U256::one()));
        assert_eq!(pow10(6), Some(U256::from(1_000_000u64)));
        assert_eq!(
            pow10(18).map(|v| v.to_string()),
            Some("1000000000000000000".to_string())
        );
    }

    #[test]
    fn test_pow10_bounds() {
        assert!(pow10(MAX_POW10_EXPONENT).is_some());
        assert!(pow10(MAX_POW10_EXPONENT + 1).is_none());
    }
}
