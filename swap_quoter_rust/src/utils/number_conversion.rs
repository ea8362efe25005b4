use crate::error::{Error, EstimatorResult};
use crate::utils::uint::{MAX_POW10_EXPONENT, U256, pow10};
use error_stack::{ResultExt, report};

/// Converts a human readable decimal amount into an integer amount of base units.
///
/// `"1.5"` with 6 decimals becomes `"1500000"`. The computation is done on 256-bit
/// integers, so the result is exact. Amounts carrying more fractional digits than the
/// token supports are rejected instead of truncated.
///
/// # Errors
///
/// * `Error::InvalidDecimals` if `10^decimals` does not fit in 256 bits
/// * `Error::InvalidAmount` if `amount` is not a non-negative decimal number, has too
///   many fractional digits, or overflows 256 bits once scaled
pub fn to_base_units(amount: &str, decimals: u8) -> EstimatorResult<String> {
    validate_decimals(decimals)?;
    let (integer_part, fraction_part) = split_decimal(amount)?;

    let decimals: usize = decimals.into();
    if fraction_part.len() > decimals {
        return Err(report!(Error::InvalidAmount(amount.to_string())).attach_printable(
            format!(
                "Amount has {} fractional digits but the token only supports {decimals}",
                fraction_part.len()
            ),
        ));
    }

    let digits = format!("{integer_part}{fraction_part:0<decimals$}");
    let value = U256::from_dec_str(&digits)
        .map_err(|_| report!(Error::InvalidAmount(amount.to_string())))
        .attach_printable("Amount does not fit in 256 bits")?;

    Ok(value.to_string())
}

/// Converts an integer amount of base units back into a canonical decimal string.
///
/// The output carries no trailing fractional zeros and no trailing dot, so
/// `"50000000000000000000"` with 18 decimals becomes `"50"`.
pub fn from_base_units(amount: &str, decimals: u8) -> EstimatorResult<String> {
    validate_decimals(decimals)?;
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(report!(Error::InvalidAmount(amount.to_string()))
            .attach_printable("Base unit amount must be a non-negative integer"));
    }

    let value = U256::from_dec_str(amount)
        .map_err(|_| report!(Error::InvalidAmount(amount.to_string())))
        .attach_printable("Base unit amount does not fit in 256 bits")?;
    let scale = pow10(decimals).ok_or_else(|| report!(Error::InvalidDecimals(decimals)))?;

    let (integer, remainder) = value.div_mod(scale);
    if remainder.is_zero() {
        return Ok(integer.to_string());
    }

    let width: usize = decimals.into();
    let fraction = format!("{:0>width$}", remainder.to_string());
    Ok(format!("{integer}.{}", fraction.trim_end_matches('0')))
}

/// Parses a canonical decimal string into the nearest `f64`.
pub fn decimal_string_to_f64(value: &str) -> EstimatorResult<f64> {
    let parsed = value
        .parse::<f64>()
        .change_context(Error::ParseError)
        .attach_printable_lazy(|| format!("Failed to parse {value} as f64"))?;
    if !parsed.is_finite() {
        return Err(report!(Error::ParseError).attach_printable("Value is not finite"));
    }
    Ok(parsed)
}

pub fn validate_decimals(decimals: u8) -> EstimatorResult<()> {
    if decimals > MAX_POW10_EXPONENT {
        return Err(report!(Error::InvalidDecimals(decimals)).attach_printable(format!(
            "Token precision cannot exceed {MAX_POW10_EXPONENT} decimals"
        )));
    }
    Ok(())
}

/// Splits `"12.34"` into `("12", "34")`. Signs, exponents and whitespace are rejected.
fn split_decimal(amount: &str) -> EstimatorResult<(&str, &str)> {
    let (integer_part, fraction_part) = amount.split_once('.').unwrap_or((amount, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (integer_part.is_empty() && fraction_part.is_empty())
        || !all_digits(integer_part)
        || !all_digits(fraction_part)
    {
        return Err(report!(Error::InvalidAmount(amount.to_string()))
            .attach_printable("Amount must be a non-negative decimal number"));
    }

    Ok((integer_part, fraction_part))
}
