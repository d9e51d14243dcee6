use rust_decimal::{prelude::ToPrimitive, Decimal};

/// Largest scale a [`Decimal`] supports.
const MAX_DECIMALS: u8 = 28;

/// Convert a raw amount in minor units to [`Decimal`].
///
/// The conversion is exact.
///
/// # Examples
///
/// ```
/// use fusion_sdk::utils::amount_to_decimal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(amount_to_decimal(10_500_000, 6).unwrap(), dec!(10.5));
/// ```
pub fn amount_to_decimal(amount: u64, decimals: u8) -> crate::Result<Decimal> {
    if decimals > MAX_DECIMALS {
        return Err(crate::Error::precondition(format!(
            "decimals must not exceed {MAX_DECIMALS}, got {decimals}"
        )));
    }
    Ok(Decimal::from_i128_with_scale(
        i128::from(amount),
        u32::from(decimals),
    ))
}

/// Convert a [`Decimal`] to a raw amount in minor units.
///
/// Rejects negative values, values that do not fit in `u64` and values with
/// more decimal places than `decimals`. No rounding is applied.
///
/// # Examples
///
/// ```
/// use fusion_sdk::utils::decimal_to_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(decimal_to_amount(dec!(10.0), 6).unwrap(), 10_000_000);
/// assert!(decimal_to_amount(dec!(0.0000001), 6).is_err());
/// ```
pub fn decimal_to_amount(value: Decimal, decimals: u8) -> crate::Result<u64> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(crate::Error::precondition(format!(
            "amount must not be negative, got {value}"
        )));
    }
    let value = value.normalize();
    if value.scale() > u32::from(decimals) {
        return Err(crate::Error::precondition(format!(
            "amount {value} has more than {decimals} decimal places"
        )));
    }
    let overflow = || crate::Error::precondition(format!("amount {value} is too large"));
    let factor = 10u64
        .checked_pow(u32::from(decimals))
        .map(Decimal::from)
        .ok_or_else(overflow)?;
    value
        .checked_mul(factor)
        .and_then(|raw| raw.to_u64())
        .ok_or_else(overflow)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn entry_fee_in_minor_units() {
        assert_eq!(decimal_to_amount(dec!(10.0), 6).unwrap(), 10_000_000);
        assert_eq!(decimal_to_amount(dec!(0.000001), 6).unwrap(), 1);
        assert_eq!(decimal_to_amount(dec!(0), 6).unwrap(), 0);
        assert_eq!(decimal_to_amount(dec!(-0), 6).unwrap(), 0);
    }

    #[test]
    fn reject_invalid_amounts() {
        assert!(matches!(
            decimal_to_amount(dec!(-1), 6),
            Err(crate::Error::Precondition(_))
        ));
        assert!(matches!(
            decimal_to_amount(dec!(1.0000001), 6),
            Err(crate::Error::Precondition(_))
        ));
        assert!(matches!(
            decimal_to_amount(dec!(18446744073710), 6),
            Err(crate::Error::Precondition(_))
        ));
    }

    #[test]
    fn exact_conversion_back() {
        assert_eq!(amount_to_decimal(u64::MAX, 6).unwrap(), dec!(18446744073709.551615));
        assert_eq!(amount_to_decimal(1_500_000_000, 9).unwrap(), dec!(1.5));
        assert!(amount_to_decimal(1, 29).is_err());
    }
}
