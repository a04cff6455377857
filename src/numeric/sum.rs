use num_bigint::{BigInt, Sign};
use rust_decimal::Decimal;

use crate::util::error::{ContractViolation, InexactSum};
use crate::util::result::ResultExtension;

/// Returns the sum of the present items, skipping any that are [`None`].
///
/// Accepts items of either `Decimal` or `Option<Decimal>`. Nothing to sum gives zero. Items are
/// accumulated as arbitrary precision integers at a shared scale, so the total is never rounded:
/// it's either exact or rejected. Intermediate totals may exceed [`Decimal::MAX`] as long as the
/// final one doesn't.
///
/// # Panics
/// Panics if the exact total doesn't fit in a [`Decimal`], either because it exceeds
/// [`Decimal::MAX`] or because it needs more than 28 significant digits. See [`try_sum`] for a
/// non-panicking version.
///
/// # Examples
/// ```
/// # use listkit::sum;
/// # use rust_decimal::Decimal;
/// let total = sum([Some(Decimal::new(1, 1)), None, Some(Decimal::new(2, 1))]);
/// assert_eq!(total, Decimal::new(3, 1));
/// assert_eq!(sum(Vec::<Decimal>::new()), Decimal::ZERO);
/// ```
pub fn sum<I>(items: I) -> Decimal
where
    I: IntoIterator,
    I::Item: Into<Option<Decimal>>,
{
    try_sum(items).throw()
}

/// Returns the exact sum of the present items, or [`InexactSum`] if it can't be represented as a
/// [`Decimal`] without rounding.
pub fn try_sum<I>(items: I) -> Result<Decimal, ContractViolation>
where
    I: IntoIterator,
    I::Item: Into<Option<Decimal>>,
{
    let items: Vec<Decimal> = items
        .into_iter()
        .filter_map(Into::<Option<Decimal>>::into)
        .collect();

    let scale = items.iter().map(Decimal::scale).max().unwrap_or(0);
    let ten = BigInt::from(10);

    let mut total = BigInt::default();
    for item in &items {
        total += BigInt::from(item.mantissa()) * ten.pow(scale - item.scale());
    }

    to_decimal(total, scale)
}

/// Converts `mantissa * 10^-scale` into a [`Decimal`], dropping trailing zeros only as far as
/// needed to fit.
fn to_decimal(mut mantissa: BigInt, mut scale: u32) -> Result<Decimal, ContractViolation> {
    let ten = BigInt::from(10);

    loop {
        if let Ok(small) = i128::try_from(&mantissa)
            && let Ok(decimal) = Decimal::try_from_i128_with_scale(small, scale)
        {
            return Ok(decimal);
        }

        // Any further step would drop a significant digit.
        if scale == 0 || (&mantissa % &ten).sign() != Sign::NoSign {
            return ContractViolation::reject(InexactSum);
        }

        mantissa /= &ten;
        scale -= 1;
    }
}
