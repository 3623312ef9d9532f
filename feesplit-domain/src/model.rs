use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Sub, SubAssign},
    str::FromStr,
};

use rust_decimal::{Decimal, prelude::FromPrimitive};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monetary amount with exact decimal arithmetic.
///
/// Backed by `Decimal`, so magnitudes are limited to about 7.9e28. Arithmetic
/// operators panic past that bound. Amounts read from order sheets stay below
/// `i64::MAX` minor units, leaving room for sums over any realistic roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// `Money::new(1050, 2)` is 10.50.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Converts a floating-point amount, treating NaN, infinities and values
    /// outside the `Decimal` range as zero.
    pub fn from_f64_normalized(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Decimal::from_f64(value).map_or(Self::ZERO, Self)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Rounds up to the next whole currency unit.
    pub fn ceil(self) -> Self {
        Self(self.0.ceil())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub order_amount: Money,
    pub is_host: bool,
    /// `None` until an allocation pass has run over the current inputs.
    pub final_amount: Option<Money>,
}

impl Participant {
    pub fn new(
        id: ParticipantId,
        name: impl Into<String>,
        order_amount: Money,
        is_host: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            order_amount,
            is_host,
            final_amount: None,
        }
    }

    pub fn with_final_amount(&self, final_amount: Money) -> Self {
        Self {
            final_amount: Some(final_amount),
            ..self.clone()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeInputs {
    pub delivery_fee: Money,
    pub service_fee: Money,
}

impl FeeInputs {
    pub fn new(delivery_fee: Money, service_fee: Money) -> Self {
        Self {
            delivery_fee,
            service_fee,
        }
    }

    pub fn total(&self) -> Money {
        self.delivery_fee + self.service_fee
    }
}

/// How the shared fees are divided between participants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BillingMode {
    /// Equal fee share per head, host included.
    #[default]
    Even,
    /// Fee share weighted by each participant's order amount.
    Proportional,
}

impl BillingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Proportional => "proportional",
        }
    }
}

impl fmt::Display for BillingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown billing mode '{0}' (expected 'even' or 'proportional')")]
pub struct ParseBillingModeError(pub String);

impl FromStr for BillingMode {
    type Err = ParseBillingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "even" | "amount" => Ok(Self::Even),
            "proportional" | "percentage" => Ok(Self::Proportional),
            _ => Err(ParseBillingModeError(s.to_string())),
        }
    }
}

/// Aggregates over a participant list, used to reconcile collected amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationTotals {
    pub total_order_amount: Money,
    pub total_fees: Money,
    pub grand_total: Money,
    /// Sum of final amounts; participants without one count as zero.
    pub total_to_collect: Money,
}

impl AllocationTotals {
    pub fn of<'a, I>(participants: I, fees: FeeInputs) -> Self
    where
        I: IntoIterator<Item = &'a Participant>,
    {
        let (total_order_amount, total_to_collect) = participants.into_iter().fold(
            (Money::ZERO, Money::ZERO),
            |(orders, collected), person| {
                (
                    orders + person.order_amount,
                    collected + person.final_amount.unwrap_or(Money::ZERO),
                )
            },
        );
        let total_fees = fees.total();

        Self {
            total_order_amount,
            total_fees,
            grand_total: total_order_amount + total_fees,
            total_to_collect,
        }
    }

    /// Amount collected beyond the grand total, zero when reconciled.
    pub fn overshoot(&self) -> Money {
        (self.total_to_collect - self.grand_total).max(Money::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::nan(f64::NAN, Money::ZERO)]
    #[case::infinity(f64::INFINITY, Money::ZERO)]
    #[case::negative_infinity(f64::NEG_INFINITY, Money::ZERO)]
    #[case::beyond_decimal_range(1e29, Money::ZERO)]
    #[case::whole(20.0, Money::from_i64(20))]
    #[case::cents(10.25, Money::new(1025, 2))]
    fn normalizes_floating_point_amounts(#[case] input: f64, #[case] expected: Money) {
        assert_eq!(Money::from_f64_normalized(input), expected);
    }

    #[rstest]
    #[case::already_whole(Money::from_i64(11), Money::from_i64(11))]
    #[case::fraction(Money::new(1070, 2), Money::from_i64(11))]
    #[case::tiny_fraction(Money::new(2_000_001, 5), Money::from_i64(21))]
    #[case::zero(Money::ZERO, Money::ZERO)]
    fn ceil_rounds_up_to_whole_unit(#[case] input: Money, #[case] expected: Money) {
        assert_eq!(input.ceil(), expected);
    }

    #[rstest]
    #[case::even("even", BillingMode::Even)]
    #[case::proportional("Proportional", BillingMode::Proportional)]
    #[case::amount_alias("amount", BillingMode::Even)]
    #[case::percentage_alias(" percentage ", BillingMode::Proportional)]
    fn parses_billing_mode(#[case] input: &str, #[case] expected: BillingMode) {
        assert_eq!(input.parse::<BillingMode>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_billing_mode() {
        assert_eq!(
            "weighted".parse::<BillingMode>(),
            Err(ParseBillingModeError("weighted".to_string()))
        );
    }

    #[test]
    fn billing_mode_defaults_to_even() {
        assert_eq!(BillingMode::default(), BillingMode::Even);
    }

    #[test]
    fn totals_count_missing_final_amounts_as_zero() {
        let participants = [
            Participant::new(ParticipantId(1), "A", Money::from_i64(10), true)
                .with_final_amount(Money::from_i64(12)),
            Participant::new(ParticipantId(2), "B", Money::from_i64(20), false),
        ];
        let totals = AllocationTotals::of(
            &participants,
            FeeInputs::new(Money::from_i64(3), Money::from_i64(1)),
        );

        assert_eq!(totals.total_order_amount, Money::from_i64(30));
        assert_eq!(totals.total_fees, Money::from_i64(4));
        assert_eq!(totals.grand_total, Money::from_i64(34));
        assert_eq!(totals.total_to_collect, Money::from_i64(12));
        assert_eq!(totals.overshoot(), Money::ZERO);
    }

    #[test]
    fn display_drops_trailing_zeros() {
        assert_eq!(Money::new(2350, 2).to_string(), "23.5");
        assert_eq!(ParticipantId(7).to_string(), "#7");
    }
}
