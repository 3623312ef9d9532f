use feesplit_domain::Money;
use rust_decimal::RoundingStrategy;

/// Renders an amount with exactly two decimal places.
pub fn format_currency(amount: Money) -> String {
    let rounded = amount
        .as_decimal()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Same as [`format_currency`]; NaN and infinities render as `0.00`.
pub fn format_currency_f64(amount: f64) -> String {
    format_currency(Money::from_f64_normalized(amount))
}
