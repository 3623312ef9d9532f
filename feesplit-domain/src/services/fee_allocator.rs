use crate::model::{BillingMode, FeeInputs, Money, Participant};
use rust_decimal::Decimal;

/// Fee allocation service
pub struct FeeAllocator;

impl FeeAllocator {
    /// Computes every participant's final payable amount.
    ///
    /// Non-host amounts are rounded up to whole currency units. The host pays
    /// the remainder so that the collected sum matches orders plus fees; the
    /// remainder is clamped at zero when rounding already overshoots it.
    /// Without a host every participant gets an even fee share rounded up and
    /// nobody absorbs the difference.
    ///
    /// # Arguments
    /// * `participants` - Current participant list (left untouched)
    /// * `fees` - Delivery and service fees to distribute
    /// * `mode` - Fee split strategy for the host path
    ///
    /// # Returns
    /// A new list in the same order with `final_amount` set on every entry
    pub fn allocate(
        participants: &[Participant],
        fees: FeeInputs,
        mode: BillingMode,
    ) -> Vec<Participant> {
        if participants.is_empty() {
            return Vec::new();
        }

        let total_order_amount: Money = participants.iter().map(|p| p.order_amount).sum();
        let total_fees = fees.total();
        let grand_total = total_order_amount + total_fees;
        let host_index = participants.iter().position(|p| p.is_host);

        tracing::debug!(
            participant_count = participants.len(),
            mode = %mode,
            total_order_amount = %total_order_amount,
            total_fees = %total_fees,
            grand_total = %grand_total,
            has_host = host_index.is_some(),
            "Fee allocation started"
        );

        let Some(host_index) = host_index else {
            return Self::allocate_without_host(participants, total_fees);
        };

        let host_count = participants.iter().filter(|p| p.is_host).count();
        if host_count > 1 {
            tracing::warn!(
                host_count,
                host_id = %participants[host_index].id,
                "Multiple hosts flagged; only the first absorbs the remainder"
            );
        }

        let head_count = Decimal::from(participants.len());
        let shares: Vec<Option<Money>> = participants
            .iter()
            .enumerate()
            .map(|(idx, person)| {
                if idx == host_index {
                    return None;
                }
                let fee_share = match mode {
                    BillingMode::Even => even_share(total_fees, head_count),
                    BillingMode::Proportional => {
                        proportional_share(person.order_amount, total_order_amount, total_fees)
                    }
                };
                Some((person.order_amount + fee_share).ceil())
            })
            .collect();

        let non_host_total: Money = shares.iter().flatten().sum();
        let remainder = grand_total - non_host_total;
        if remainder.is_negative() {
            tracing::warn!(
                grand_total = %grand_total,
                non_host_total = %non_host_total,
                overshoot = %(non_host_total - grand_total),
                "Rounded shares exceed grand total; host remainder clamped to zero"
            );
        }
        let host_amount = remainder.max(Money::ZERO);

        participants
            .iter()
            .zip(shares)
            .map(|(person, share)| person.with_final_amount(share.unwrap_or(host_amount)))
            .collect()
    }

    fn allocate_without_host(participants: &[Participant], total_fees: Money) -> Vec<Participant> {
        let fee_per_person = even_share(total_fees, Decimal::from(participants.len()));

        participants
            .iter()
            .map(|person| person.with_final_amount((person.order_amount + fee_per_person).ceil()))
            .collect()
    }
}

fn even_share(total_fees: Money, head_count: Decimal) -> Money {
    if head_count.is_zero() {
        return Money::ZERO;
    }
    Money::from_decimal(total_fees.as_decimal() / head_count)
}

// Multiplying before dividing keeps shares that should be whole exact. When
// the product leaves the `Decimal` range the order's ratio is taken first.
fn proportional_share(order_amount: Money, total_order_amount: Money, total_fees: Money) -> Money {
    if total_order_amount.is_zero() {
        return Money::ZERO;
    }
    let order = order_amount.as_decimal();
    let total = total_order_amount.as_decimal();
    let fees = total_fees.as_decimal();

    let share = match order.checked_mul(fees) {
        Some(product) => product / total,
        None => {
            tracing::debug!(
                order_amount = %order_amount,
                total_fees = %total_fees,
                "Proportional share computed from order ratio"
            );
            order / total * fees
        }
    };
    Money::from_decimal(share)
}
