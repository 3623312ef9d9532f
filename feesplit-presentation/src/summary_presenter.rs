use std::fmt::Write as _;

use feesplit_application::Roster;
use feesplit_domain::{BillingMode, Money};
use feesplit_i18n as i18n;

use crate::currency::format_currency;

const LABEL_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 12;

pub struct SummaryPresenter;

impl SummaryPresenter {
    /// Renders the payment summary of a roster.
    ///
    /// Participants without a final amount show their order amount instead.
    pub fn render(roster: &Roster, currency_symbol: &str) -> String {
        let mut reply = String::with_capacity(512);
        let totals = roster.totals();
        let fees = roster.fees();
        let money = |amount: Money| format!("{currency_symbol}{}", format_currency(amount));

        let _ = writeln!(&mut reply, "{}", i18n::PAYMENT_SUMMARY);
        let _ = writeln!(&mut reply);

        let _ = writeln!(&mut reply, "{}", i18n::ORDER_DETAILS);
        push_row(
            &mut reply,
            i18n::TOTAL_ORDER_AMOUNT,
            &money(totals.total_order_amount),
        );
        push_row(&mut reply, i18n::DELIVERY_FEE, &money(fees.delivery_fee));
        push_row(&mut reply, i18n::SERVICE_FEE, &money(fees.service_fee));
        push_row(&mut reply, i18n::BILLING_MODE, mode_label(roster.mode()));
        let _ = writeln!(&mut reply);

        let _ = writeln!(&mut reply, "{}", i18n::INDIVIDUAL_PAYMENTS);
        if roster.is_empty() {
            let _ = writeln!(&mut reply, "  {}", i18n::NO_PARTICIPANTS);
        }
        for person in roster.participants() {
            let label = if person.is_host {
                format!("{} {}", person.name, i18n::HOST_MARKER)
            } else {
                person.name.clone()
            };
            let amount = person.final_amount.unwrap_or(person.order_amount);
            push_row(&mut reply, &label, &money(amount));
        }
        let _ = writeln!(&mut reply);

        let _ = writeln!(
            &mut reply,
            "{:<width$} {:>VALUE_WIDTH$}",
            i18n::TOTAL_TO_COLLECT,
            money(totals.total_to_collect),
            width = LABEL_WIDTH + 2,
        );
        if !roster.is_calculated() {
            let _ = writeln!(&mut reply, "  ({})", i18n::NOT_CALCULATED);
        }

        reply
    }
}

fn push_row(reply: &mut String, label: &str, value: &str) {
    let _ = writeln!(reply, "  {label:<LABEL_WIDTH$} {value:>VALUE_WIDTH$}");
}

fn mode_label(mode: BillingMode) -> &'static str {
    match mode {
        BillingMode::Even => i18n::MODE_EVEN,
        BillingMode::Proportional => i18n::MODE_PROPORTIONAL,
    }
}

#[cfg(all(test, not(any(feature = "ja", feature = "en"))))]
mod tests {
    use super::*;
    use feesplit_application::ParticipantDraft;
    use feesplit_domain::FeeInputs;
    use rstest::{fixture, rstest};

    #[fixture]
    fn roster() -> Roster {
        let mut roster = Roster::new(
            FeeInputs::new(Money::from_i64(5), Money::from_i64(3)),
            BillingMode::Even,
        );
        for (name, amount) in [("Alice", 0), ("Bob", 20), ("Carol", 30)] {
            roster
                .add(ParticipantDraft::new(name, Money::from_i64(amount)))
                .expect("valid draft");
        }
        roster
    }

    fn squeeze(rendered: &str) -> Vec<String> {
        rendered
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|line| !line.is_empty())
            .collect()
    }

    #[rstest]
    fn renders_calculated_summary(mut roster: Roster) {
        roster.calculate();

        let lines = squeeze(&SummaryPresenter::render(&roster, "₪"));

        assert_eq!(
            lines,
            vec![
                "Payment Summary",
                "Order Details",
                "Total Order Amount ₪50.00",
                "Delivery Fee ₪5.00",
                "Service Fee ₪3.00",
                "Billing Mode Even",
                "Individual Payments",
                "Alice (Host) ₪2.00",
                "Bob ₪23.00",
                "Carol ₪33.00",
                "Total to Collect ₪58.00",
            ]
        );
    }

    #[rstest]
    fn uncalculated_summary_shows_order_amounts(roster: Roster) {
        let lines = squeeze(&SummaryPresenter::render(&roster, "$"));

        assert!(lines.contains(&"Bob $20.00".to_string()));
        assert!(lines.contains(&"Total to Collect $0.00".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("(not calculated)"));
    }

    #[test]
    fn empty_roster_renders_placeholder() {
        let lines = squeeze(&SummaryPresenter::render(&Roster::default(), "₪"));

        assert!(lines.contains(&"No participants".to_string()));
        assert!(lines.contains(&"Billing Mode Even".to_string()));
    }

    #[test]
    fn rows_are_aligned() {
        let mut roster = Roster::default();
        roster
            .add(ParticipantDraft::new("Bob", Money::from_i64(20)))
            .expect("valid draft");
        roster.calculate();

        let rendered = SummaryPresenter::render(&roster, "");
        let row = rendered
            .lines()
            .find(|line| line.trim_start().starts_with("Bob"))
            .expect("participant row");

        assert_eq!(row.chars().count(), 2 + LABEL_WIDTH + 1 + VALUE_WIDTH);
        assert!(row.ends_with("20.00"));
    }
}
