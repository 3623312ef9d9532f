use feesplit_application::{
    OrderSheet, OrderSheetError, OrderSheetParser, ParticipantDraft, SheetEntry,
};
use feesplit_domain::{BillingMode, Money};
use feesplit_parser::{
    Amount, ModeKeyword, ParseError, Statement as ParserStatement, StatementWithLine,
    parse_order_sheet,
};

#[derive(Default)]
pub struct FeesplitOrderSheetParser;

impl OrderSheetParser for FeesplitOrderSheetParser {
    fn parse(&self, content: &str) -> Result<OrderSheet, OrderSheetError> {
        let parsed = parse_order_sheet(content).map_err(|err| match err {
            ParseError::SyntaxError { line, detail } => OrderSheetError::Syntax { line, detail },
        })?;

        let mut sheet = OrderSheet::default();
        for StatementWithLine { line, statement } in parsed.statements {
            match statement {
                ParserStatement::DeliveryFee(amount) => {
                    override_line(line, "delivery", sheet.delivery_fee.is_some());
                    sheet.delivery_fee = Some(to_money(amount));
                }
                ParserStatement::ServiceFee(amount) => {
                    override_line(line, "service", sheet.service_fee.is_some());
                    sheet.service_fee = Some(to_money(amount));
                }
                ParserStatement::Mode(keyword) => {
                    override_line(line, "mode", sheet.mode.is_some());
                    sheet.mode = Some(to_billing_mode(keyword));
                }
                ParserStatement::Participant(entry) => {
                    sheet.entries.push(SheetEntry {
                        line,
                        draft: ParticipantDraft::new(entry.name, to_money(entry.amount))
                            .host(entry.is_host),
                    });
                }
            }
        }

        Ok(sheet)
    }
}

fn override_line(line: usize, setting: &'static str, already_set: bool) {
    if already_set {
        tracing::debug!(line, setting, "Order sheet setting overridden by later line");
    }
}

// Parser guarantees minor units fit in i64.
fn to_money(amount: Amount) -> Money {
    Money::new(amount.minor_units as i64, amount.scale)
}

fn to_billing_mode(keyword: ModeKeyword) -> BillingMode {
    match keyword {
        ModeKeyword::Even => BillingMode::Even,
        ModeKeyword::Proportional => BillingMode::Proportional,
    }
}
