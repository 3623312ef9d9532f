use feesplit_application::{OrderSheetError, RosterError};

use crate::currency::format_currency;

pub fn format_order_sheet_error(error: &OrderSheetError) -> String {
    match error {
        OrderSheetError::Syntax { line, detail } => feesplit_i18n::line_error(*line, detail),
        OrderSheetError::Roster { line, source } => {
            feesplit_i18n::line_error(*line, format_roster_error(source))
        }
    }
}

pub fn format_roster_error(error: &RosterError) -> String {
    match error {
        RosterError::EmptyName => feesplit_i18n::empty_name(),
        RosterError::NegativeAmount { name, amount } => {
            feesplit_i18n::negative_amount(name, format_currency(*amount))
        }
        RosterError::UnknownParticipant(id) => feesplit_i18n::unknown_participant(id),
    }
}
