use feesplit_domain::{BillingMode, FeeInputs};

use crate::{
    error::OrderSheetError,
    model::{OrderSheet, SheetEntry},
    ports::OrderSheetParser,
    roster::Roster,
};

#[derive(Clone, Copy)]
pub struct SplitCalculator<'a> {
    parser: &'a dyn OrderSheetParser,
}

impl<'a> SplitCalculator<'a> {
    pub fn new(parser: &'a dyn OrderSheetParser) -> Self {
        Self { parser }
    }

    /// Builds a roster from an order sheet without allocating fees.
    ///
    /// `default_mode` applies when the sheet has no `mode` line.
    pub fn build_roster(
        &self,
        content: &str,
        default_mode: BillingMode,
    ) -> Result<Roster, OrderSheetError> {
        let OrderSheet {
            delivery_fee,
            service_fee,
            mode,
            entries,
        } = self.parser.parse(content)?;

        let fees = FeeInputs::new(
            delivery_fee.unwrap_or_default(),
            service_fee.unwrap_or_default(),
        );
        let mode = mode.unwrap_or(default_mode);
        let mut roster = Roster::new(fees, mode);

        for SheetEntry { line, draft } in entries {
            roster
                .add(draft)
                .map_err(|source| OrderSheetError::Roster { line, source })?;
        }

        tracing::info!(
            participant_count = roster.len(),
            has_host = roster.host().is_some(),
            mode = %mode,
            delivery_fee = %fees.delivery_fee,
            service_fee = %fees.service_fee,
            "Order sheet loaded"
        );
        Ok(roster)
    }

    /// Builds a roster from an order sheet and allocates every final amount.
    pub fn calculate(
        &self,
        content: &str,
        default_mode: BillingMode,
    ) -> Result<Roster, OrderSheetError> {
        let mut roster = self.build_roster(content, default_mode)?;
        roster.calculate();
        Ok(roster)
    }
}
