use feesplit_domain::{BillingMode, Money};

/// Participant data as collected from the user, before it gets an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantDraft {
    pub name: String,
    pub order_amount: Money,
    /// `None` lets the roster decide: the first participant becomes host.
    pub is_host: Option<bool>,
}

impl ParticipantDraft {
    pub fn new(name: impl Into<String>, order_amount: Money) -> Self {
        Self {
            name: name.into(),
            order_amount,
            is_host: None,
        }
    }

    pub fn host(mut self, is_host: bool) -> Self {
        self.is_host = Some(is_host);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry {
    pub line: usize,
    pub draft: ParticipantDraft,
}

/// Parsed order sheet. Fee and mode lines that are absent stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSheet {
    pub delivery_fee: Option<Money>,
    pub service_fee: Option<Money>,
    pub mode: Option<BillingMode>,
    pub entries: Vec<SheetEntry>,
}
