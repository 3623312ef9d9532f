use feesplit_domain::{Money, ParticipantId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("participant name must not be empty")]
    EmptyName,
    #[error("amount {amount} for '{name}' must be a non-negative number")]
    NegativeAmount { name: String, amount: Money },
    #[error("participant {0} not found")]
    UnknownParticipant(ParticipantId),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderSheetError {
    #[error("syntax error at line {line}: {detail}")]
    Syntax { line: usize, detail: String },
    #[error("invalid participant at line {line}: {source}")]
    Roster {
        line: usize,
        #[source]
        source: RosterError,
    },
}
