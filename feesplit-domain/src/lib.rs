#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    AllocationTotals, BillingMode, FeeInputs, Money, ParseBillingModeError, Participant,
    ParticipantId,
};
pub use services::{FeeAllocator, HostPolicy};
