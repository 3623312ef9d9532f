#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod roster;
pub mod split_calculator;

pub use error::{OrderSheetError, RosterError};
pub use model::{OrderSheet, ParticipantDraft, SheetEntry};
pub use ports::OrderSheetParser;
pub use roster::Roster;
pub use split_calculator::SplitCalculator;
