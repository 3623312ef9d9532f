#![warn(clippy::uninlined_format_args)]

pub mod currency;
pub mod error_presenter;
pub mod summary_presenter;

pub use currency::{format_currency, format_currency_f64};
pub use error_presenter::{format_order_sheet_error, format_roster_error};
pub use summary_presenter::SummaryPresenter;
