use crate::{error::OrderSheetError, model::OrderSheet};

pub trait OrderSheetParser: Send + Sync {
    fn parse(&self, content: &str) -> Result<OrderSheet, OrderSheetError>;
}
