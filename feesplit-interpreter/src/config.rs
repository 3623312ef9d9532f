use std::env;

use feesplit_domain::BillingMode;

pub const BILLING_MODE_VAR: &str = "FEESPLIT_BILLING_MODE";
pub const CURRENCY_SYMBOL_VAR: &str = "FEESPLIT_CURRENCY_SYMBOL";
const DEFAULT_CURRENCY_SYMBOL: &str = "₪";

/// Interpreter settings read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Used when the order sheet has no `mode` line.
    pub default_mode: BillingMode,
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_mode: BillingMode::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(BILLING_MODE_VAR) {
            match raw.parse::<BillingMode>() {
                Ok(mode) => config.default_mode = mode,
                Err(err) => {
                    tracing::warn!(
                        variable = BILLING_MODE_VAR,
                        value = %raw,
                        error = %err,
                        "Ignoring invalid billing mode; using default"
                    );
                }
            }
        }

        if let Some(symbol) = lookup(CURRENCY_SYMBOL_VAR) {
            config.currency_symbol = symbol;
        }

        config
    }
}
