//! Stellar payment details echoed by `/pay`. Nothing here is validated beyond presence.

use super::non_empty_var;

/// STELLAR_ADDRESS, STELLAR_MEMO, STELLAR_MEMO_TYPE. Empty values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentConfig {
    pub address: Option<String>,
    pub memo: Option<String>,
    /// e.g. "text" or "id"
    pub memo_type: Option<String>,
}

impl PaymentConfig {
    pub fn from_env() -> Self {
        Self {
            address: non_empty_var("STELLAR_ADDRESS"),
            memo: non_empty_var("STELLAR_MEMO"),
            memo_type: non_empty_var("STELLAR_MEMO_TYPE"),
        }
    }

    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Self::default()
        }
    }

    pub fn with_memo(mut self, memo_type: impl Into<String>, memo: impl Into<String>) -> Self {
        self.memo_type = Some(memo_type.into());
        self.memo = Some(memo.into());
        self
    }

    /// `(memo_type, memo)` only when both are present.
    pub fn memo(&self) -> Option<(&str, &str)> {
        match (self.memo_type.as_deref(), self.memo.as_deref()) {
            (Some(memo_type), Some(memo)) => Some((memo_type, memo)),
            _ => None,
        }
    }
}
