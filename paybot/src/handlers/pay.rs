//! `/pay`: echo the configured Stellar address and optional memo.

use std::sync::Arc;

use async_trait::async_trait;
use paybot_core::{Handler, HandlerResponse, Message, Result};

use crate::config::PaymentConfig;

/// Reply when STELLAR_ADDRESS is not configured.
pub const NOT_CONFIGURED_REPLY: &str =
    "Sorry — no Stellar address is configured. The bot owner needs to set STELLAR_ADDRESS.";

const HEADER: &str = "Stellar Lumens (XLM) payment info:";
const FOOTER: [&str; 2] = [
    "⚠️ Double-check the address and enter memo if you want to add extra words of thanks.",
    "Memo is not needed.",
];

/// Builds the `/pay` reply. Depends only on `payment`, so equal configs give byte-identical replies.
pub fn payment_info_reply(payment: &PaymentConfig) -> String {
    let Some(address) = payment.address.as_deref() else {
        return NOT_CONFIGURED_REPLY.to_string();
    };

    let mut lines = vec![HEADER.to_string(), String::new(), format!("Address: {}", address)];
    if let Some((memo_type, memo)) = payment.memo() {
        lines.push(format!("Memo ({}): {}", memo_type, memo));
    }
    lines.push(String::new());
    lines.extend(FOOTER.iter().map(|line| line.to_string()));

    lines.join("\n")
}

/// Replies with [`payment_info_reply`] for the startup configuration.
#[derive(Clone)]
pub struct PayHandler {
    payment: Arc<PaymentConfig>,
}

impl PayHandler {
    pub fn new(payment: Arc<PaymentConfig>) -> Self {
        Self { payment }
    }
}

#[async_trait]
impl Handler for PayHandler {
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Reply(payment_info_reply(&self.payment)))
    }

    fn description(&self) -> &str {
        "Show Stellar (XLM) payment info"
    }
}
