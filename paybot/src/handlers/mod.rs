//! Command handlers: `/start` greeting and `/pay` payment info.

mod pay;
mod start;

pub use pay::{payment_info_reply, PayHandler, NOT_CONFIGURED_REPLY};
pub use start::{greeting, StartHandler, GREETING_PLACEHOLDER};
