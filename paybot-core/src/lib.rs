//! # paybot-core
//!
//! Core types and traits for the payment-info bot: [`Bot`], [`Handler`], message and user types,
//! error types and tracing initialization. Transport-agnostic; used by command-router and paybot-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{PaybotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
