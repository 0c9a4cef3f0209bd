//! Warelay - a small HTTP relay that validates outbound WhatsApp messages
//! and sends them through the Twilio REST API.

pub mod config;
pub mod handlers;
pub mod response;
pub mod server;
pub mod translate;
pub mod twilio;
pub mod validate;
