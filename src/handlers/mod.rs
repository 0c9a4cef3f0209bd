//! HTTP request handlers.

mod meta;
mod send;
mod verify;

pub use meta::index;
pub use send::send_whatsapp;
pub use verify::verify_config;
