//! Message authentication codes

pub mod hmac;

pub use self::hmac::{message_tag, verify_tag};
