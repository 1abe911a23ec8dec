//! careline-bots
//!
//! Auto-responder bot handlers. Each handler is a single-shot decision
//! function: it inspects one newly created Communication and conditionally
//! creates one reply through the injected record client. Validation
//! failures are a normal "no reply" outcome; only remote-call failures are
//! errors, propagated unchanged to the invoking platform.

pub mod message_responder;
pub mod reply;
pub mod thread_responder;
