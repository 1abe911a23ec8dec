//! Qualification rules shared by the auto-responder bots.

use careline_core::models::communication::Communication;
use careline_core::models::reference::{Reference, ResourceKind};

/// Canned text of every automatic reply.
pub const AUTO_RESPONSE_TEXT: &str = "This is an auto generated response";

/// References extracted from a qualifying message.
pub struct Qualified<'a> {
    /// The practitioner who sent the triggering message.
    pub sender: &'a Reference,
    /// The thread the message belongs to: the first `part_of` entry that
    /// references a Communication.
    pub thread: &'a Reference,
}

/// Extract the sender and thread references of a message that qualifies for
/// an automatic reply.
///
/// A message qualifies when its sender is a Practitioner and it belongs to
/// a thread. Returns `None` otherwise.
pub fn qualify(message: &Communication) -> Option<Qualified<'_>> {
    let Some(sender) = message
        .sender
        .as_ref()
        .filter(|sender| sender.is_a(&ResourceKind::Practitioner))
    else {
        tracing::debug!("sender is absent or not a practitioner, skipping");
        return None;
    };

    let Some(thread) = message
        .part_of
        .iter()
        .find(|part_of| part_of.is_a(&ResourceKind::Communication))
    else {
        tracing::debug!("message is not part of a thread, skipping");
        return None;
    };

    Some(Qualified { sender, thread })
}
