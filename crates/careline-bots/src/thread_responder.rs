//! Replies once per thread to the first practitioner message.
//!
//! The reply carries a thread-scoped identifier; later practitioner
//! messages in the same thread find it via search and are skipped. Two
//! concurrent invocations for the same thread can both pass the search
//! before either create lands, so the marker is at-most-once per thread
//! only for sequential event delivery.

use tracing::info;

use careline_client::api::RecordClient;
use careline_client::error::ClientError;
use careline_core::models::communication::{self, Communication, Identifier, Payload};
use careline_core::models::event::BotEvent;

use crate::reply;

/// Identifier system that scopes the dedup markers.
pub const DEDUP_SYSTEM: &str = "http://example.com";

/// Dedup identifier value for a thread reference string.
fn dedup_value(thread_reference: &str) -> String {
    format!("auto-response-{thread_reference}")
}

/// Reply to the first practitioner message in a thread.
///
/// Skips when the sender is not a practitioner, when the message is not
/// part of a thread, or when an auto-response for the thread already
/// exists.
pub async fn handler<C>(client: &C, event: BotEvent) -> Result<Option<Communication>, ClientError>
where
    C: RecordClient + ?Sized,
{
    let message = event.input;
    let (sender, thread_reference) = match reply::qualify(&message) {
        Some(qualified) => (
            qualified.sender.clone(),
            qualified.thread.reference.clone(),
        ),
        None => return Ok(None),
    };

    let marker = dedup_value(&thread_reference);
    let existing = client
        .search(
            communication::RESOURCE_TYPE,
            &format!("identifier={marker}"),
        )
        .await?;
    if !existing.is_empty() {
        tracing::debug!(thread = %thread_reference, "auto-response already sent, skipping");
        return Ok(None);
    }

    let response = client
        .create(Communication {
            status: message.status,
            sender: None,
            recipient: vec![sender],
            payload: vec![Payload::text(reply::AUTO_RESPONSE_TEXT)],
            identifier: vec![Identifier::new(DEDUP_SYSTEM, marker)],
            part_of: message.part_of,
            ..Default::default()
        })
        .await?;

    info!(
        thread = %thread_reference,
        reply = response.id.as_deref().unwrap_or(""),
        "auto-response created"
    );
    Ok(Some(response))
}
