//! Replies to every practitioner message in a thread.
//!
//! No dedup marker and no search: repeated practitioner messages in the
//! same thread each get a reply. The reply is sent on behalf of the other
//! thread participant (the trigger's first recipient) and stamped with the
//! current time.

use tracing::info;

use careline_client::api::RecordClient;
use careline_client::error::ClientError;
use careline_core::models::communication::{Communication, Payload};
use careline_core::models::event::BotEvent;

use crate::reply;

/// Reply to a practitioner message in a thread.
///
/// Skips when the sender is not a practitioner or when the message is not
/// part of a thread.
pub async fn handler<C>(client: &C, event: BotEvent) -> Result<Option<Communication>, ClientError>
where
    C: RecordClient + ?Sized,
{
    let message = event.input;
    let sender = match reply::qualify(&message) {
        Some(qualified) => qualified.sender.clone(),
        None => return Ok(None),
    };

    let response = client
        .create(Communication {
            status: message.status,
            sender: message.recipient.first().cloned(),
            recipient: vec![sender],
            payload: vec![Payload::text(reply::AUTO_RESPONSE_TEXT)],
            part_of: message.part_of,
            sent: Some(jiff::Timestamp::now()),
            ..Default::default()
        })
        .await?;

    info!(
        reply = response.id.as_deref().unwrap_or(""),
        "auto-response created"
    );
    Ok(Some(response))
}
