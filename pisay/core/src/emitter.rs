//! Response Emitter
//!
//! Renders text into a speech bubble and publishes it to the host.

use tokio::sync::mpsc;

use crate::bubble::render_bubble;
use crate::messages::{MessageId, ResponseMessage};

/// Publishes bubbles on the host's message channel
#[derive(Clone, Debug)]
pub struct ResponseEmitter {
    tx: mpsc::Sender<ResponseMessage>,
}

impl ResponseEmitter {
    /// Create an emitter writing to `tx`
    #[must_use]
    pub fn new(tx: mpsc::Sender<ResponseMessage>) -> Self {
        Self { tx }
    }

    /// Render `text` and publish it
    ///
    /// A closed channel is logged and otherwise ignored.
    pub async fn emit(&self, text: &str) -> MessageId {
        let message = ResponseMessage::rendered_text(render_bubble(text));
        let id = message.id.clone();

        if let Err(e) = self.tx.send(message).await {
            tracing::warn!(id = %id.0, error = %e, "Response channel closed, bubble dropped");
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::PISAY_MESSAGE_TYPE;

    #[tokio::test]
    async fn test_emit_publishes_rendered_bubble() {
        let (tx, mut rx) = mpsc::channel(4);
        let emitter = ResponseEmitter::new(tx);

        let id = emitter.emit("hello there").await;
        let msg = rx.recv().await.unwrap();

        assert_eq!(msg.id, id);
        assert_eq!(msg.custom_type, PISAY_MESSAGE_TYPE);
        assert!(msg.display);
        assert_eq!(msg.content, render_bubble("hello there"));
    }

    #[tokio::test]
    async fn test_closed_channel_is_absorbed() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let emitter = ResponseEmitter::new(tx);
        emitter.emit("nobody listening").await;
    }
}
