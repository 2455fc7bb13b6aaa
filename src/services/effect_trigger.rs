use crate::clients::effect_client::EffectClient;
use crate::models::EffectRequest;
use crate::notify::Notifier;
use log::{error, info};
use std::sync::Arc;
use tokio::task::JoinHandle;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text.";
pub const DISPATCH_FAILED_MESSAGE: &str = "Error: Unable to trigger the endpoint";

/// Sends `input` to the server as a `text_effect` run.
///
/// Returns the handle of the spawned dispatch task, or `None` when the
/// input was blank and nothing was sent. The handle may be dropped;
/// the dispatch finishes on its own and reports through `notifier` and
/// the log. Errors never escape the task.
pub fn send_text_effect(
    client: Arc<EffectClient>,
    notifier: Arc<dyn Notifier>,
    input: &str,
) -> Option<JoinHandle<()>> {
    if input.trim().is_empty() {
        notifier.alert(EMPTY_INPUT_MESSAGE);
        return None;
    }

    let request = EffectRequest::text_effect(input);
    Some(tokio::spawn(async move {
        match client.start_effect(request).await {
            Ok(result) => info!("text_effect accepted: {}", result),
            Err(e) => {
                notifier.alert(DISPATCH_FAILED_MESSAGE);
                error!("text_effect dispatch failed: {}", e);
            }
        }
    }))
}
