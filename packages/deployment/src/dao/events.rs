use cosmwasm_std::Event;

use crate::error::DeployError::{MissingEvent, MissingEventAttribute};
use crate::error::DeployResult;

const WASM_EVENT_PREFIX: &str = "wasm-";

/// Returns the value of `attribute` in the first `event` of a transaction.
/// Events emitted by contracts are matched with or without the `wasm-` prefix.
pub fn event_argument(events: &[Event], event: &str, attribute: &str) -> DeployResult<String> {
    let prefixed = format!("{}{}", WASM_EVENT_PREFIX, event);

    let matching = events
        .iter()
        .find(|candidate| candidate.ty == event || candidate.ty == prefixed)
        .ok_or_else(|| MissingEvent {
            event: event.to_string(),
        })?;

    matching
        .attributes
        .iter()
        .find(|attr| attr.key == attribute)
        .map(|attr| attr.value.clone())
        .ok_or_else(|| MissingEventAttribute {
            event: event.to_string(),
            attribute: attribute.to_string(),
        })
}
