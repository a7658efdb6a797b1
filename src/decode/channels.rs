//! Extracts gated channel values from a reading's `channels` array.

use std::collections::HashMap;

use log::trace;
use serde::Deserialize;

use crate::decode::error::DecodeError;
use crate::types::variable::Variable;

/// One element of a reading's `channels` array, as reported on the wire.
///
/// `value` is deserialized leniently: invalid channels are reported with a
/// `null` value by some stations, and those records must not fail the parse
/// since the gate drops them anyway.
#[derive(Debug, Deserialize)]
pub(crate) struct RawChannel {
    pub(crate) name: String,
    pub(crate) value: Option<f64>,
    pub(crate) valid: bool,
    pub(crate) status: i64,
}

/// Decodes the per-channel values of one reading into a map keyed by the
/// known variables.
///
/// A channel contributes an entry iff `valid == true && status == 1`; gated
/// channels are omitted entirely, so callers can distinguish "channel absent
/// or invalid" from "channel present with value 0". Channels with names
/// outside the known set are skipped. Duplicate names resolve
/// last-seen-wins in a single left-to-right pass.
///
/// A channel that passes the gate without a numeric value fails the whole
/// decode.
pub(crate) fn decode_channels(
    channels: &[RawChannel],
) -> Result<HashMap<Variable, f64>, DecodeError> {
    let mut values = HashMap::new();
    for channel in channels {
        if !channel.valid || channel.status != 1 {
            trace!(
                "channel '{}' filtered (valid={}, status={})",
                channel.name,
                channel.valid,
                channel.status
            );
            continue;
        }
        let value = channel.value.ok_or_else(|| DecodeError::ChannelValue {
            channel: channel.name.clone(),
        })?;
        if let Some(variable) = Variable::from_channel_name(&channel.name) {
            values.insert(variable, value);
        }
    }
    Ok(values)
}
