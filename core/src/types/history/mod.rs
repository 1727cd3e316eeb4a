//! Public sharing-history types.
//!
//! Each NFC/QR exchange appends one `ShareEvent`; the persisted encoding lives
//! in `versioned_event`.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::types::profile_id::ProfileId;

pub(crate) mod versioned_event;

use versioned_event::latest_event;

/// One recorded card exchange.
#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Clone)]
pub struct ShareEvent {
    pub occurred_at: SystemTime,
    pub direction: ShareDirection,
    pub channel: ShareChannel,
    /// Display name of the other party, when known at exchange time.
    pub counterpart: Option<String>,
    /// The local profile that was shared or that received the contact.
    pub profile: ProfileId,
}

impl ShareEvent {
    /// Converts the stored v1 record to the public type. The timestamp is the
    /// table key and is not part of the stored value.
    pub(crate) fn from_latest_event(occurred_at: SystemTime, value: latest_event::Event) -> Self {
        let profile =
            ProfileId::try_from(value.profile.as_str()).expect("invalid profile id in event");
        Self {
            occurred_at,
            direction: match value.direction {
                latest_event::Direction::Sent => ShareDirection::Sent,
                latest_event::Direction::Received => ShareDirection::Received,
            },
            channel: match value.channel {
                latest_event::Channel::Nfc => ShareChannel::Nfc,
                latest_event::Channel::Qr => ShareChannel::Qr,
            },
            counterpart: value.counterpart,
            profile,
        }
    }

    pub(crate) fn to_latest_event(&self) -> latest_event::Event {
        latest_event::Event {
            direction: match self.direction {
                ShareDirection::Sent => latest_event::Direction::Sent,
                ShareDirection::Received => latest_event::Direction::Received,
            },
            channel: match self.channel {
                ShareChannel::Nfc => latest_event::Channel::Nfc,
                ShareChannel::Qr => latest_event::Channel::Qr,
            },
            counterpart: self.counterpart.clone(),
            profile: self.profile.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShareDirection {
    Sent,
    Received,
}

/// Transport over which a card was exchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareChannel {
    #[default]
    Nfc,
    Qr,
}
