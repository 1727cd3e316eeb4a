use serde::{Deserialize, Serialize};

use super::EventVariant;

#[cfg_attr(test, derive(Eq, PartialEq))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub direction: Direction,
    pub channel: Channel,
    pub counterpart: Option<String>,
    pub profile: String,
}

impl EventVariant for Event {
    const VERSION: u8 = 1;
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Sent,
    Received,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Channel {
    Nfc,
    Qr,
}
