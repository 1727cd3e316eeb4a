use redb::TypeName;
use std::cmp::Ordering;
use std::time::{Duration, SystemTime};

/// Composite key for the share-history table.
///
/// Entries sort by timestamp first, so history iterates chronologically and
/// retention pruning can stop at the first unexpired entry. `seq` disambiguates
/// events recorded within the same timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryKey {
    pub timestamp: SystemTime,
    pub seq: u64,
}

fn extract_duration(data: &[u8]) -> (Duration, &[u8]) {
    let (secs, data) = data.split_first_chunk::<8>().unwrap();
    let secs = u64::from_be_bytes(*secs);
    let (nanos, data) = data.split_first_chunk::<4>().unwrap();
    let nanos = u32::from_be_bytes(*nanos);

    let since_epoch = Duration::new(secs, nanos);
    (since_epoch, data)
}

impl redb::Key for HistoryKey {
    fn compare(data1: &[u8], data2: &[u8]) -> Ordering {
        let (data1_duration, data1) = extract_duration(data1);
        let (data2_duration, data2) = extract_duration(data2);

        data1_duration
            .cmp(&data2_duration)
            .then_with(|| data1.cmp(data2))
    }
}

impl redb::Value for HistoryKey {
    type SelfType<'a> = HistoryKey;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        Some(8 + 4 + 8)
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (timestamp_since_epoch, data) = extract_duration(data);
        let (seq, _) = data.split_first_chunk::<8>().unwrap();
        let seq = u64::from_be_bytes(*seq);

        HistoryKey {
            timestamp: SystemTime::UNIX_EPOCH + timestamp_since_epoch,
            seq,
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        let mut bytes = Vec::with_capacity(8 + 4 + 8);
        let duration_since_epoch = value
            .timestamp
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap();
        bytes.extend_from_slice(&duration_since_epoch.as_secs().to_be_bytes());
        bytes.extend_from_slice(&duration_since_epoch.subsec_nanos().to_be_bytes());
        bytes.extend_from_slice(&value.seq.to_be_bytes());
        bytes
    }

    fn type_name() -> TypeName {
        TypeName::new("cardtap::HistoryKey")
    }
}
