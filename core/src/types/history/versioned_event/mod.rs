use redb::TypeName;
pub use v1 as latest_event;

pub mod v1;

pub trait EventVariant {
    const VERSION: u8;
}

#[derive(Debug, Clone)]
pub enum VersionedEvent {
    V1(v1::Event),
}

impl redb::Value for VersionedEvent {
    type SelfType<'a> = VersionedEvent;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (version, data) = data.split_first().expect("empty data");
        match *version {
            v1::Event::VERSION => {
                let v1 = postcard::from_bytes::<v1::Event>(data).expect("invalid event");
                VersionedEvent::V1(v1)
            }
            version => panic!("unsupported version: {}", version),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        match value {
            VersionedEvent::V1(v1) => postcard::to_extend(v1, vec![v1::Event::VERSION]).unwrap(),
        }
    }

    fn type_name() -> TypeName {
        TypeName::new("cardtap::ShareEvent")
    }
}
