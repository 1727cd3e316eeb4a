use redb::TypeName;
pub use v1 as latest_profile;

pub mod v1;

pub trait ProfileVariant {
    const VERSION: u8;
}

#[derive(Debug, Clone)]
pub enum VersionedProfile {
    V1(v1::Profile),
}

impl redb::Value for VersionedProfile {
    type SelfType<'a> = VersionedProfile;
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
            v1::Profile::VERSION => {
                let v1 = postcard::from_bytes::<v1::Profile>(data).expect("invalid profile");
                VersionedProfile::V1(v1)
            }
            version => panic!("unsupported version: {}", version),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        match value {
            VersionedProfile::V1(v1) => {
                postcard::to_extend(v1, vec![v1::Profile::VERSION]).unwrap()
            }
        }
    }

    fn type_name() -> TypeName {
        TypeName::new("cardtap::Profile")
    }
}

#[cfg(test)]
mod tests;
