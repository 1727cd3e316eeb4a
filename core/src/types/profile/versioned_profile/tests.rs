use super::*;
use std::collections::BTreeMap;
use std::time::SystemTime;

fn sample_v1_profile() -> v1::Profile {
    let now = SystemTime::now();
    v1::Profile {
        metadata: v1::Metadata {
            created_at: now,
            updated_at: now,
        },
        name: Some("Alice".to_string()),
        title: Some("Engineer".to_string()),
        company: None,
        phone: Some("+1 555 0100".to_string()),
        email: None,
        website: None,
        avatar_image: Some("avatars/alice.png".to_string()),
        socials: BTreeMap::from([("github".to_string(), "alice".to_string())]),
        links: vec![v1::Link {
            label: "Blog".to_string(),
            url: "https://example.com".to_string(),
        }],
        aesthetics: v1::Aesthetics {
            primary_color: v1::Color {
                r: 0x3d,
                g: 0x5a,
                b: 0xfe,
                a: 0xff,
            },
            secondary_color: v1::Color {
                r: 0xff,
                g: 0xff,
                b: 0xff,
                a: 0xff,
            },
            border_color: v1::Color {
                r: 0xe0,
                g: 0xe0,
                b: 0xe0,
                a: 0xff,
            },
            background_color: None,
            blur_level: 5,
            background_image: None,
        },
    }
}

#[test]
fn profile_v1_serialization() {
    let original = sample_v1_profile();

    let versioned = VersionedProfile::V1(original.clone());
    let bytes = <VersionedProfile as redb::Value>::as_bytes(&versioned);
    let deserialized = <VersionedProfile as redb::Value>::from_bytes(&bytes);

    #[expect(unreachable_patterns)]
    match deserialized {
        VersionedProfile::V1(profile) => {
            assert_eq!(profile, original);
        }
        _ => panic!("Deserialized to incorrect version"),
    }
}

#[test]
fn profile_v1_bytes_start_with_version_byte() {
    let versioned = VersionedProfile::V1(sample_v1_profile());
    let bytes = <VersionedProfile as redb::Value>::as_bytes(&versioned);
    assert_eq!(bytes[0], v1::Profile::VERSION);
}
