//! Public profile types for consumers.
//!
//! `Profile` is the record the editor and the mobile shells work with; the
//! persisted encoding lives in `versioned_profile`.

use crate::types::color::Rgba;
use crate::types::profile_id::ProfileId;
use std::collections::BTreeMap;
use std::time::SystemTime;

pub(crate) mod versioned_profile;

use versioned_profile::latest_profile;

/// Upper bound for the card blur slider. The merge layer does not clamp;
/// callers clamp before constructing a patch.
pub const MAX_BLUR_LEVEL: u8 = 18;

/// A profile carries at most this many custom links.
pub const MAX_CUSTOM_LINKS: usize = 3;

/// A contact-card profile, ready for editing or sharing.
#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: ProfileId,
    pub metadata: Metadata,
    pub name: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    /// Opaque reference to the avatar image; this core never reads image bytes.
    pub avatar_image: Option<String>,
    /// Social platform name → handle/URL. Keys are unique by construction.
    pub socials: BTreeMap<String, String>,
    pub links: Vec<CustomLink>,
    pub aesthetics: CardAesthetics,
}

impl Profile {
    /// Creates an empty profile with default card aesthetics.
    pub fn new(id: ProfileId, now: SystemTime) -> Self {
        Self {
            id,
            metadata: Metadata {
                created_at: now,
                updated_at: now,
            },
            name: None,
            title: None,
            company: None,
            phone: None,
            email: None,
            website: None,
            avatar_image: None,
            socials: BTreeMap::new(),
            links: Vec::new(),
            aesthetics: CardAesthetics::default(),
        }
    }

    /// Converts the stored v1 record to the public type.
    pub(crate) fn from_latest_profile(id: ProfileId, value: latest_profile::Profile) -> Self {
        Self {
            id,
            metadata: Metadata {
                created_at: value.metadata.created_at,
                updated_at: value.metadata.updated_at,
            },
            name: value.name,
            title: value.title,
            company: value.company,
            phone: value.phone,
            email: value.email,
            website: value.website,
            avatar_image: value.avatar_image,
            socials: value.socials,
            links: value
                .links
                .into_iter()
                .map(|l| CustomLink {
                    label: l.label,
                    url: l.url,
                })
                .collect(),
            aesthetics: CardAesthetics {
                primary_color: Rgba::from(value.aesthetics.primary_color),
                secondary_color: Rgba::from(value.aesthetics.secondary_color),
                border_color: Rgba::from(value.aesthetics.border_color),
                background_color: value.aesthetics.background_color.map(Rgba::from),
                blur_level: value.aesthetics.blur_level,
                background_image: value.aesthetics.background_image,
            },
        }
    }

    /// Converts to the v1 record for storage. The id is the table key and is
    /// not part of the stored value.
    pub(crate) fn to_latest_profile(&self) -> latest_profile::Profile {
        latest_profile::Profile {
            metadata: latest_profile::Metadata {
                created_at: self.metadata.created_at,
                updated_at: self.metadata.updated_at,
            },
            name: self.name.clone(),
            title: self.title.clone(),
            company: self.company.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            website: self.website.clone(),
            avatar_image: self.avatar_image.clone(),
            socials: self.socials.clone(),
            links: self
                .links
                .iter()
                .map(|l| latest_profile::Link {
                    label: l.label.clone(),
                    url: l.url.clone(),
                })
                .collect(),
            aesthetics: latest_profile::Aesthetics {
                primary_color: self.aesthetics.primary_color.into(),
                secondary_color: self.aesthetics.secondary_color.into(),
                border_color: self.aesthetics.border_color.into(),
                background_color: self.aesthetics.background_color.map(Into::into),
                blur_level: self.aesthetics.blur_level,
                background_image: self.aesthetics.background_image.clone(),
            },
        }
    }
}

#[cfg_attr(test, derive(PartialEq))]
#[derive(Debug, Clone)]
pub struct Metadata {
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

/// Visual styling of the shareable card.
///
/// `background_color` and `background_image` are independently optional; absence
/// means "no solid background" / "no background image" and is distinct from any
/// concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAesthetics {
    pub primary_color: Rgba,
    pub secondary_color: Rgba,
    pub border_color: Rgba,
    pub background_color: Option<Rgba>,
    /// In `[0, MAX_BLUR_LEVEL]`; the UI slider clamps before handing it here.
    pub blur_level: u8,
    /// Opaque reference, never interpreted as image bytes.
    pub background_image: Option<String>,
}

impl Default for CardAesthetics {
    fn default() -> Self {
        Self {
            primary_color: Rgba::rgb(0x3d, 0x5a, 0xfe),
            secondary_color: Rgba::rgb(0xff, 0xff, 0xff),
            border_color: Rgba::rgb(0xe0, 0xe0, 0xe0),
            background_color: None,
            blur_level: 0,
            background_image: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomLink {
    pub label: String,
    pub url: String,
}
