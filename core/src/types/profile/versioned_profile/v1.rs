use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::SystemTime;

use super::ProfileVariant;
use crate::types::color::Rgba;

#[cfg_attr(test, derive(Eq, PartialEq))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub metadata: Metadata,
    pub name: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub avatar_image: Option<String>,
    pub socials: BTreeMap<String, String>,
    pub links: Vec<Link>,
    pub aesthetics: Aesthetics,
}

impl ProfileVariant for Profile {
    const VERSION: u8 = 1;
}

#[cfg_attr(test, derive(Eq, PartialEq))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

#[cfg_attr(test, derive(Eq, PartialEq))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[cfg_attr(test, derive(Eq, PartialEq))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aesthetics {
    pub primary_color: Color,
    pub secondary_color: Color,
    pub border_color: Color,
    pub background_color: Option<Color>,
    pub blur_level: u8,
    pub background_image: Option<String>,
}

/// Stored color channels. Kept separate from the public `Rgba` so the v1 wire
/// shape stays frozen even if the public type grows.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color> for Rgba {
    fn from(c: Color) -> Self {
        Rgba {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}
