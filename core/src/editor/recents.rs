//! Most-recently-used ring of color combinations for the preset picker.

use crate::types::Rgba;

/// The preset picker shows at most this many recent combinations.
pub const RECENT_COMBINATIONS_CAP: usize = 3;

/// A color-combination preset. A combination either pairs primary/secondary
/// accent colors or pairs a background with a border color; all fields stay
/// optional so both shapes share one type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorCombination {
    pub primary: Option<Rgba>,
    pub secondary: Option<Rgba>,
    pub background: Option<Rgba>,
    pub border: Option<Rgba>,
}

/// Capped MRU list, most recent first, de-duplicated on insert.
///
/// Session-scoped UI convenience; not persisted with the profile.
#[derive(Debug, Clone, Default)]
pub struct RecentCombinations {
    entries: Vec<ColorCombination>,
}

impl RecentCombinations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a combination at the front.
    ///
    /// An existing entry matching the incoming one is removed first, so a
    /// re-selected combination moves to the front instead of duplicating.
    /// Matching uses (primary, secondary) when the incoming combination
    /// specifies both, and (background, border) otherwise. Anything beyond the
    /// cap is dropped, oldest first.
    pub fn add(&mut self, combination: ColorCombination) {
        let by_accent = combination.primary.is_some() && combination.secondary.is_some();

        self.entries.retain(|entry| {
            let matches = if by_accent {
                entry.primary == combination.primary && entry.secondary == combination.secondary
            } else {
                entry.background == combination.background && entry.border == combination.border
            };
            !matches
        });

        self.entries.insert(0, combination);
        self.entries.truncate(RECENT_COMBINATIONS_CAP);
    }

    pub fn as_slice(&self) -> &[ColorCombination] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
