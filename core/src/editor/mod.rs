//! Profile editing session: draft state, dirty detection, card-aesthetics
//! merging, and the recent-color-combination ring.
//!
//! One editor session owns exactly one draft. The session is synchronous and
//! single-threaded; persistence goes through [`crate::store::ProfileStore`].

use std::time::SystemTime;

use crate::store::ProfileStore;
use crate::store::error::StoreError;
use crate::types::{CardAesthetics, Profile};

pub(crate) mod diff;
pub mod merge;
pub mod recents;

pub use merge::{AestheticsPatch, FieldUpdate, OptionalFieldUpdate, clamp_blur_level};
pub use recents::{ColorCombination, RecentCombinations};

/// An in-progress edit of one profile.
///
/// `initial` is the snapshot taken when the profile was loaded (or last saved);
/// `current` is the working copy every edit mutates. Dirty means the two differ
/// in some user-visible field.
pub struct ProfileEditor {
    current: Profile,
    initial: Profile,
    recents: RecentCombinations,
}

impl ProfileEditor {
    /// Opens an editing session on the given profile. Both sides of the
    /// comparison start out identical, so the session starts clean.
    pub fn load(profile: Profile) -> Self {
        Self {
            initial: profile.clone(),
            current: profile,
            recents: RecentCombinations::new(),
        }
    }

    /// Switches the session to a different profile, discarding the draft.
    ///
    /// Callers must persist the in-flight draft first if it is dirty; this
    /// method does not save.
    pub fn reload(&mut self, profile: Profile) {
        self.initial = profile.clone();
        self.current = profile;
    }

    pub fn current(&self) -> &Profile {
        &self.current
    }
}

/// Draft operations.
impl ProfileEditor {
    /// Applies an edit to the working copy. The snapshot is never touched.
    pub fn mutate(&mut self, edit: impl FnOnce(&mut Profile)) {
        edit(&mut self.current);
    }

    /// True if the working copy differs from the snapshot in any user-visible
    /// field.
    pub fn is_dirty(&self) -> bool {
        diff::profiles_differ(&self.current, &self.initial)
    }

    /// Advances the snapshot to the working copy. Only call after the draft
    /// has been persisted; `save` does this automatically.
    pub fn commit(&mut self) {
        self.initial = self.current.clone();
    }
}

/// Aesthetics operations.
impl ProfileEditor {
    /// Applies a patch to the draft's card aesthetics.
    pub fn apply_aesthetics(&mut self, patch: &AestheticsPatch) {
        self.current.aesthetics = self.current.aesthetics.merged(patch);
    }

    /// Computes the aesthetics a patch would produce, without mutating the
    /// draft. Drives the live card preview.
    pub fn preview_aesthetics(&self, patch: &AestheticsPatch) -> CardAesthetics {
        self.current.aesthetics.merged(patch)
    }

    /// Records a color combination in the session's recent list.
    pub fn remember_combination(&mut self, combination: ColorCombination) {
        self.recents.add(combination);
    }

    /// Recently used color combinations, most recent first.
    pub fn recent_combinations(&self) -> &[ColorCombination] {
        self.recents.as_slice()
    }
}

/// Persistence operations.
impl ProfileEditor {
    /// Persists the working copy and, on success, advances the snapshot.
    ///
    /// On failure both `current` and `initial` are left untouched, so the
    /// session stays dirty and the save can be retried.
    pub fn save(&mut self, store: &mut ProfileStore, now: SystemTime) -> Result<(), StoreError> {
        self.save_with(|profile| store.save(profile, now))
    }

    /// Like `save`, with the persist step supplied by the caller.
    pub fn save_with(
        &mut self,
        persist: impl FnOnce(&Profile) -> Result<(), StoreError>,
    ) -> Result<(), StoreError> {
        persist(&self.current)?;
        self.commit();
        Ok(())
    }
}
