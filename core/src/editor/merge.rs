//! Partial updates of card aesthetics.
//!
//! Each patch field carries exactly one instruction. Required fields are either
//! kept or overwritten; the two optional fields (background color, background
//! image) can additionally be cleared back to absent. Because an instruction is
//! a single enum value, "set and clear at the same time" cannot be expressed,
//! which is what gives clear its precedence.

use crate::types::{CardAesthetics, MAX_BLUR_LEVEL, Rgba};

/// Instruction for a required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    Keep,
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        Self::Keep
    }
}

/// Instruction for an optional field: keep, overwrite, or clear to absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionalFieldUpdate<T> {
    Keep,
    Set(T),
    Clear,
}

impl<T> Default for OptionalFieldUpdate<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T: Clone> FieldUpdate<T> {
    fn resolve(&self, existing: &T) -> T {
        match self {
            FieldUpdate::Keep => existing.clone(),
            FieldUpdate::Set(value) => value.clone(),
        }
    }
}

impl<T: Clone> OptionalFieldUpdate<T> {
    fn resolve(&self, existing: &Option<T>) -> Option<T> {
        match self {
            OptionalFieldUpdate::Keep => existing.clone(),
            OptionalFieldUpdate::Set(value) => Some(value.clone()),
            OptionalFieldUpdate::Clear => None,
        }
    }
}

/// One instruction per aesthetics field. Default is all-Keep, so
/// `aesthetics.merged(&AestheticsPatch::default())` equals `aesthetics`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AestheticsPatch {
    pub primary_color: FieldUpdate<Rgba>,
    pub secondary_color: FieldUpdate<Rgba>,
    pub border_color: FieldUpdate<Rgba>,
    pub blur_level: FieldUpdate<u8>,
    pub background_color: OptionalFieldUpdate<Rgba>,
    pub background_image: OptionalFieldUpdate<String>,
}

impl CardAesthetics {
    /// Pure structural merge: applies every instruction in the patch and
    /// returns the result. Performs no validation; callers clamp blur with
    /// [`clamp_blur_level`] before building a patch.
    pub fn merged(&self, patch: &AestheticsPatch) -> CardAesthetics {
        CardAesthetics {
            primary_color: patch.primary_color.resolve(&self.primary_color),
            secondary_color: patch.secondary_color.resolve(&self.secondary_color),
            border_color: patch.border_color.resolve(&self.border_color),
            background_color: patch.background_color.resolve(&self.background_color),
            blur_level: patch.blur_level.resolve(&self.blur_level),
            background_image: patch.background_image.resolve(&self.background_image),
        }
    }
}

/// Clamps a raw slider value into `[0, MAX_BLUR_LEVEL]`.
pub fn clamp_blur_level(level: u8) -> u8 {
    level.min(MAX_BLUR_LEVEL)
}
