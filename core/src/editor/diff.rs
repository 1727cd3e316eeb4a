//! Field-by-field comparison of a draft against its snapshot.
//!
//! Normalization happens here, once, rather than at every call site: a nullable
//! text field holding `None`, an empty string, or only whitespace all mean "no
//! value" and compare equal.

use std::collections::BTreeMap;

use crate::types::Profile;

/// True if the two profiles differ in any user-visible field.
///
/// Total and side-effect-free. Identity and metadata timestamps are not
/// user-visible and never count. Accent (primary/secondary) colors save through
/// their own immediate path and are not tracked here either.
pub(crate) fn profiles_differ(current: &Profile, initial: &Profile) -> bool {
    if text_differs(&current.name, &initial.name)
        || text_differs(&current.title, &initial.title)
        || text_differs(&current.company, &initial.company)
        || text_differs(&current.phone, &initial.phone)
        || text_differs(&current.email, &initial.email)
        || text_differs(&current.website, &initial.website)
    {
        return true;
    }

    if reference_differs(&current.avatar_image, &initial.avatar_image) {
        return true;
    }

    if socials_differ(&current.socials, &initial.socials) {
        return true;
    }

    if links_differ(current, initial) {
        return true;
    }

    let (cur, init) = (&current.aesthetics, &initial.aesthetics);
    cur.blur_level != init.blur_level
        || cur.border_color != init.border_color
        || cur.background_color != init.background_color
        || reference_differs(&cur.background_image, &init.background_image)
}

/// Trimmed-string comparison; `None` equals empty or whitespace-only.
fn text_differs(a: &Option<String>, b: &Option<String>) -> bool {
    normalize_text(a) != normalize_text(b)
}

fn normalize_text(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or("")
}

/// Image references are opaque identifiers, not user text: `None` still equals
/// the empty string, but no trimming is applied.
fn reference_differs(a: &Option<String>, b: &Option<String>) -> bool {
    a.as_deref().unwrap_or("") != b.as_deref().unwrap_or("")
}

/// A key present on one side with a different or absent value on the other is a
/// difference. Entries whose trimmed value is empty count as absent.
fn socials_differ(a: &BTreeMap<String, String>, b: &BTreeMap<String, String>) -> bool {
    let normalize = |map: &BTreeMap<String, String>| -> BTreeMap<String, String> {
        map.iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| (k.clone(), v.trim().to_string()))
            .collect()
    };

    normalize(a) != normalize(b)
}

/// A change in link count is a difference; so is a content change at any shared
/// index, independent of count.
fn links_differ(current: &Profile, initial: &Profile) -> bool {
    if current.links.len() != initial.links.len() {
        return true;
    }

    current
        .links
        .iter()
        .zip(initial.links.iter())
        .any(|(a, b)| a.label.trim() != b.label.trim() || a.url.trim() != b.url.trim())
}
