//! UFO1/UFO2 to UFO3 kerning group conversion
//!
//! UFO3 requires every group used in kerning to carry a prefix naming the
//! side of the pair it belongs to. Older sources used bare group names, so
//! each referenced group is copied under a prefixed name and the kerning is
//! rewritten to point at the copies.

use super::unique_name::make_unique;
use super::{Groups, Kerning, RenameMap};
use crate::config::KerningPrefixes;
use crate::error::Result;
use indexmap::IndexSet;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Result of a conversion: the rewritten kerning plus the renames applied
/// on each side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KerningConversion {
    pub kerning: Kerning,
    pub first_renames: RenameMap,
    pub second_renames: RenameMap,
}

impl KerningConversion {
    /// Number of group copies added to the group table
    pub fn renamed_count(&self) -> usize {
        self.first_renames.len() + self.second_renames.len()
    }

    /// True when no group needed a new name
    pub fn is_noop(&self) -> bool {
        self.renamed_count() == 0
    }

    /// Generated group names, first side then second side
    pub fn new_group_names(&self) -> impl Iterator<Item = &str> {
        self.first_renames
            .values()
            .chain(self.second_renames.values())
            .map(String::as_str)
    }
}

/// Convert legacy kerning to prefixed UFO3 kerning groups.
///
/// Returns the rewritten kerning. `groups` is extended **in place** with a
/// copy of every renamed group under its new name; the original entries are
/// kept. Clone the table first if the caller needs it untouched.
///
/// Fails without touching `groups` if both prefixes are equal.
pub fn convert(
    kerning: &Kerning,
    groups: &mut Groups,
    prefixes: &KerningPrefixes,
) -> Result<Kerning> {
    convert_with_report(kerning, groups, prefixes).map(|conversion| conversion.kerning)
}

/// Same as [`convert`], also returning the per-side rename maps.
pub fn convert_with_report(
    kerning: &Kerning,
    groups: &mut Groups,
    prefixes: &KerningPrefixes,
) -> Result<KerningConversion> {
    prefixes.validate()?;

    let (first_referenced, second_referenced) = referenced_groups(kerning, groups, prefixes);

    // Sides are named independently: one group may get a copy on each side.
    let first_renames = allocate_names(&first_referenced, &prefixes.first, groups);
    let second_renames = allocate_names(&second_referenced, &prefixes.second, groups);

    let kerning = rewrite_kerning(kerning, &first_renames, &second_renames);

    for (old_name, new_name) in first_renames.iter().chain(second_renames.iter()) {
        if let Some(glyphs) = groups.get(old_name).cloned() {
            debug!("Copying group {:?} to {:?}", old_name, new_name);
            groups.insert(new_name.clone(), glyphs);
        }
    }

    Ok(KerningConversion {
        kerning,
        first_renames,
        second_renames,
    })
}

/// Groups used in kerning that lack their side's prefix, in the order
/// they are first seen.
fn referenced_groups(
    kerning: &Kerning,
    groups: &Groups,
    prefixes: &KerningPrefixes,
) -> (IndexSet<String>, IndexSet<String>) {
    let mut first_referenced = IndexSet::new();
    let mut second_referenced = IndexSet::new();

    for (first, seconds) in kerning {
        if groups.contains_key(first) && !first.starts_with(&prefixes.first) {
            first_referenced.insert(first.clone());
        }
        for second in seconds.keys() {
            if groups.contains_key(second) && !second.starts_with(&prefixes.second) {
                second_referenced.insert(second.clone());
            }
        }
    }

    (first_referenced, second_referenced)
}

/// Pick a new name for each group, avoiding every existing group name and
/// every name already handed out on this side.
fn allocate_names(referenced: &IndexSet<String>, prefix: &str, groups: &Groups) -> RenameMap {
    let mut taken: HashSet<String> = groups.keys().cloned().collect();
    let mut renames = RenameMap::with_capacity(referenced.len());

    for old_name in referenced {
        let candidate = format!("{prefix}{old_name}");
        let new_name = make_unique(&candidate, &taken);
        if new_name != candidate {
            warn!(
                "Group name {:?} already exists, renaming {:?} to {:?}",
                candidate, old_name, new_name
            );
        }
        taken.insert(new_name.clone());
        renames.insert(old_name.clone(), new_name);
    }

    renames
}

fn rewrite_kerning(
    kerning: &Kerning,
    first_renames: &RenameMap,
    second_renames: &RenameMap,
) -> Kerning {
    let mut rewritten = Kerning::with_capacity(kerning.len());

    for (first, seconds) in kerning {
        let first = first_renames.get(first).unwrap_or(first);
        let seconds = seconds
            .iter()
            .map(|(second, value)| {
                let second = second_renames.get(second).unwrap_or(second);
                (second.clone(), *value)
            })
            .collect();

        if rewritten.insert(first.clone(), seconds).is_some() {
            warn!("Kerning key {:?} appears twice after renaming, keeping the last", first);
        }
    }

    rewritten
}
