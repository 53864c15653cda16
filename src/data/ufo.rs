//! Kerning upgrades for fonts loaded with norad
//!
//! norad keys kerning and groups by validated `Name`s in sorted maps. These
//! helpers move that data into the plain tables used by the converter and
//! back again.

use crate::config::KerningPrefixes;
use crate::error::{ConversionError, Result};
use crate::kerning::{convert_with_report, Groups, Kerning, KerningConversion};
use norad::{Font, Name};
use tracing::info;

/// Convert norad kerning into a plain kerning table
pub fn kerning_from_norad(kerning: &norad::Kerning) -> Kerning {
    kerning
        .iter()
        .map(|(first, seconds)| {
            let seconds = seconds
                .iter()
                .map(|(second, value)| (second.to_string(), *value))
                .collect();
            (first.to_string(), seconds)
        })
        .collect()
}

/// Convert norad groups into a plain group table
pub fn groups_from_norad(groups: &norad::Groups) -> Groups {
    groups
        .iter()
        .map(|(name, glyphs)| {
            let glyphs = glyphs.iter().map(|glyph| glyph.to_string()).collect();
            (name.to_string(), glyphs)
        })
        .collect()
}

/// Convert a plain kerning table back to norad kerning
pub fn kerning_to_norad(kerning: &Kerning) -> Result<norad::Kerning> {
    kerning
        .iter()
        .map(|(first, seconds)| {
            let seconds = seconds
                .iter()
                .map(|(second, value)| Ok((to_name(second)?, *value)))
                .collect::<Result<_>>()?;
            Ok((to_name(first)?, seconds))
        })
        .collect()
}

/// Convert a plain group table back to norad groups
pub fn groups_to_norad(groups: &Groups) -> Result<norad::Groups> {
    groups
        .iter()
        .map(|(name, glyphs)| {
            let glyphs = glyphs
                .iter()
                .map(|glyph| to_name(glyph))
                .collect::<Result<Vec<_>>>()?;
            Ok((to_name(name)?, glyphs))
        })
        .collect()
}

/// Upgrade a font's kerning groups to prefixed UFO3 names.
///
/// Replaces `font.kerning` and `font.groups`. The font is left untouched
/// if the prefixes are invalid or a generated name is rejected by norad.
pub fn upgrade_font_kerning(
    font: &mut Font,
    prefixes: &KerningPrefixes,
) -> Result<KerningConversion> {
    let kerning = kerning_from_norad(&font.kerning);
    let mut groups = groups_from_norad(&font.groups);

    let conversion = convert_with_report(&kerning, &mut groups, prefixes)?;

    let new_kerning = kerning_to_norad(&conversion.kerning)?;
    let new_groups = groups_to_norad(&groups)?;
    font.kerning = new_kerning;
    font.groups = new_groups;

    info!(
        "Upgraded kerning groups: {} first-side, {} second-side",
        conversion.first_renames.len(),
        conversion.second_renames.len()
    );

    Ok(conversion)
}

fn to_name(name: &str) -> Result<Name> {
    name.parse::<Name>()
        .map_err(|err| ConversionError::InvalidName {
            name: name.to_string(),
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn name(value: &str) -> Name {
        value.parse().expect("valid test name")
    }

    fn sample_font() -> Font {
        let mut font = Font::new();
        font.groups.insert(name("O"), vec![name("O"), name("Q")]);
        font.groups.insert(name("H"), vec![name("H"), name("I")]);
        font.kerning.insert(
            name("O"),
            BTreeMap::from([(name("H"), -15.0), (name("T"), -30.0)]),
        );
        font
    }

    #[test]
    fn upgrade_renames_groups_in_font() {
        let mut font = sample_font();

        let conversion = upgrade_font_kerning(&mut font, &KerningPrefixes::ufo3()).unwrap();
        assert_eq!(conversion.renamed_count(), 2);

        let seconds = &font.kerning[&name("public.kern1.O")];
        assert_eq!(seconds[&name("public.kern2.H")], -15.0);
        assert_eq!(seconds[&name("T")], -30.0);
        assert!(!font.kerning.contains_key(&name("O")));

        assert_eq!(font.groups[&name("public.kern1.O")], vec![name("O"), name("Q")]);
        assert_eq!(font.groups[&name("public.kern2.H")], vec![name("H"), name("I")]);
        // Originals stay in the group table.
        assert!(font.groups.contains_key(&name("O")));
        assert!(font.groups.contains_key(&name("H")));
        assert_eq!(font.groups.len(), 4);
    }

    #[test]
    fn upgrading_twice_changes_nothing() {
        let mut font = sample_font();
        upgrade_font_kerning(&mut font, &KerningPrefixes::ufo3()).unwrap();
        let kerning = font.kerning.clone();
        let groups = font.groups.clone();

        let conversion = upgrade_font_kerning(&mut font, &KerningPrefixes::ufo3()).unwrap();
        assert!(conversion.is_noop());
        assert_eq!(font.kerning, kerning);
        assert_eq!(font.groups, groups);
    }

    #[test]
    fn invalid_generated_name_leaves_font_untouched() {
        let mut font = sample_font();
        let kerning = font.kerning.clone();
        let groups = font.groups.clone();

        let prefixes = KerningPrefixes::new("\u{1}kern1.", "\u{1}kern2.");
        let err = upgrade_font_kerning(&mut font, &prefixes).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidName { .. }));
        assert_eq!(font.kerning, kerning);
        assert_eq!(font.groups, groups);
    }

    #[test]
    fn identical_prefixes_leave_font_untouched() {
        let mut font = sample_font();
        let groups = font.groups.clone();

        let prefixes = KerningPrefixes::new("same.", "same.");
        let err = upgrade_font_kerning(&mut font, &prefixes).unwrap_err();
        assert!(matches!(err, ConversionError::IdenticalPrefixes { .. }));
        assert_eq!(font.groups, groups);
    }

    #[test]
    fn plain_tables_match_norad_data() {
        let font = sample_font();
        let kerning = kerning_from_norad(&font.kerning);
        let groups = groups_from_norad(&font.groups);

        assert_eq!(kerning["O"]["H"], -15.0);
        assert_eq!(groups["O"], vec!["O".to_string(), "Q".to_string()]);
        assert_eq!(kerning_to_norad(&kerning).unwrap(), font.kerning);
        assert_eq!(groups_to_norad(&groups).unwrap(), font.groups);
    }
}
