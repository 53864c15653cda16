//! Font data interop

pub mod ufo;

pub use ufo::{
    groups_from_norad, groups_to_norad, kerning_from_norad, kerning_to_norad,
    upgrade_font_kerning,
};
