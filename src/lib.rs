//! UFO kerning group upgrades
//!
//! Converts UFO1/UFO2 kerning, where groups are referenced by bare names,
//! into UFO3 kerning where every kerning group carries a side prefix.
//!
//! ```
//! use indexmap::indexmap;
//! use ufo_kerning::{convert, Groups, Kerning, KerningPrefixes};
//!
//! let kerning: Kerning = indexmap! {
//!     "O".to_string() => indexmap! { "T".to_string() => -30.0 },
//! };
//! let mut groups: Groups = indexmap! {
//!     "O".to_string() => vec!["O".to_string(), "Q".to_string()],
//! };
//!
//! let kerning = convert(&kerning, &mut groups, &KerningPrefixes::ufo3()).unwrap();
//! assert_eq!(kerning["public.kern1.O"]["T"], -30.0);
//! assert!(groups.contains_key("public.kern1.O"));
//! ```
pub mod config;
pub mod data;
pub mod error;
pub mod kerning;

pub use config::KerningPrefixes;
pub use error::{ConversionError, Result};
pub use kerning::{
    convert, convert_with_report, make_unique, Groups, Kerning, KerningConversion, RenameMap,
};
