//! Kerning and group tables, and their conversion to UFO3 group naming

pub mod convert;
pub mod unique_name;

use indexmap::IndexMap;

/// First name -> second name -> adjustment. Names are glyph or group names.
pub type Kerning = IndexMap<String, IndexMap<String, f64>>;

/// Group name -> glyph names, in source order
pub type Groups = IndexMap<String, Vec<String>>;

/// Old group name -> generated group name, for one kerning side
pub type RenameMap = IndexMap<String, String>;

pub use convert::{convert, convert_with_report, KerningConversion};
pub use unique_name::make_unique;
