// crates/flagdb-core/src/lib.rs

//! # flagdb-core
//!
//! An immutable, alphabetically ordered catalog of ~250 country flags with a
//! pure filter engine: free-text search, approximate color matching against
//! a 14-swatch palette, color count and continent, combined with AND.
//!
//! ```rust
//! use flagdb_core::prelude::*;
//!
//! let catalog = FlagCatalog::load()?;
//! let criteria = FilterCriteria::default()
//!     .with_continent("Europe")
//!     .with_color_count(3);
//!
//! for flag in catalog.filter(&criteria).iter().take(3) {
//!     println!("{} ({})", flag.name, flag.code);
//! }
//! # Ok::<(), flagdb_core::FlagError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod builder; // Gated on the 'builder' feature inside the module
pub mod color;
pub mod common;
pub mod controller;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod palette;
pub mod slideshow;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{CatalogStats, SLIDESHOW_AUTO_INTERVAL};
pub use crate::controller::{FilterAction, FilterController};
pub use crate::error::{FlagError, Result};
pub use crate::filter::{filter_flags, FilterCriteria, MAX_COLOR_COUNT};
pub use crate::loader::CatalogLoad;
pub use crate::model::{Continent, FlagCatalog, FlagRecord};
pub use crate::palette::{PaletteColor, PALETTE};
pub use crate::slideshow::{Direction, Slideshow};
// Export the Search Trait (Crucial for users!)
pub use crate::traits::FlagSearch;

/// Bring the common types and traits into scope.
pub mod prelude {
    pub use crate::color::{color_distance, Rgb, COLOR_MATCH_THRESHOLD};
    pub use crate::{
        filter_flags, CatalogLoad, CatalogStats, Continent, FilterAction, FilterController,
        FilterCriteria, FlagCatalog, FlagError, FlagRecord, FlagSearch, PaletteColor, Result,
        Slideshow, MAX_COLOR_COUNT, PALETTE,
    };
}
