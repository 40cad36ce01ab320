// crates/flagdb-core/src/model/mod.rs
pub mod catalog;
pub mod continent;
pub mod flag;

pub use catalog::FlagCatalog;
pub use continent::Continent;
pub use flag::FlagRecord;
