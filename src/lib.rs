pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod fetcher;
pub mod listing;
pub mod logger;
pub mod records;

// Exporting types for convenience
pub use config::{ScrapeConfig, SheetLayout};
pub use error::ScrapeError;
pub use extractor::RuleSet;
pub use fetcher::Fetcher;
pub use listing::ShelterScraper;
pub use records::{AnimalRecord, Category, Snapshot};
