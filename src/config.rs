use std::path::PathBuf;

/// How the exported workbook is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetLayout {
    /// One worksheet per category (Psy / Koty / Nowo przyjęte).
    PerCategory,
    /// Everything on a single "Zwierzęta" sheet, dogs then cats then arrivals.
    Combined,
}

/// All run-time knobs, passed explicitly into the run.
/// No globals; construct one per scrape.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub output_path: PathBuf,
    pub layout: SheetLayout,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            base_url: "https://schroniskochorzow.pl".to_string(),
            output_path: PathBuf::from("Schronisko Chorzow.xlsx"),
            layout: SheetLayout::PerCategory,
        }
    }
}

impl ScrapeConfig {
    /// Base URL with any trailing slash stripped, safe to append paths to.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
