use std::error::Error;

use log::info;
use shelter_scraper::{export, logger, ScrapeConfig, ShelterScraper};

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();

    let config = ScrapeConfig::default();
    info!("Starting shelter scrape against {}", config.base_url);

    let scraper = ShelterScraper::new();
    let snapshot = scraper.scrape_all(&config)?;

    export::write_workbook(&snapshot, &config)?;
    info!("Done. {} records exported.", snapshot.total());
    Ok(())
}
