use log::{debug, info};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::extractor::RuleSet;
use crate::fetcher::Fetcher;
use crate::records::{AnimalRecord, Category, Snapshot};

/// One animal card as it sits on a category page, before field extraction.
#[derive(Debug)]
pub struct ListingItem {
    pub name: String,
    pub details: String,
    pub image_url: Option<String>,
}

pub struct ShelterScraper {
    fetcher: Fetcher,
}

impl ShelterScraper {
    pub fn new() -> Self {
        ShelterScraper {
            fetcher: Fetcher::new(),
        }
    }

    /// Scrape all three categories in export order.
    pub fn scrape_all(&self, config: &ScrapeConfig) -> Result<Snapshot, ScrapeError> {
        let snapshot = Snapshot {
            dogs: self.scrape_category(config, Category::Dogs)?,
            cats: self.scrape_category(config, Category::Cats)?,
            new_arrivals: self.scrape_category(config, Category::NewArrivals)?,
        };
        info!(
            "Scraped {} records ({} dogs, {} cats, {} new arrivals)",
            snapshot.total(),
            snapshot.dogs.len(),
            snapshot.cats.len(),
            snapshot.new_arrivals.len()
        );
        Ok(snapshot)
    }

    /// Walk a category's pages until one comes back without listing items.
    /// New arrivals are a single unpaginated page. Any fetch failure
    /// aborts the run; item order is page order then document order.
    pub fn scrape_category(
        &self,
        config: &ScrapeConfig,
        category: Category,
    ) -> Result<Vec<AnimalRecord>, ScrapeError> {
        let rules = RuleSet::for_category(category)?;
        let mut records = Vec::new();

        let mut page = 1;
        loop {
            let url = category.page_url(config.base(), page);
            let document = self.fetcher.fetch_document(&url)?;
            let items = parse_items(&document, &url);

            if items.is_empty() {
                info!("{}: page {} has no listings, stopping", category.sheet_name(), page);
                break;
            }
            info!(
                "{}: page {} yielded {} listings",
                category.sheet_name(),
                page,
                items.len()
            );

            for item in items {
                records.push(build_record(category, &rules, item));
            }

            if !category.is_paginated() {
                break;
            }
            page += 1;
        }

        Ok(records)
    }
}

impl Default for ShelterScraper {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull all animal cards out of one page. Cards the site renders without a
/// heading still count as items (they keep pagination alive) but export
/// with an empty name.
pub fn parse_items(document: &Html, page_url: &str) -> Vec<ListingItem> {
    let item_selector = Selector::parse(".rt-grid-item").unwrap();
    let name_selector = Selector::parse("h2 strong").unwrap();
    let details_selector = Selector::parse("p").unwrap();
    let image_selector = Selector::parse(".rt-img-holder img").unwrap();

    let mut items = Vec::new();
    for element in document.select(&item_selector) {
        let name = element
            .select(&name_selector)
            .next()
            .map(|n| collect_text(n))
            .unwrap_or_default();

        let details = element
            .select(&details_selector)
            .map(collect_text)
            .collect::<Vec<_>>()
            .join(" ");

        let image_url = element
            .select(&image_selector)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(|src| resolve_image_url(page_url, src));

        items.push(ListingItem {
            name,
            details,
            image_url,
        });
    }
    items
}

fn collect_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

/// Make relative image paths absolute against the page they came from.
/// If the page URL itself won't parse, keep whatever the site gave us.
fn resolve_image_url(page_url: &str, src: &str) -> String {
    match Url::parse(page_url).and_then(|base| base.join(src)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => src.to_string(),
    }
}

fn build_record(category: Category, rules: &RuleSet, item: ListingItem) -> AnimalRecord {
    let mut record = AnimalRecord {
        name: item.name,
        image_url: item.image_url,
        species: category.species_label(),
        ..Default::default()
    };
    rules.extract(&item.details, &mut record);

    // The new-arrivals page headlines the intake number instead of a name.
    if category == Category::NewArrivals {
        record.number = Some(record.name.clone());
    }

    if let Ok(json) = serde_json::to_string(&record) {
        debug!("extracted: {}", json);
    }
    record
}
