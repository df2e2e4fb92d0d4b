use serde::Serialize;

/// The three listing sections of the shelter site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Dogs,
    Cats,
    NewArrivals,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Dogs, Category::Cats, Category::NewArrivals];

    pub fn species_label(&self) -> &'static str {
        match self {
            Category::Dogs => "Pies",
            Category::Cats => "Kot",
            Category::NewArrivals => "Nowo przybyłe",
        }
    }

    pub fn sheet_name(&self) -> &'static str {
        match self {
            Category::Dogs => "Psy",
            Category::Cats => "Koty",
            Category::NewArrivals => "Nowo przyjęte",
        }
    }

    pub fn is_paginated(&self) -> bool {
        !matches!(self, Category::NewArrivals)
    }

    /// URL for the Nth page of this category. New arrivals live on a single
    /// unpaginated page; the page number is ignored there.
    pub fn page_url(&self, base: &str, page: u32) -> String {
        match self {
            Category::Dogs => format!("{}/psy/page/{}/", base, page),
            Category::Cats => format!("{}/koty/page/{}/", base, page),
            Category::NewArrivals => format!("{}/nowo-przyjete/", base),
        }
    }

    /// Header row for this category's worksheet. `AnimalRecord::row` must
    /// stay in the same order, or values land under the wrong header.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Category::Dogs => &[
                "Imię", "Numer", "Płeć", "Wiek", "Rozmiar", "Gatunek", "URL zdjęcia",
            ],
            Category::Cats => &[
                "Imię", "Numer", "Płeć", "Wiek", "Testy", "Gatunek", "URL zdjęcia",
            ],
            Category::NewArrivals => &[
                "Imię",
                "Numer",
                "Płeć",
                "Wiek",
                "Kwarantanna do",
                "Znaleziona",
                "Gatunek",
                "URL zdjęcia",
            ],
        }
    }
}

/// Header of the single-sheet layout, kept byte-for-byte as the old
/// combined export wrote it (no quarantine column).
pub const COMBINED_HEADERS: [&str; 9] = [
    "Imię",
    "Numer",
    "Płeć",
    "Wiek",
    "Rozmiar",
    "Testy",
    "Znaleziona",
    "Gatunek",
    "URL zdjęcia",
];

/// One scraped listing. Every field except the heading text is advisory:
/// the site's blurbs are hand-written and any label can be missing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnimalRecord {
    pub name: String,
    pub number: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub size: Option<String>,
    pub medical_test: Option<String>,
    pub quarantine_until: Option<String>,
    pub found_at: Option<String>,
    pub image_url: Option<String>,
    pub species: &'static str,
}

impl AnimalRecord {
    fn cell<'a>(field: &'a Option<String>) -> &'a str {
        field.as_deref().unwrap_or("")
    }

    /// Cells in the exact order of `category.headers()`.
    pub fn row(&self, category: Category) -> Vec<&str> {
        match category {
            Category::Dogs => vec![
                self.name.as_str(),
                Self::cell(&self.number),
                Self::cell(&self.gender),
                Self::cell(&self.age),
                Self::cell(&self.size),
                self.species,
                Self::cell(&self.image_url),
            ],
            Category::Cats => vec![
                self.name.as_str(),
                Self::cell(&self.number),
                Self::cell(&self.gender),
                Self::cell(&self.age),
                Self::cell(&self.medical_test),
                self.species,
                Self::cell(&self.image_url),
            ],
            Category::NewArrivals => vec![
                self.name.as_str(),
                Self::cell(&self.number),
                Self::cell(&self.gender),
                Self::cell(&self.age),
                Self::cell(&self.quarantine_until),
                Self::cell(&self.found_at),
                self.species,
                Self::cell(&self.image_url),
            ],
        }
    }

    /// Cells in `COMBINED_HEADERS` order.
    pub fn combined_row(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            Self::cell(&self.number),
            Self::cell(&self.gender),
            Self::cell(&self.age),
            Self::cell(&self.size),
            Self::cell(&self.medical_test),
            Self::cell(&self.found_at),
            self.species,
            Self::cell(&self.image_url),
        ]
    }
}

/// One run's worth of scraped data, in export order.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub dogs: Vec<AnimalRecord>,
    pub cats: Vec<AnimalRecord>,
    pub new_arrivals: Vec<AnimalRecord>,
}

impl Snapshot {
    pub fn collections(&self) -> [(Category, &[AnimalRecord]); 3] {
        [
            (Category::Dogs, &self.dogs),
            (Category::Cats, &self.cats),
            (Category::NewArrivals, &self.new_arrivals),
        ]
    }

    pub fn total(&self) -> usize {
        self.dogs.len() + self.cats.len() + self.new_arrivals.len()
    }
}
