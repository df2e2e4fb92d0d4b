use regex::Regex;

use crate::error::ScrapeError;
use crate::records::{AnimalRecord, Category};

/// Which record field a rule fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Number,
    Gender,
    Age,
    Size,
    MedicalTest,
    QuarantineUntil,
    FoundAt,
}

impl Field {
    fn name(&self) -> &'static str {
        match self {
            Field::Number => "number",
            Field::Gender => "gender",
            Field::Age => "age",
            Field::Size => "size",
            Field::MedicalTest => "medical_test",
            Field::QuarantineUntil => "quarantine_until",
            Field::FoundAt => "found_at",
        }
    }
}

/// What part of a regex hit becomes the field value.
#[derive(Debug, Clone, Copy)]
pub enum Capture {
    /// First capture group.
    FirstGroup,
    /// The entire matched text (used for the FIV/FELV test, where the
    /// label and parenthesized result together are the value).
    WholeMatch,
}

/// One declarative extraction rule: pattern in, trimmed value (or default)
/// out. Rules are applied independently; a miss never aborts anything.
#[derive(Debug)]
struct FieldRule {
    field: Field,
    pattern: Regex,
    capture: Capture,
    /// Prepended to the captured text, e.g. "ur. " for dog birth years.
    prefix: Option<&'static str>,
    /// Placeholder when the pattern does not match; None leaves the field absent.
    default: Option<&'static str>,
}

impl FieldRule {
    fn apply(&self, details: &str) -> Option<String> {
        let hit = match self.capture {
            Capture::WholeMatch => self.pattern.find(details).map(|m| m.as_str()),
            Capture::FirstGroup => self
                .pattern
                .captures(details)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str()),
        };

        match hit {
            Some(text) => {
                let text = text.trim();
                Some(match self.prefix {
                    Some(prefix) => format!("{}{}", prefix, text),
                    None => text.to_string(),
                })
            }
            None => self.default.map(str::to_string),
        }
    }
}

/// Characters that never occur in correctly encoded Polish label text but
/// show up when UTF-8 bytes get decoded as Latin-1/cp1252 ("Płeć:" turns
/// into "PÅ‚eÄ‡:"). A pattern carrying one of these compiles fine and then
/// silently matches nothing, so compilation refuses it instead.
const MOJIBAKE_MARKERS: [char; 5] = ['\u{FFFD}', 'Ã', 'Å', 'Ä', 'Â'];

/// The compiled rule table for one category.
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

type RuleSpec = (
    Field,
    &'static str,
    Capture,
    Option<&'static str>,
    Option<&'static str>,
);

impl RuleSet {
    pub fn for_category(category: Category) -> Result<Self, ScrapeError> {
        let specs: &[RuleSpec] = match category {
            Category::Dogs => &[
                (Field::Number, r"Numer:\s*([\d/-]+)", Capture::FirstGroup, None, None),
                (
                    Field::Gender,
                    r"Płeć:\s*(samiec|samica|samce|samice)",
                    Capture::FirstGroup,
                    None,
                    None,
                ),
                // "Wiek: ur. 03.2021" -> "ur. 2021"
                (
                    Field::Age,
                    r"Wiek:\s*ur\.\s*(?:\d{2}\.)?\s*(\d{4})",
                    Capture::FirstGroup,
                    Some("ur. "),
                    None,
                ),
                (Field::Size, r"Rozmiar:\s*(.*)", Capture::FirstGroup, None, None),
            ],
            Category::Cats => &[
                (Field::Number, r"Numer:\s*([\d/-]+)", Capture::FirstGroup, None, None),
                (
                    Field::Gender,
                    r"Płeć:\s*(samiec|samica)",
                    Capture::FirstGroup,
                    None,
                    None,
                ),
                (
                    Field::Age,
                    r"Wiek:\s*(.*?)\s*(?:Znaleziona|Znaleziony|$)",
                    Capture::FirstGroup,
                    None,
                    None,
                ),
                // Either "Test FIV/FELV (ujemny)" or the split
                // "Test FIV (ujemny) / FELV (ujemny)" form.
                (
                    Field::MedicalTest,
                    r"Test FIV/FELV\s*\([^)]+\)|Test FIV\s*\([^)]+\)\s*/\s*FELV\s*\([^)]+\)",
                    Capture::WholeMatch,
                    None,
                    Some("Brak testu"),
                ),
            ],
            Category::NewArrivals => &[
                (
                    Field::QuarantineUntil,
                    r"Kwarantanna do:\s*(\d{2}\.\d{2}\.\d{4})",
                    Capture::FirstGroup,
                    None,
                    Some("Brak daty"),
                ),
                (
                    Field::Gender,
                    r"Płeć:\s*(samiec|samica)",
                    Capture::FirstGroup,
                    None,
                    Some("Brak płci"),
                ),
                (
                    Field::Age,
                    r"Wiek:\s*(.*?)\s*(?:Znaleziona|Znaleziony|$)",
                    Capture::FirstGroup,
                    None,
                    Some("Brak wieku"),
                ),
                (
                    Field::FoundAt,
                    r"(?:Znaleziona|Znaleziony):\s*(.*)",
                    Capture::FirstGroup,
                    None,
                    Some("Brak miejsca"),
                ),
            ],
        };

        let mut rules = Vec::with_capacity(specs.len());
        for &(field, source, capture, prefix, default) in specs {
            rules.push(compile_rule(field, source, capture, prefix, default)?);
        }
        Ok(RuleSet { rules })
    }

    /// Run every rule over the normalized detail blob and fill the
    /// matching record fields. Misses leave fields absent or at their
    /// placeholder; nothing here fails.
    pub fn extract(&self, details: &str, record: &mut AnimalRecord) {
        let details = normalize_whitespace(details);
        for rule in &self.rules {
            let value = rule.apply(&details);
            match rule.field {
                Field::Number => record.number = value,
                Field::Gender => record.gender = value,
                Field::Age => record.age = value,
                Field::Size => record.size = value,
                Field::MedicalTest => record.medical_test = value,
                Field::QuarantineUntil => record.quarantine_until = value,
                Field::FoundAt => record.found_at = value,
            }
        }
    }
}

fn compile_rule(
    field: Field,
    source: &str,
    capture: Capture,
    prefix: Option<&'static str>,
    default: Option<&'static str>,
) -> Result<FieldRule, ScrapeError> {
    if source.chars().any(|c| MOJIBAKE_MARKERS.contains(&c)) {
        return Err(ScrapeError::CorruptedPattern(field.name()));
    }
    let pattern = Regex::new(source).map_err(|source| ScrapeError::Pattern {
        field: field.name(),
        source,
    })?;
    Ok(FieldRule {
        field,
        pattern,
        capture,
        prefix,
        default,
    })
}

/// Collapse all runs of whitespace to single spaces. The detail blob is
/// stitched together from several <p> elements and the site's authors are
/// generous with stray newlines.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(category: Category, details: &str) -> AnimalRecord {
        let rules = RuleSet::for_category(category).unwrap();
        let mut record = AnimalRecord::default();
        rules.extract(details, &mut record);
        record
    }

    #[test]
    fn dog_blob_extracts_all_fields() {
        let record = extract(
            Category::Dogs,
            "Numer: 45/24 Płeć: samiec Wiek: ur. 03.2021 Rozmiar: średni",
        );
        assert_eq!(record.number.as_deref(), Some("45/24"));
        assert_eq!(record.gender.as_deref(), Some("samiec"));
        assert_eq!(record.age.as_deref(), Some("ur. 2021"));
        assert_eq!(record.size.as_deref(), Some("średni"));
    }

    #[test]
    fn dog_birth_year_without_month() {
        let record = extract(Category::Dogs, "Wiek: ur. 2019");
        assert_eq!(record.age.as_deref(), Some("ur. 2019"));
    }

    #[test]
    fn number_has_no_surrounding_whitespace() {
        let record = extract(Category::Dogs, "Numer:   123/45   Płeć: samica");
        assert_eq!(record.number.as_deref(), Some("123/45"));
    }

    #[test]
    fn plural_gender_forms_match_for_dogs() {
        let record = extract(Category::Dogs, "Płeć: samice");
        assert_eq!(record.gender.as_deref(), Some("samice"));
    }

    #[test]
    fn missing_gender_label_stays_absent_for_dogs() {
        let record = extract(Category::Dogs, "Numer: 7/24 Wiek: ur. 2020");
        assert_eq!(record.gender, None);
    }

    #[test]
    fn missing_gender_label_gets_placeholder_for_arrivals() {
        let record = extract(Category::NewArrivals, "Wiek: ok. 2 lata");
        assert_eq!(record.gender.as_deref(), Some("Brak płci"));
    }

    #[test]
    fn cat_age_stops_before_found_label() {
        let record = extract(
            Category::Cats,
            "Wiek: ok. 3 lata Znaleziony: Chorzów, ul. Główna",
        );
        assert_eq!(record.age.as_deref(), Some("ok. 3 lata"));
    }

    #[test]
    fn cat_age_runs_to_end_without_found_label() {
        let record = extract(Category::Cats, "Numer: 9/24 Wiek: ok. 5 miesięcy");
        assert_eq!(record.age.as_deref(), Some("ok. 5 miesięcy"));
    }

    #[test]
    fn fiv_felv_combined_form_matches_whole() {
        let record = extract(Category::Cats, "Wiek: 2 lata Test FIV/FELV (ujemny)");
        assert_eq!(
            record.medical_test.as_deref(),
            Some("Test FIV/FELV (ujemny)")
        );
    }

    #[test]
    fn fiv_felv_split_form_matches_whole() {
        let record = extract(Category::Cats, "Test FIV (ujemny) / FELV (dodatni)");
        assert_eq!(
            record.medical_test.as_deref(),
            Some("Test FIV (ujemny) / FELV (dodatni)")
        );
    }

    #[test]
    fn no_test_yields_placeholder() {
        let record = extract(Category::Cats, "Numer: 1/24 Wiek: młody");
        assert_eq!(record.medical_test.as_deref(), Some("Brak testu"));
    }

    #[test]
    fn quarantine_date_extracted_or_placeholder() {
        let record = extract(Category::NewArrivals, "Kwarantanna do: 12.05.2024");
        assert_eq!(record.quarantine_until.as_deref(), Some("12.05.2024"));

        let record = extract(Category::NewArrivals, "Płeć: samica");
        assert_eq!(record.quarantine_until.as_deref(), Some("Brak daty"));
    }

    #[test]
    fn found_location_takes_trailing_text() {
        let record = extract(
            Category::NewArrivals,
            "Płeć: samiec Znaleziony: Chorzów Batory, park",
        );
        assert_eq!(record.found_at.as_deref(), Some("Chorzów Batory, park"));
    }

    #[test]
    fn arrivals_defaults_cover_empty_blob() {
        let record = extract(Category::NewArrivals, "");
        assert_eq!(record.quarantine_until.as_deref(), Some("Brak daty"));
        assert_eq!(record.gender.as_deref(), Some("Brak płci"));
        assert_eq!(record.age.as_deref(), Some("Brak wieku"));
        assert_eq!(record.found_at.as_deref(), Some("Brak miejsca"));
    }

    #[test]
    fn normalization_collapses_newlines() {
        let record = extract(Category::Dogs, "Numer:\n 8/23\nPłeć:\tsamica");
        assert_eq!(record.number.as_deref(), Some("8/23"));
        assert_eq!(record.gender.as_deref(), Some("samica"));
    }

    #[test]
    fn mojibake_pattern_is_rejected() {
        // "Płeć:" after a UTF-8/Latin-1 round trip.
        let err = compile_rule(
            Field::Gender,
            "PÅ‚eÄ‡:\\s*(samiec|samica)",
            Capture::FirstGroup,
            None,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ScrapeError::CorruptedPattern("gender")));
    }

    #[test]
    fn all_shipped_rule_sets_compile() {
        for category in Category::ALL {
            assert!(RuleSet::for_category(category).is_ok());
        }
    }
}
