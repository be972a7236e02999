use crate::catalog::{CategoryFilter, ProjectRecord};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub search_term: String,
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

struct Needle(String);

impl Needle {
    fn new(term: &str) -> Self {
        Self(term.to_lowercase())
    }

    fn found_in(&self, haystack: &str) -> bool {
        self.0.is_empty() || haystack.to_lowercase().contains(&self.0)
    }

    fn matches(&self, record: &ProjectRecord) -> bool {
        self.found_in(record.title)
            || self.found_in(record.description)
            || record.technologies.iter().any(|tech| self.found_in(tech))
    }
}

/// Stable filter: keeps catalog order and returns borrowed records.
pub fn filter_projects<'a>(
    catalog: &'a [ProjectRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ProjectRecord> {
    let needle = Needle::new(&criteria.search_term);
    catalog
        .iter()
        .filter(|record| criteria.category.admits(record.category) && needle.matches(record))
        .collect()
}
