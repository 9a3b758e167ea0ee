use std::collections::{BTreeSet, HashMap};

use crate::error::CatalogError;
use crate::models::InterviewRecord;

use super::taxonomy::Taxonomy;

/// Immutable, ordered record collection
///
/// Every record is validated on the way in and ids are unique, so the rest of the
/// crate can treat the store as trusted input.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<InterviewRecord>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(records: Vec<InterviewRecord>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            record.validate()?;
            if by_id.insert(record.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records, by_id })
    }

    /// Like [`Catalog::new`], additionally requiring every record to fit `taxonomy`
    pub fn with_taxonomy(
        records: Vec<InterviewRecord>,
        taxonomy: &Taxonomy,
    ) -> Result<Self, CatalogError> {
        for record in &records {
            taxonomy.check_record(record)?;
        }
        Self::new(records)
    }

    pub fn records(&self) -> &[InterviewRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&InterviewRecord> {
        self.by_id.get(id).map(|&pos| &self.records[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InterviewRecord> {
        self.records.iter()
    }

    /// Distinct company names, sorted, for the company picker
    pub fn companies(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.company.as_str()).collect();
        set.into_iter().collect()
    }

    pub fn into_records(self) -> Vec<InterviewRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a InterviewRecord;
    type IntoIter = std::slice::Iter<'a, InterviewRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
