use super::*;
use super::source::{CATEGORY_KEYS, load_table};

impl CoverageValidator {
    pub fn count_records(&self, path: &Path) -> RecordCounts {
        let mut counts = RecordCounts::default();
        if !self.check_source_exists(path) {
            return counts;
        }

        let table = match load_table(path) {
            Ok(table) => table,
            Err(err) => {
                warn!(path = %path.display(), error = %format!("{err:#}"), "failed to count records");
                return counts;
            }
        };

        for record in &table.records {
            counts.total += 1;
            if let Some(category) = record.first_non_empty(&CATEGORY_KEYS) {
                *counts.by_category.entry(category.to_string()).or_insert(0) += 1;
            }
        }

        counts
    }
}
