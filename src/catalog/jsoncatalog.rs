use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::holiday::holidaydefinition::HolidayDefinition;

use super::catalogerror::CatalogError;
use super::catalogprovider::CatalogProvider;
use super::holidayrecord::HolidayRecord;

/// Catalog backed by a JSON file holding an array of flat records.
///
/// Records are decoded eagerly when the catalog is opened; conversion into
/// domain definitions happens per fetch, so a record with a bad type code
/// surfaces on the query that touches it, not silently at load time.
pub struct JsonCatalog {
    records: Vec<HolidayRecord>,
}

impl JsonCatalog {
    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<JsonCatalog, CatalogError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let records: Vec<HolidayRecord> = serde_json::from_reader(reader)?;
        Ok(JsonCatalog { records })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<JsonCatalog, CatalogError> {
        let records: Vec<HolidayRecord> = serde_json::from_slice(bytes)?;
        Ok(JsonCatalog { records })
    }

    pub fn records(&self) -> &[HolidayRecord] {
        &self.records
    }
}

impl CatalogProvider for JsonCatalog {
    fn fetch_all(&self) -> Result<Vec<HolidayDefinition>, CatalogError> {
        self.records
            .iter()
            .cloned()
            .map(|record| HolidayDefinition::try_from(record).map_err(CatalogError::from))
            .collect()
    }
}
