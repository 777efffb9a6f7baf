use crate::holiday::holidaydefinition::HolidayDefinition;

use super::catalogerror::CatalogError;

/// Supplies the complete set of holiday rules currently in force.
///
/// Each call must return an internally consistent snapshot. The consumer
/// does not deduplicate or validate completeness; catalog quality is the
/// provider's concern.
pub trait CatalogProvider {
    fn fetch_all(&self) -> Result<Vec<HolidayDefinition>, CatalogError>;
}

/// Catalog held directly in memory.
pub struct InMemoryCatalog {
    definitions: Vec<HolidayDefinition>,
}

impl InMemoryCatalog {
    pub fn new(definitions: Vec<HolidayDefinition>) -> InMemoryCatalog {
        InMemoryCatalog { definitions }
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn fetch_all(&self) -> Result<Vec<HolidayDefinition>, CatalogError> {
        Ok(self.definitions.clone())
    }
}
