use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::catalog::catalogerror::CatalogError;
use crate::catalog::catalogprovider::CatalogProvider;

use super::holidaydefinition::HolidayDefinition;
use super::holidayerror::HolidayError;
use super::observeddate::observed_date;

/// A holiday resolved for a concrete year.
#[derive(Clone, Serialize)]
pub struct ObservedHoliday {
    name: String,
    date: NaiveDate,
}

impl ObservedHoliday {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Returns whether `date` is an observed holiday under `definitions`.
///
/// Each definition is resolved for the year of `date`; the scan stops at
/// the first match. A definition that fails to resolve fails the whole
/// call; a malformed rule is never skipped.
pub fn is_holiday(
    definitions: &[HolidayDefinition],
    date: NaiveDate,
) -> Result<bool, HolidayError> {
    let year = date.year();
    for definition in definitions {
        if observed_date(definition, year)? == date {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Resolves every definition for `year`, sorted by observed date.
pub fn holidays_in_year(
    definitions: &[HolidayDefinition],
    year: i32,
) -> Result<Vec<ObservedHoliday>, HolidayError> {
    let mut resolved = Vec::with_capacity(definitions.len());
    for definition in definitions {
        resolved.push(ObservedHoliday {
            name: definition.name().to_owned(),
            date: observed_date(definition, year)?,
        });
    }
    resolved.sort_by_key(|holiday| holiday.date);
    Ok(resolved)
}

/// Validated date construction for callers holding a plain tuple.
pub fn query_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, HolidayError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(HolidayError::InvalidDate { year, month, day })
}

/// Answers holiday queries against the catalog of a [`CatalogProvider`].
///
/// The provider is fetched per call so every query sees one consistent
/// catalog snapshot; the service itself holds no other state.
pub struct HolidayService<P> {
    provider: P,
}

impl<P: CatalogProvider> HolidayService<P> {
    pub fn new(provider: P) -> HolidayService<P> {
        HolidayService { provider }
    }

    pub fn is_holiday(&self, date: NaiveDate) -> Result<bool, CatalogError> {
        let definitions = self.provider.fetch_all()?;
        Ok(is_holiday(&definitions, date)?)
    }

    pub fn holidays_in_year(&self, year: i32) -> Result<Vec<ObservedHoliday>, CatalogError> {
        let definitions = self.provider.fetch_all()?;
        Ok(holidays_in_year(&definitions, year)?)
    }
}
