use chrono::{Datelike, Duration, NaiveDate};

use crate::time::easter::easter_sunday;

use super::holidaydefinition::{Anchor, HolidayDefinition};
use super::holidayerror::HolidayError;

/// Resolves the calendar date on which `definition` is observed in `year`.
///
/// The anchor yields the nominal date; the observance then either keeps it
/// or moves it to the following Monday. A definition whose nominal date is
/// not constructible in `year` is an error, never a substituted date.
pub fn observed_date(
    definition: &HolidayDefinition,
    year: i32,
) -> Result<NaiveDate, HolidayError> {
    let nominal = nominal_date(definition, year)?;
    if definition.observance().shifts() {
        Ok(following_monday(nominal))
    } else {
        Ok(nominal)
    }
}

fn nominal_date(definition: &HolidayDefinition, year: i32) -> Result<NaiveDate, HolidayError> {
    let invalid = || HolidayError::InvalidDefinition {
        id: definition.id(),
        name: definition.name().to_owned(),
        year,
    };

    match definition.anchor() {
        Anchor::CalendarDay { month, day } => {
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
        }
        Anchor::EasterOffset { days } => {
            let easter = easter_sunday(year)?;
            easter
                .checked_add_signed(Duration::days(days as i64))
                .ok_or_else(invalid)
        }
    }
}

/// Returns `d` when it already is a Monday, otherwise the next Monday
/// strictly after it (1 to 6 days forward).
pub fn following_monday(d: NaiveDate) -> NaiveDate {
    let ahead = (7 - d.weekday().num_days_from_monday()) % 7;
    d + Duration::days(ahead as i64)
}
