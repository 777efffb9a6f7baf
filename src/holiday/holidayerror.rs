use thiserror::Error;

/// Errors surfaced while resolving holiday definitions against a year.
///
/// All of these are deterministic data-correctness failures. A catalog that
/// triggers one is broken; the caller gets the error for the whole query
/// rather than a silently thinned result.
#[derive(Debug, Clone, Error)]
pub enum HolidayError {
    /// The definition's nominal date cannot be constructed in the resolved
    /// year, e.g. February 29 outside a leap year.
    #[error("definition {id} ({name}) has no valid date in {year}")]
    InvalidDefinition { id: i32, name: String, year: i32 },

    /// The wire record carries a type code outside the closed 1..=4 set.
    #[error("definition {id} has unknown holiday type code {code}")]
    UnknownHolidayType { id: i32, code: u8 },

    /// The year lies outside the window the Gregorian computus covers.
    #[error("year {year} is outside the supported range 1583..=4099")]
    YearOutOfRange { year: i32 },

    /// A plain year/month/day tuple does not name a calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
