use chrono::NaiveDate;

use crate::holiday::holidayerror::HolidayError;

/// First year covered by the Gregorian computus below.
pub const MIN_YEAR: i32 = 1583;
/// Last year covered by the Gregorian computus below.
pub const MAX_YEAR: i32 = 4099;

/// Computes the date of Easter Sunday for `year`.
///
/// Anonymous Gregorian computus: integer-only modular arithmetic over the
/// golden number, the century corrections of the Gregorian leap cycle, and
/// the epact. Years outside [`MIN_YEAR`]..=[`MAX_YEAR`] are rejected with
/// [`HolidayError::YearOutOfRange`].
pub fn easter_sunday(year: i32) -> Result<NaiveDate, HolidayError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(HolidayError::YearOutOfRange { year });
    }

    let g = year % 19;
    let c = year / 100;
    let c_div_4 = c / 4;
    let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let h_div_28 = h / 28;
    let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;

    // p must stay signed: i - j is negative for the late-March Easters.
    let p = i - j;
    let day = (1 + (p + 27 + (p + 6) / 40) % 31) as u32;
    let month = (3 + (p + 26) / 30) as u32;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(HolidayError::InvalidDate { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reference_years() {
        let expected = [
            (2015, 4, 5),
            (2016, 3, 27),
            (2017, 4, 16),
            (2018, 4, 1),
            (2019, 4, 21),
            (2020, 4, 12),
            (2021, 4, 4),
            (2022, 4, 17),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
        ];
        for (y, m, d) in expected {
            assert_eq!(easter_sunday(y).unwrap(), date(y, m, d), "easter of {y}");
        }
    }

    #[test]
    fn earliest_date_in_the_cycle() {
        // 1818 and 2285 both fall on March 22, the earliest the cycle allows
        assert_eq!(easter_sunday(1818).unwrap(), date(1818, 3, 22));
        assert_eq!(easter_sunday(2285).unwrap(), date(2285, 3, 22));
    }

    #[test]
    fn latest_date_in_the_cycle() {
        // 2038 falls on April 25, the latest the cycle allows
        assert_eq!(easter_sunday(2038).unwrap(), date(2038, 4, 25));
    }

    #[test]
    fn window_bounds_are_accepted() {
        assert_eq!(easter_sunday(MIN_YEAR).unwrap(), date(1583, 4, 10));
        assert!(easter_sunday(MAX_YEAR).is_ok());
    }

    #[test]
    fn years_outside_the_window_are_rejected() {
        assert!(matches!(
            easter_sunday(1582),
            Err(HolidayError::YearOutOfRange { year: 1582 })
        ));
        assert!(matches!(
            easter_sunday(4100),
            Err(HolidayError::YearOutOfRange { year: 4100 })
        ));
    }
}
