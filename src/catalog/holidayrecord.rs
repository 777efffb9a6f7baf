use serde::{Deserialize, Serialize};

use crate::holiday::holidaydefinition::HolidayDefinition;
use crate::holiday::holidayerror::HolidayError;

/// Flat catalog row as served by the external system.
///
/// `day`/`month` are meaningful for codes 1 and 2, `days_from_easter` for
/// codes 3 and 4; the fields of the inactive axis are zero placeholders and
/// are discarded on conversion.
#[derive(Clone, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub day: u32,
    #[serde(default)]
    pub month: u32,
    #[serde(rename = "type")]
    pub type_code: u8,
    #[serde(default)]
    pub days_from_easter: i32,
}

impl TryFrom<HolidayRecord> for HolidayDefinition {
    type Error = HolidayError;

    fn try_from(record: HolidayRecord) -> Result<HolidayDefinition, HolidayError> {
        match record.type_code {
            1 => Ok(HolidayDefinition::fixed(
                record.id,
                record.name,
                record.month,
                record.day,
            )),
            2 => Ok(HolidayDefinition::movable(
                record.id,
                record.name,
                record.month,
                record.day,
            )),
            3 => Ok(HolidayDefinition::easter_offset(
                record.id,
                record.name,
                record.days_from_easter,
            )),
            4 => Ok(HolidayDefinition::movable_easter_offset(
                record.id,
                record.name,
                record.days_from_easter,
            )),
            code => Err(HolidayError::UnknownHolidayType {
                id: record.id,
                code,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::holidaydefinition::Anchor;

    fn record(type_code: u8) -> HolidayRecord {
        HolidayRecord {
            id: 10,
            name: "Prueba".to_owned(),
            day: 25,
            month: 12,
            type_code,
            days_from_easter: -2,
        }
    }

    #[test]
    fn the_four_codes_map_to_their_compositions() {
        let fixed = HolidayDefinition::try_from(record(1)).unwrap();
        assert!(matches!(
            fixed.anchor(),
            Anchor::CalendarDay { month: 12, day: 25 }
        ));
        assert!(!fixed.observance().shifts());

        let movable = HolidayDefinition::try_from(record(2)).unwrap();
        assert!(matches!(movable.anchor(), Anchor::CalendarDay { .. }));
        assert!(movable.observance().shifts());

        let easter = HolidayDefinition::try_from(record(3)).unwrap();
        assert!(matches!(easter.anchor(), Anchor::EasterOffset { days: -2 }));
        assert!(!easter.observance().shifts());

        let movable_easter = HolidayDefinition::try_from(record(4)).unwrap();
        assert!(matches!(
            movable_easter.anchor(),
            Anchor::EasterOffset { days: -2 }
        ));
        assert!(movable_easter.observance().shifts());
    }

    #[test]
    fn calendar_codes_ignore_the_easter_placeholder() {
        // day/month win for code 2 even though days_from_easter is set
        let movable = HolidayDefinition::try_from(record(2)).unwrap();
        assert!(matches!(
            movable.anchor(),
            Anchor::CalendarDay { month: 12, day: 25 }
        ));
    }

    #[test]
    fn codes_outside_the_closed_set_are_rejected() {
        assert!(matches!(
            HolidayDefinition::try_from(record(0)),
            Err(HolidayError::UnknownHolidayType { id: 10, code: 0 })
        ));
        assert!(matches!(
            HolidayDefinition::try_from(record(5)),
            Err(HolidayError::UnknownHolidayType { id: 10, code: 5 })
        ));
    }
}
