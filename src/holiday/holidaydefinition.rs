/// How a definition pins its nominal date within a year.
#[derive(PartialEq, Eq, Clone, Copy)]
pub enum Anchor {
    /// The same calendar day every year.
    CalendarDay { month: u32, day: u32 },
    /// A signed day offset from Easter Sunday. Offsets may cross month and
    /// year boundaries.
    EasterOffset { days: i32 },
}

/// Whether the nominal date is kept or moved to the following Monday.
#[derive(PartialEq, Eq, Clone, Copy)]
pub enum Observance {
    Actual,
    NextMonday,
}

impl Observance {
    pub fn shifts(&self) -> bool {
        *self == Observance::NextMonday
    }
}

/// One rule of the national holiday catalog.
///
/// Anchor and observance are independent axes; the four catalog kinds are
/// their compositions, built with the named constructors below.
#[derive(Clone)]
pub struct HolidayDefinition {
    id: i32,
    name: String,
    anchor: Anchor,
    observance: Observance,
}

impl HolidayDefinition {
    pub fn new(
        id: i32,
        name: String,
        anchor: Anchor,
        observance: Observance,
    ) -> HolidayDefinition {
        HolidayDefinition {
            id,
            name,
            anchor,
            observance,
        }
    }

    /// Calendar day, observed where it falls.
    pub fn fixed(id: i32, name: String, month: u32, day: u32) -> HolidayDefinition {
        HolidayDefinition::new(
            id,
            name,
            Anchor::CalendarDay { month, day },
            Observance::Actual,
        )
    }

    /// Calendar day, moved to the following Monday.
    pub fn movable(id: i32, name: String, month: u32, day: u32) -> HolidayDefinition {
        HolidayDefinition::new(
            id,
            name,
            Anchor::CalendarDay { month, day },
            Observance::NextMonday,
        )
    }

    /// Day offset from Easter Sunday, observed where it falls.
    pub fn easter_offset(id: i32, name: String, days: i32) -> HolidayDefinition {
        HolidayDefinition::new(id, name, Anchor::EasterOffset { days }, Observance::Actual)
    }

    /// Day offset from Easter Sunday, moved to the following Monday.
    pub fn movable_easter_offset(id: i32, name: String, days: i32) -> HolidayDefinition {
        HolidayDefinition::new(
            id,
            name,
            Anchor::EasterOffset { days },
            Observance::NextMonday,
        )
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn observance(&self) -> Observance {
        self.observance
    }
}
