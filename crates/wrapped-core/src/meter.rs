//! Love meter widget state, owned by the mounted interactive slide.

pub const METER_MAX: u8 = 100;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MeterChange {
    Unchanged,
    Moved,
    /// This update brought the value to the maximum for the first time.
    Unlocked,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LoveMeter {
    value: u8,
    unlocked: bool,
}

impl LoveMeter {
    pub const fn new() -> Self {
        Self {
            value: 0,
            unlocked: false,
        }
    }

    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Sticky: once set it survives later slider moves.
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    pub fn set_value(&mut self, value: u8) -> MeterChange {
        let value = value.min(METER_MAX);
        if value == self.value {
            return MeterChange::Unchanged;
        }

        self.value = value;
        if value == METER_MAX && !self.unlocked {
            self.unlocked = true;
            return MeterChange::Unlocked;
        }
        MeterChange::Moved
    }
}
