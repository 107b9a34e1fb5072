//! Lane occupancy bookkeeping.

/// Set of days 1..=31, one bit per day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DaySet(u32);

impl DaySet {
    /// Days `start..=end`. Empty if the range is inverted; days past 31 are dropped.
    pub fn span(start: u32, end: u32) -> Self {
        let end = end.min(31);
        if start > end {
            return DaySet(0);
        }
        let upto = (1u64 << (end + 1)) - 1;
        let below = (1u64 << start) - 1;
        DaySet((upto & !below) as u32)
    }

    pub fn intersects(self, other: DaySet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: DaySet) {
        self.0 |= other.0;
    }

    #[cfg(test)]
    pub fn contains(self, day: u32) -> bool {
        day <= 31 && self.0 & (1 << day) != 0
    }
}

/// First-fit lane allocator. Lanes are added on demand and never removed.
#[derive(Debug, Default)]
pub(crate) struct Lanes {
    occupied: Vec<DaySet>,
}

impl Lanes {
    /// Place `days` in the lowest lane with none of those days taken.
    pub fn assign(&mut self, days: DaySet) -> usize {
        let lane = match self.occupied.iter().position(|lane| !lane.intersects(days)) {
            Some(lane) => lane,
            None => {
                self.occupied.push(DaySet::default());
                self.occupied.len() - 1
            }
        };
        self.occupied[lane].insert(days);
        lane
    }

    pub fn len(&self) -> usize {
        self.occupied.len()
    }
}
