use super::{DHondtAllocator, DistrictAllocator, RoundBallots, SeatAllocator};

/// Mixed-member majoritarian: a districting track and a D'Hondt list
/// track run independently over the same round's ballots, summed per
/// party.
///
/// Parallel voting, not MMP — the list track does not compensate for
/// district results, so a party can profit twice from the same votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedAllocator {
    constituency: DistrictAllocator,
    list: DHondtAllocator,
}

impl MixedAllocator {
    pub fn new(constituency_seats: u32, list_seats: u32) -> Self {
        Self {
            constituency: DistrictAllocator {
                districts: constituency_seats,
            },
            list: DHondtAllocator { seats: list_seats },
        }
    }
}

impl SeatAllocator for MixedAllocator {
    fn name(&self) -> &'static str {
        "MMM"
    }

    fn total_seats(&self) -> u32 {
        self.constituency.total_seats() + self.list.total_seats()
    }

    fn allocate(&self, ballots: &RoundBallots<'_>) -> Vec<u32> {
        let district_seats = self.constituency.allocate(ballots);
        let list_seats = self.list.allocate(ballots);
        district_seats
            .iter()
            .zip(&list_seats)
            .map(|(&d, &l)| d + l)
            .collect()
    }
}
