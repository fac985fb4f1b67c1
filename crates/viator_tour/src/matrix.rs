use crate::{location::Location, meters::Meters};

/// Pairwise great-circle distances in a flat layout. To find the entry for
/// a pair of locations, use the formula `index = from * num_locations + to`.
/// Haversine distance is symmetric, so the matrix always is.
pub struct DistanceMatrix {
    distances: Vec<Meters>,
    num_locations: usize,
}

impl DistanceMatrix {
    pub fn from_haversine(locations: &[Location]) -> Self {
        let num_locations = locations.len();
        let mut distances = vec![Meters::ZERO; num_locations * num_locations];

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                distances[i * num_locations + j] = from.haversine_distance(to);
            }
        }

        DistanceMatrix {
            distances,
            num_locations,
        }
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.num_locations + to
    }

    pub fn distance(&self, from: usize, to: usize) -> Meters {
        self.distances[self.index(from, to)]
    }

    pub fn len(&self) -> usize {
        self.num_locations
    }

    pub fn is_empty(&self) -> bool {
        self.num_locations == 0
    }
}
