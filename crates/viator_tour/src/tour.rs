use crate::{matrix::DistanceMatrix, meters::Meters};

/// Orders the matrix's locations into an open tour with a greedy
/// nearest-neighbor pass. The returned vector is a permutation of
/// `0..matrix.len()`.
///
/// Index 0 is the fixed anchor: the first location in input order is always
/// visited first. Ties between equally distant candidates resolve to the
/// lowest original index, so the output is deterministic for a fixed input.
pub fn nearest_neighbor_tour(matrix: &DistanceMatrix) -> Vec<usize> {
    let num_locations = matrix.len();
    if num_locations == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; num_locations];
    let mut tour = Vec::with_capacity(num_locations);

    let mut current = 0;
    visited[current] = true;
    tour.push(current);

    for _ in 1..num_locations {
        let mut nearest: Option<(usize, Meters)> = None;

        for candidate in 0..num_locations {
            if visited[candidate] {
                continue;
            }

            let distance = matrix.distance(current, candidate);
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((candidate, distance)),
            }
        }

        if let Some((next, _)) = nearest {
            visited[next] = true;
            tour.push(next);
            current = next;
        }
    }

    tour
}

/// Total length of an open tour (no return leg to the start).
pub fn tour_length(matrix: &DistanceMatrix, tour: &[usize]) -> Meters {
    let mut length = Meters::ZERO;
    for leg in tour.windows(2) {
        length += matrix.distance(leg[0], leg[1]);
    }

    length
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::location::Location;

    #[test]
    fn test_empty_input() {
        let matrix = DistanceMatrix::from_haversine(&[]);

        assert!(nearest_neighbor_tour(&matrix).is_empty());
    }

    #[test]
    fn test_single_location() {
        let matrix = DistanceMatrix::from_haversine(&[Location::from_lat_lon(12.90, 77.60)]);

        assert_eq!(nearest_neighbor_tour(&matrix), vec![0]);
    }

    #[test]
    fn test_greedy_pick_from_anchor() {
        // B is closer to the anchor A than C is, and C is closer to B than
        // to A, so the greedy pass visits them in input order.
        let matrix = DistanceMatrix::from_haversine(&[
            Location::from_lat_lon(12.90, 77.60),
            Location::from_lat_lon(12.95, 77.55),
            Location::from_lat_lon(13.00, 77.50),
        ]);

        assert_eq!(nearest_neighbor_tour(&matrix), vec![0, 1, 2]);
    }

    #[test]
    fn test_anchor_is_first_in_input_order() {
        // The middle stop comes first in input order and stays the anchor
        // even though starting elsewhere would shorten the tour.
        let matrix = DistanceMatrix::from_haversine(&[
            Location::from_lat_lon(12.95, 77.55),
            Location::from_lat_lon(12.90, 77.60),
            Location::from_lat_lon(13.00, 77.50),
        ]);

        let tour = nearest_neighbor_tour(&matrix);

        assert_eq!(tour[0], 0);
    }

    #[test]
    fn test_duplicate_locations_resolve_by_index() {
        let stop = Location::from_lat_lon(12.95, 77.55);
        let matrix = DistanceMatrix::from_haversine(&[
            Location::from_lat_lon(12.90, 77.60),
            stop,
            stop,
            stop,
        ]);

        assert_eq!(nearest_neighbor_tour(&matrix), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_tour_length_sums_legs() {
        let locations = vec![
            Location::from_lat_lon(12.90, 77.60),
            Location::from_lat_lon(12.95, 77.55),
            Location::from_lat_lon(13.00, 77.50),
        ];
        let matrix = DistanceMatrix::from_haversine(&locations);

        let length = tour_length(&matrix, &[0, 1, 2]);
        let legs = matrix.distance(0, 1) + matrix.distance(1, 2);

        assert_eq!(length, legs);
    }

    #[test]
    fn test_tour_length_of_single_stop() {
        let matrix = DistanceMatrix::from_haversine(&[Location::from_lat_lon(12.90, 77.60)]);

        assert_eq!(tour_length(&matrix, &[0]), Meters::ZERO);
    }
}
