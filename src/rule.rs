//! Conway's B3/S23 rule.

/// Decides the next state of a cell from its current state and its count of
/// live neighbours.
pub fn next_state(is_alive: bool, live_neighbors: u8) -> bool {
    match (is_alive, live_neighbors) {
        (true, 2 | 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cells_survive_only_with_two_or_three_neighbors() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
        }
    }

    #[test]
    fn dead_cells_are_born_only_with_three_neighbors() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }
}
