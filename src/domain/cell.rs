/// State of one grid position. Fresh grids are all `Dead`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// State in the next generation given the live neighbor count (B3/S23).
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Index = neighbor count, value = next state
    const FROM_ALIVE: [Cell; 9] = [
        Cell::Dead, Cell::Dead, Cell::Alive, Cell::Alive, Cell::Dead,
        Cell::Dead, Cell::Dead, Cell::Dead, Cell::Dead,
    ];
    const FROM_DEAD: [Cell; 9] = [
        Cell::Dead, Cell::Dead, Cell::Dead, Cell::Alive, Cell::Dead,
        Cell::Dead, Cell::Dead, Cell::Dead, Cell::Dead,
    ];

    #[test]
    fn test_every_neighbor_count() {
        for n in 0..=8u8 {
            assert_eq!(Cell::Alive.evolve(n), FROM_ALIVE[n as usize], "alive with {n}");
            assert_eq!(Cell::Dead.evolve(n), FROM_DEAD[n as usize], "dead with {n}");
        }
    }

    #[test]
    fn test_three_neighbors_alive_from_either_state() {
        assert!(Cell::Alive.evolve(3).is_alive());
        assert!(Cell::Dead.evolve(3).is_alive());
    }

    #[test]
    fn test_fresh_cell_is_dead() {
        assert!(!Cell::default().is_alive());
    }
}
