use crate::{Direction, Position};

#[derive(Debug, Clone)]
pub struct Cell {
    pos: Position,
    corrupt_time: Option<usize>,    // None, never corrupted.
    pub(crate) cost: Option<usize>, // None, not reached by current search yet.
    pub(crate) prev: Option<usize>,
    neighbors: [Option<usize>; 4], // Indexed by Direction::ind().
}

impl Cell {
    fn new(pos: Position) -> Self {
        Self {
            pos,
            corrupt_time: None,
            cost: None,
            prev: None,
            neighbors: [None; 4],
        }
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn corrupt_time(&self) -> Option<usize> {
        self.corrupt_time
    }

    pub fn cost(&self) -> Option<usize> {
        self.cost
    }

    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn is_corrupted(&self, threshold: usize) -> bool {
        self.corrupt_time.is_some_and(|time| time < threshold)
    }

    pub fn neighbors(&self) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.iter().flatten().copied()
    }

    pub(crate) fn neighbor_slots(&self) -> [Option<usize>; 4] {
        self.neighbors
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// # Panics
    ///
    /// Panics if any position is outside of the grid, use [`crate::check_positions`] first.
    pub fn new(positions: &[Position], width: usize, height: usize) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(Position::new(x, y)));
            }
        }

        let mut grid = Self {
            cells,
            width,
            height,
        };

        for (time, pos) in positions.iter().enumerate() {
            let ind = grid
                .index_of(pos)
                .unwrap_or_else(|| panic!("position({}) is outside of grid", pos));
            // Repeated position keeps the later time.
            grid.cells[ind].corrupt_time = Some(time);
        }

        for ind in 0..grid.cells.len() {
            let pos = grid.cells[ind].pos.clone();
            for dir in Direction::all_dirs() {
                let next_ind = pos.neighbor(*dir).and_then(|next_pos| grid.index_of(&next_pos));
                grid.cells[ind].neighbors[dir.ind()] = next_ind;
            }
        }

        grid
    }

    pub fn new_square(positions: &[Position], side_len: usize) -> Self {
        Self::new(positions, side_len, side_len)
    }

    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.cost = None;
            cell.prev = None;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn index_of(&self, pos: &Position) -> Option<usize> {
        if pos.is_inside(self.width, self.height) {
            Some(pos.y() * self.width + pos.x())
        } else {
            None
        }
    }

    pub fn cell(&self, pos: &Position) -> Option<&Cell> {
        self.index_of(pos).map(|ind| &self.cells[ind])
    }

    pub fn cell_at(&self, ind: usize) -> &Cell {
        &self.cells[ind]
    }

    pub(crate) fn cell_at_mut(&mut self, ind: usize) -> &mut Cell {
        &mut self.cells[ind]
    }

    pub fn neighbor(&self, ind: usize, dir: Direction) -> Option<usize> {
        self.cells.get(ind).and_then(|cell| cell.neighbors[dir.ind()])
    }

    pub fn source(&self) -> usize {
        (self.height - 1) * self.width + (self.width - 1)
    }

    pub fn target(&self) -> usize {
        0
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}
