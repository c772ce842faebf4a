use std::collections::HashSet;

use crate::{grid::Grid, search::traced_path, Position};

pub fn render(grid: &Grid, threshold: usize) -> String {
    let path = traced_path(grid).into_iter().collect::<HashSet<_>>();
    let mut text = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Position::new(x, y);
            let c = match grid.cell(&pos) {
                Some(cell) if cell.is_corrupted(threshold) => '#',
                Some(_) if path.contains(&pos) => 'O',
                _ => '.',
            };
            text.push(c);
        }
        text.push('\n');
    }

    text
}
