use std::collections::BTreeMap;

use crate::{grid::Grid, Position};

// Cells found but not expanded yet, grouped by their cost.
#[derive(Debug, Default)]
struct Frontier {
    buckets: BTreeMap<usize, Vec<usize>>,
}

impl Frontier {
    fn push(&mut self, cost: usize, ind: usize) {
        self.buckets.entry(cost).or_default().push(ind);
    }

    fn remove(&mut self, cost: usize, ind: usize) {
        if let Some(bucket) = self.buckets.get_mut(&cost) {
            if let Some(bucket_ind) = bucket.iter().position(|i| *i == ind) {
                bucket.swap_remove(bucket_ind);
            }

            if bucket.is_empty() {
                self.buckets.remove(&cost);
            }
        }
    }

    fn pop_cheapest(&mut self) -> Option<(usize, Vec<usize>)> {
        self.buckets.pop_first()
    }
}

/// The target is checked before its own corruption, so a corrupted (0, 0) still
/// counts as reached once a neighbor has given it a cost.
///
/// Costs and predecessors are left in `grid`, call [`Grid::reset`] before searching it again.
pub fn shortest_path(grid: &mut Grid, threshold: usize) -> Option<usize> {
    let source = grid.source();
    let target = grid.target();
    let mut frontier = Frontier::default();
    grid.cell_at_mut(source).cost = Some(0);
    frontier.push(0, source);

    let mut expanded_n = 0;
    let mut bucket_n = 0;
    while let Some((cost, bucket)) = frontier.pop_cheapest() {
        bucket_n += 1;
        for ind in bucket {
            if ind == target {
                log::trace!(
                    "Reached target at threshold {} after expanding {} cell(s) from {} bucket(s).",
                    threshold,
                    expanded_n,
                    bucket_n
                );
                return grid.cell_at(target).cost;
            }

            let cell = grid.cell_at(ind);
            if cell.is_corrupted(threshold) {
                continue;
            }

            expanded_n += 1;
            let next_cost = cost + 1;
            for next_ind in cell.neighbor_slots().into_iter().flatten() {
                let next_cell = grid.cell_at_mut(next_ind);
                if next_cell.cost.is_some_and(|old_cost| next_cost >= old_cost) {
                    continue;
                }

                if let Some(old_cost) = next_cell.cost {
                    frontier.remove(old_cost, next_ind);
                }

                next_cell.cost = Some(next_cost);
                next_cell.prev = Some(ind);
                frontier.push(next_cost, next_ind);
            }
        }
    }

    log::trace!(
        "No path at threshold {} after expanding {} cell(s) from {} bucket(s).",
        threshold,
        expanded_n,
        bucket_n
    );
    None
}

pub fn traced_path(grid: &Grid) -> Vec<Position> {
    let mut path = Vec::new();
    if grid.cell_at(grid.target()).cost().is_none() {
        return path;
    }

    let mut cur_ind = Some(grid.target());
    while let Some(ind) = cur_ind {
        let cell = grid.cell_at(ind);
        path.push(cell.pos().clone());
        cur_ind = cell.prev();
    }

    path
}
