use crate::{grid::Grid, search::shortest_path};

fn has_exit(grid: &mut Grid, threshold: usize) -> bool {
    grid.reset();
    shortest_path(grid, threshold).is_some_and(|steps_n| steps_n > 0)
}

fn is_cut_off(grid: &mut Grid, threshold: usize) -> bool {
    grid.reset();
    shortest_path(grid, threshold).is_none()
}

/// Returns an index into the falling order: the map still has a path when that many
/// positions are corrupted, and has none once the position at that index falls too.
pub fn find_critical_threshold(grid: &mut Grid, max_time: usize) -> usize {
    let mut time = max_time / 2;
    let mut step = time / 2;
    // Only a guess, the walks below decide.
    while step > 0 {
        if has_exit(grid, time) {
            log::debug!("Exit found at threshold {}, step forward {}.", time, step);
            time += step;
        } else {
            log::debug!("No exit at threshold {}, step back {}.", time, step);
            time -= step;
        }

        step /= 2;
    }

    log::debug!("Narrowed threshold to {}, walking forward.", time);
    time = walk_forward(grid, time, max_time);
    log::debug!("Walked forward to threshold {}, walking backward.", time);
    walk_backward(grid, time)
}

/// Same index as [`find_critical_threshold`], found without the halving steps.
pub fn find_critical_threshold_linear(grid: &mut Grid, max_time: usize) -> usize {
    let time = walk_forward(grid, 0, max_time);
    log::debug!("First threshold without exit is {}.", time);
    walk_backward(grid, time)
}

fn walk_forward(grid: &mut Grid, mut time: usize, max_time: usize) -> usize {
    while time < max_time {
        if is_cut_off(grid, time) {
            break;
        }

        time += 1;
    }

    time
}

fn walk_backward(grid: &mut Grid, mut time: usize) -> usize {
    while time > 0 {
        if has_exit(grid, time) {
            break;
        }

        time -= 1;
    }

    time
}

pub fn blocking_index(grid: &mut Grid, found: usize, max_time: usize) -> Option<usize> {
    if found >= max_time {
        return None;
    }

    grid.reset();
    let before = shortest_path(grid, found);
    grid.reset();
    let after = shortest_path(grid, found + 1);
    log::debug!(
        "Steps at threshold {}: {:?}, at threshold {}: {:?}.",
        found,
        before,
        found + 1,
        after
    );

    match (before, after) {
        (Some(_), None) => Some(found),
        _ => None,
    }
}
