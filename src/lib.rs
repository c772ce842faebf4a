use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod grid;
pub mod logger;
pub mod render;
pub mod search;
pub mod threshold;

pub use grid::{Cell, Grid};
pub use search::shortest_path;
pub use threshold::{blocking_index, find_critical_threshold, find_critical_threshold_linear};

#[derive(Debug)]
pub enum Error {
    NoCommaInPositionText,
    InvalidCoordinateText(String),
    PositionOutOfMap(Position, usize, usize), // (position, width, height)
    EmptyMap,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoCommaInPositionText => write!(
                f,
                "Expect a comma to separate coordinates of position in text."
            ),
            Error::InvalidCoordinateText(s) => {
                write!(f, "Invalid text({}) for coordinate of position.", s)
            }
            Error::PositionOutOfMap(pos, width, height) => write!(
                f,
                "Position({}) is outside of map({}x{}).",
                pos, width, height
            ),
            Error::EmptyMap => write!(f, "Map must have at least one row and one column."),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    pub map_size: usize,
    pub corrupt_size: Option<usize>,
    /// Height of map, same as map size if not given.
    #[arg(long)]
    pub height: Option<usize>,
    /// Print the map with the last found path.
    #[arg(long)]
    pub render: bool,
    /// Scan thresholds one by one instead of narrowing first.
    #[arg(long)]
    pub linear: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CLIArgs {
    pub fn map_width(&self) -> usize {
        self.map_size
    }

    pub fn map_height(&self) -> usize {
        self.height.unwrap_or(self.map_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];

        &ALL_DIRECTIONS
    }

    pub fn ind(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    x: usize,
    y: usize,
}

impl TryFrom<&str> for Position {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let comma_pos = value.find(',').ok_or(Error::NoCommaInPositionText)?;
        let x_text = value[..comma_pos].trim();
        let x = x_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidCoordinateText(x_text.to_string()))?;
        let y_text = value[(comma_pos + 1)..].trim();
        let y = y_text
            .parse::<usize>()
            .map_err(|_| Error::InvalidCoordinateText(y_text.to_string()))?;

        Ok(Position::new(x, y))
    }
}

// Same format as the input text, so the answer of part 2 can be pasted back.
impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.y > 0 => Some(Self::new(self.x, self.y - 1)),
            Direction::Right => Some(Self::new(self.x + 1, self.y)),
            Direction::Down => Some(Self::new(self.x, self.y + 1)),
            Direction::Left if self.x > 0 => Some(Self::new(self.x - 1, self.y)),
            _ => None,
        }
    }

    pub fn is_inside(&self, width: usize, height: usize) -> bool {
        self.x < width && self.y < height
    }
}

pub fn read_positions<P: AsRef<Path>>(path: P) -> Result<Vec<Position>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut positions = Vec::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let pos = Position::try_from(line.as_str())
            .with_context(|| format!("Failed to parse position at line {}.", ind + 1))?;
        positions.push(pos);
    }

    Ok(positions)
}

pub fn check_positions(
    positions: &[Position],
    width: usize,
    height: usize,
) -> std::result::Result<(), Error> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyMap);
    }

    match positions.iter().find(|pos| !pos.is_inside(width, height)) {
        Some(pos) => Err(Error::PositionOutOfMap(pos.clone(), width, height)),
        None => Ok(()),
    }
}
