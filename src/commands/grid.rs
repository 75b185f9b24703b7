//! Puzzle grid fixture
//!
//! A rectangular grid of cells with unit-cost moves between orthogonal
//! neighbours. Blocked cells are not part of the graph at all.

use std::collections::BTreeSet;

use pathfind_core::error::{PathfindError, Result};
use pathfind_core::Graph;

use crate::cli::parse::{Cell, GridSize};
use crate::cli::GridArgs;

pub struct Grid {
    rows: usize,
    cols: usize,
    blocked: BTreeSet<Cell>,
}

impl Grid {
    pub fn new(size: GridSize, blocked: &[Cell]) -> Result<Self> {
        let (rows, cols) = size;
        if let Some(cell) = blocked.iter().find(|(r, c)| *r >= rows || *c >= cols) {
            return Err(PathfindError::invalid_value(
                "blocked cell",
                format!("{} (outside {}x{} grid)", format_cell(cell), rows, cols),
            ));
        }
        Ok(Self {
            rows,
            cols,
            blocked: blocked.iter().copied().collect(),
        })
    }

    pub fn from_args(args: &GridArgs) -> Result<Self> {
        Self::new(args.grid, &args.blocked)
    }

    fn is_open(&self, cell: &Cell) -> bool {
        cell.0 < self.rows && cell.1 < self.cols && !self.blocked.contains(cell)
    }

    /// Graph of the open cells
    pub fn graph(&self) -> Result<Graph<Cell>> {
        let mut builder = Graph::builder();
        let open: Vec<Cell> = (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| (r, c)))
            .filter(|cell| self.is_open(cell))
            .collect();
        builder.add_nodes(open.iter().copied());

        for &(r, c) in &open {
            for neighbor in [(r + 1, c), (r, c + 1)] {
                if self.is_open(&neighbor) {
                    builder.add_undirected_edge(&(r, c), &neighbor, 1)?;
                }
            }
        }
        Ok(builder.build())
    }

    /// Render the grid with `#` for blocked cells and path marks.
    /// Path `i` is drawn with the digit `i + 1`; endpoints as `S` and `T`.
    pub fn render(&self, paths: &[&[Cell]]) -> String {
        let mut marks = vec![vec!['.'; self.cols]; self.rows];
        for cell in &self.blocked {
            marks[cell.0][cell.1] = '#';
        }
        for (index, path) in paths.iter().enumerate() {
            let mark = char::from_digit(((index + 1) % 10) as u32, 10).unwrap_or('*');
            for cell in path.iter() {
                marks[cell.0][cell.1] = mark;
            }
            if let (Some(first), Some(last)) = (path.first(), path.last()) {
                marks[first.0][first.1] = 'S';
                marks[last.0][last.1] = 'T';
            }
        }
        marks
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Manhattan distance to `target`, admissible for unit-cost grids
pub fn manhattan(target: Cell) -> impl Fn(&Cell) -> f64 {
    move |cell: &Cell| (cell.0.abs_diff(target.0) + cell.1.abs_diff(target.1)) as f64
}

pub fn format_cell(cell: &Cell) -> String {
    format!("{},{}", cell.0, cell.1)
}

pub fn format_cells(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(format_cell)
        .collect::<Vec<_>>()
        .join(" -> ")
}
