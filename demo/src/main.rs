//! Sample program exercising sparse matrices.

#![warn(missing_docs)]

use anyhow::Context;
use log::{debug, info};
use std::ops::RangeInclusive;

use ndsparse_core::prelude::*;

mod config;

use config::Config;

fn main() -> anyhow::Result<()> {
    simple_logger::init().context("initializing logger")?;
    info!("Starting ndsparse demo v{} ...", env!("CARGO_PKG_VERSION"));
    let config = Config::default();

    debug!("Filling diagonals");
    let mut matrix = fill_diagonals(config.diagonals.size);
    let range = config.diagonals.print_range.clone();
    print_region(&matrix, range.clone(), range, config.cell_width);
    println!();

    println!("{}", matrix.len());
    println!();

    print_cells(&matrix);
    println!();

    debug!("Printing copy");
    let copy = matrix.clone();
    print_cells(&copy);
    println!();

    matrix.clear();
    debug!("Cleared matrix; {} cells remain in copy", copy.len());

    debug!("Filling checkerboard");
    let (checkerboard, steps) =
        fill_checkerboard(config.checkerboard.size, config.checkerboard.value);
    let full = 0..=config.checkerboard.size.saturating_sub(1);
    print_region(&checkerboard, full.clone(), full, config.cell_width);
    println!();
    println!("Count step: {}", steps);

    // Runtime-sized coordinates are the only fallible access.
    let corner = checkerboard
        .try_get(&[0, 1])
        .context("reading checkerboard corner")?;
    debug!("Checkerboard [0, 1] = {}", corner);

    Ok(())
}

/// Fills the main diagonal with its row number and the anti-diagonal with its
/// column number.
fn fill_diagonals(size: usize) -> Matrix2D<i32> {
    let mut m = Matrix2D::default();
    for i in 0..size {
        m.at(i).at(i).write(i as i32);
    }
    for i in 0..size {
        let j = size - 1 - i;
        m.at(i).at(j).write(j as i32);
    }
    m
}

/// Fills every other cell of a `size`-by-`size` square, returning the matrix
/// and the number of loop iterations that ran.
fn fill_checkerboard(size: usize, value: i32) -> (Matrix2D<i32>, usize) {
    let mut m = Matrix2D::default();
    let mut steps = 0;
    for i in (0..size).step_by(2) {
        for j in (0..size).step_by(2) {
            m.at(i + 1).at(j).write(value);
            m.at(i).at(j + 1).write(value);
            steps += 1;
        }
    }
    (m, steps)
}

fn print_region(
    m: &Matrix2D<i32>,
    rows: RangeInclusive<usize>,
    cols: RangeInclusive<usize>,
    width: usize,
) {
    for i in rows {
        println!("{}", format_row(m.view(i), cols.clone(), width));
    }
}

/// Formats one row of cells, each right-aligned to `width` and followed by a
/// space.
fn format_row(
    row: IndexView<'_, i32, Dim2D, <Dim2D as Dim>::Tail>,
    cols: RangeInclusive<usize>,
    width: usize,
) -> String {
    cols.map(|j| format!("{:>width$} ", row.at(j).read(), width = width))
        .collect()
}

fn print_cells(m: &Matrix2D<i32>) {
    for (i, j, value) in m {
        println!("[{}, {}] = {}", i, j, value);
    }
}
