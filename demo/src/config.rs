use std::ops::RangeInclusive;

#[derive(Debug, Clone)]
pub struct Config {
    pub diagonals: DiagonalConfig,
    pub checkerboard: CheckerboardConfig,
    /// Minimum width of each printed cell.
    pub cell_width: usize,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            diagonals: DiagonalConfig::default(),
            checkerboard: CheckerboardConfig::default(),
            cell_width: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiagonalConfig {
    /// Side length of the square filled along both diagonals.
    pub size: usize,
    /// Rows and columns to print after filling.
    pub print_range: RangeInclusive<usize>,
}
impl Default for DiagonalConfig {
    fn default() -> Self {
        Self {
            size: 10,
            print_range: 1..=8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckerboardConfig {
    /// Side length of the checkerboard.
    pub size: usize,
    /// Value written to each filled cell.
    pub value: i32,
}
impl Default for CheckerboardConfig {
    fn default() -> Self {
        Self { size: 10, value: 8 }
    }
}
