//! Reading the two endpoints from the console. The user counts rows and columns from 1, the
//! grid from 0; the conversion happens here and nowhere else.

use crate::error::{GridError, Result};
use grid_util::Point;
use log::debug;
use std::io::{BufRead, Write};

/// Parses a 1-indexed axis value in `[1, max]`.
pub fn parse_axis(text: &str, max: usize) -> Result<i32> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| GridError::InvalidInput(format!("'{}' is not a whole number", trimmed)))?;
    if value < 1 || value > max as i64 {
        return Err(GridError::InvalidInput(format!(
            "{} is outside 1-{}",
            value, max
        )));
    }
    Ok(value as i32)
}

/// Converts a 1-indexed row and column into the 0-indexed grid point (x is the column).
pub fn to_cell(row: i32, col: i32, rows: usize, cols: usize) -> Result<Point> {
    if row < 1 || col < 1 || row as usize > rows || col as usize > cols {
        return Err(GridError::InvalidInput(format!(
            "({}, {}) is outside the {}x{} grid",
            row, col, rows, cols
        )));
    }
    Ok(Point::new(col - 1, row - 1))
}

/// Asks for points on `output` and reads the answers from `input`, re-prompting on bad input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    rows: usize,
    cols: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, rows: usize, cols: usize) -> Self {
        Self {
            input,
            output,
            rows,
            cols,
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GridError::InvalidInput("unexpected end of input".to_owned()));
        }
        Ok(line)
    }

    fn ask_axis(&mut self, prompt: &str, max: usize) -> Result<i32> {
        loop {
            write!(self.output, "{} (1-{}): ", prompt, max)?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_axis(&line, max) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Prompts for the row and column of the named point.
    pub fn ask_point(&mut self, name: &str) -> Result<Point> {
        let row = self.ask_axis(&format!("Enter row for point {}", name), self.rows)?;
        let col = self.ask_axis(&format!("Enter column for point {}", name), self.cols)?;
        let point = to_cell(row, col, self.rows, self.cols)?;
        debug!("Point {} is {}", name, point);
        Ok(point)
    }

    /// Prompts for point A and then point B, asking again for B while it equals A.
    pub fn ask_endpoints(&mut self) -> Result<(Point, Point)> {
        let a = self.ask_point("A")?;
        loop {
            let b = self.ask_point("B")?;
            if b != a {
                return Ok((a, b));
            }
            writeln!(self.output, "Point B must differ from point A")?;
        }
    }
}
