//! Console playback of a path: one frame per step, the walker drawn as `A` and the trail
//! behind it as `*`.

use crate::grid::{CellKind, Grid};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use grid_util::Point;
use log::debug;
use std::io::Write;
use std::thread;
use std::time::Duration;

const TRAIL: char = '*';

pub struct Renderer<'a> {
    grid: &'a Grid,
    path: &'a [Point],
}

impl<'a> Renderer<'a> {
    /// Steps of `path` that fall outside `grid` are not drawn.
    pub fn new(grid: &'a Grid, path: &'a [Point]) -> Self {
        Self { grid, path }
    }

    fn base(&self) -> Vec<Vec<char>> {
        let mut rows = vec![Vec::with_capacity(self.grid.cols()); self.grid.rows()];
        for (p, kind) in self.grid.cells() {
            rows[p.y as usize].push(kind.glyph());
        }
        rows
    }

    fn join(rows: &[Vec<char>]) -> String {
        let mut s = String::with_capacity(rows.len() * (rows.first().map_or(0, Vec::len) + 1));
        for row in rows {
            s.extend(row.iter());
            s.push('\n');
        }
        s
    }

    /// One frame per step of the path followed by a final frame with the walker on the end
    /// cell. An empty path has no frames.
    pub fn frames(&self) -> Vec<String> {
        let Some((last, walked)) = self.path.split_last() else {
            return Vec::new();
        };
        let mut canvas = self.base();
        let mut frames = Vec::with_capacity(self.path.len());
        for p in walked.iter().filter(|p| self.grid.in_bounds(**p)) {
            canvas[p.y as usize][p.x as usize] = CellKind::Start.glyph();
            frames.push(Self::join(&canvas));
            canvas[p.y as usize][p.x as usize] = TRAIL;
        }
        if self.grid.in_bounds(*last) {
            canvas[last.y as usize][last.x as usize] = CellKind::End.glyph();
        }
        frames.push(Self::join(&canvas));
        frames
    }

    /// Clears the terminal and draws every frame, pausing `delay` after each but the last.
    pub fn play<W: Write>(&self, out: &mut W, delay: Duration) -> std::io::Result<()> {
        let frames = self.frames();
        debug!("Playing {} frames", frames.len());
        for (i, frame) in frames.iter().enumerate() {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            out.write_all(frame.as_bytes())?;
            out.flush()?;
            if i + 1 < frames.len() {
                thread::sleep(delay);
            }
        }
        Ok(())
    }
}
