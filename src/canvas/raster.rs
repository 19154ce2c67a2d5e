//! Rasterization helpers: Bresenham lines and flood fill.

use super::{CANVAS_SIZE, PIXEL_COUNT};

/// Cells visited by a Bresenham line, both endpoints included.
///
/// Uses the doubled-error form: the error term grows by `2*minor` per step
/// and the minor axis advances once it exceeds `major`.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    x2: i32,
    y2: i32,
    dx: i32,
    dy: i32,
    ix: i32,
    iy: i32,
    error: i32,
    done: bool,
}

impl LinePoints {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x: x1,
            y: y1,
            x2,
            y2,
            dx: (x2 - x1).abs(),
            dy: (y2 - y1).abs(),
            ix: if x1 < x2 { 1 } else { -1 },
            iy: if y1 < y2 { 1 } else { -1 },
            error: 0,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let point = (self.x, self.y);

        if self.dx >= self.dy {
            if self.x == self.x2 {
                self.done = true;
            } else {
                self.x += self.ix;
                self.error += 2 * self.dy;
                if self.error > self.dx {
                    self.y += self.iy;
                    self.error -= 2 * self.dx;
                }
            }
        } else if self.y == self.y2 {
            self.done = true;
        } else {
            self.y += self.iy;
            self.error += 2 * self.dx;
            if self.error > self.dy {
                self.x += self.ix;
                self.error -= 2 * self.dy;
            }
        }

        Some(point)
    }
}

/// 4-connected flood fill from `(x, y)`.
///
/// Every cell reachable through cells equal to the seed value becomes
/// `replacement`. Neighbours off the grid are never pushed, so the stack is
/// bounded by the grid size.
pub(crate) fn flood_fill(pixels: &mut [u16; PIXEL_COUNT], x: usize, y: usize, replacement: u16) {
    let target = pixels[y * CANVAS_SIZE + x];
    if target == replacement {
        return;
    }

    let last = CANVAS_SIZE - 1;
    let mut stack = Vec::with_capacity(PIXEL_COUNT);
    stack.push((x, y));

    while let Some((x, y)) = stack.pop() {
        let index = y * CANVAS_SIZE + x;
        if pixels[index] != target {
            continue;
        }
        pixels[index] = replacement;

        if x > 0 {
            stack.push((x - 1, y));
        }
        if x < last {
            stack.push((x + 1, y));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
        if y < last {
            stack.push((x, y + 1));
        }
    }
}
