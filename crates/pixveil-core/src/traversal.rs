use std::fmt;
use std::str::FromStr;

use crate::error::PixveilError;

/// The deterministic order in which pixel coordinates are visited while
/// embedding or extracting bits.
///
/// Every mode is a pure function of the image dimensions: the same
/// `(width, height)` pair always produces the same sequence, and the sequence
/// visits every pixel exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalMode {
    /// row by row from the top, each row left to right
    TopBottomLeftRight,
    /// row by row from the top, each row right to left
    TopBottomRightLeft,
    /// row by row from the bottom, each row left to right
    BottomTopLeftRight,
    /// row by row from the bottom, each row right to left
    BottomTopRightLeft,
    /// shrinking rings starting at the top left corner, clockwise
    SpiralClockwise,
    /// shrinking rings starting at the top left corner, counter-clockwise
    SpiralCounterClockwise,
    /// rows alternating direction, like mowing a lawn
    ZigzagHorizontal,
    /// columns alternating direction
    ZigzagVertical,
    /// anti-diagonals starting at the top left corner
    DiagonalTopLeft,
    /// anti-diagonals starting at the top right corner
    DiagonalTopRight,
}

impl TraversalMode {
    pub const ALL: [TraversalMode; 10] = [
        TraversalMode::TopBottomLeftRight,
        TraversalMode::TopBottomRightLeft,
        TraversalMode::BottomTopLeftRight,
        TraversalMode::BottomTopRightLeft,
        TraversalMode::SpiralClockwise,
        TraversalMode::SpiralCounterClockwise,
        TraversalMode::ZigzagHorizontal,
        TraversalMode::ZigzagVertical,
        TraversalMode::DiagonalTopLeft,
        TraversalMode::DiagonalTopRight,
    ];

    /// Produces the full visiting order for a `width` x `height` pixel grid.
    ///
    /// The result is a permutation of all `width * height` coordinates.
    /// Degenerate dimensions (a zero width or height) produce an empty
    /// sequence rather than an error.
    pub fn coordinates(self, width: u32, height: u32) -> Vec<(u32, u32)> {
        if width == 0 || height == 0 {
            return Vec::new();
        }

        match self {
            TraversalMode::TopBottomLeftRight => rows(width, height, false, false),
            TraversalMode::TopBottomRightLeft => rows(width, height, false, true),
            TraversalMode::BottomTopLeftRight => rows(width, height, true, false),
            TraversalMode::BottomTopRightLeft => rows(width, height, true, true),
            TraversalMode::SpiralClockwise => spiral_clockwise(width, height),
            TraversalMode::SpiralCounterClockwise => spiral_counter_clockwise(width, height),
            TraversalMode::ZigzagHorizontal => zigzag_rows(width, height),
            TraversalMode::ZigzagVertical => zigzag_columns(width, height),
            TraversalMode::DiagonalTopLeft => diagonals(width, height, false),
            TraversalMode::DiagonalTopRight => diagonals(width, height, true),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TraversalMode::TopBottomLeftRight => "top-bottom-left-right",
            TraversalMode::TopBottomRightLeft => "top-bottom-right-left",
            TraversalMode::BottomTopLeftRight => "bottom-top-left-right",
            TraversalMode::BottomTopRightLeft => "bottom-top-right-left",
            TraversalMode::SpiralClockwise => "spiral-clockwise",
            TraversalMode::SpiralCounterClockwise => "spiral-counter-clockwise",
            TraversalMode::ZigzagHorizontal => "zigzag-horizontal",
            TraversalMode::ZigzagVertical => "zigzag-vertical",
            TraversalMode::DiagonalTopLeft => "diagonal-top-left",
            TraversalMode::DiagonalTopRight => "diagonal-top-right",
        }
    }
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalMode {
    type Err = PixveilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TraversalMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| PixveilError::UnknownTraversalMode(s.to_string()))
    }
}

fn grid_capacity(width: u32, height: u32) -> usize {
    (width as usize) * (height as usize)
}

fn rows(width: u32, height: u32, bottom_up: bool, right_to_left: bool) -> Vec<(u32, u32)> {
    let mut coords = Vec::with_capacity(grid_capacity(width, height));
    for y in 0..height {
        let y = if bottom_up { height - 1 - y } else { y };
        for x in 0..width {
            let x = if right_to_left { width - 1 - x } else { x };
            coords.push((x, y));
        }
    }
    coords
}

fn zigzag_rows(width: u32, height: u32) -> Vec<(u32, u32)> {
    let mut coords = Vec::with_capacity(grid_capacity(width, height));
    for y in 0..height {
        if y % 2 == 0 {
            for x in 0..width {
                coords.push((x, y));
            }
        } else {
            for x in (0..width).rev() {
                coords.push((x, y));
            }
        }
    }
    coords
}

fn zigzag_columns(width: u32, height: u32) -> Vec<(u32, u32)> {
    let mut coords = Vec::with_capacity(grid_capacity(width, height));
    for x in 0..width {
        if x % 2 == 0 {
            for y in 0..height {
                coords.push((x, y));
            }
        } else {
            for y in (0..height).rev() {
                coords.push((x, y));
            }
        }
    }
    coords
}

/// Peels one ring per iteration: top row left to right, right column downwards,
/// bottom row right to left, left column upwards. The boundary checks after
/// every side keep 1xN and Nx1 grids from revisiting cells.
fn spiral_clockwise(width: u32, height: u32) -> Vec<(u32, u32)> {
    let mut coords = Vec::with_capacity(grid_capacity(width, height));
    let (mut left, mut right) = (0i64, width as i64 - 1);
    let (mut top, mut bottom) = (0i64, height as i64 - 1);

    while left <= right && top <= bottom {
        for x in left..=right {
            coords.push((x as u32, top as u32));
        }
        top += 1;
        if top > bottom {
            break;
        }

        for y in top..=bottom {
            coords.push((right as u32, y as u32));
        }
        right -= 1;
        if left > right {
            break;
        }

        for x in (left..=right).rev() {
            coords.push((x as u32, bottom as u32));
        }
        bottom -= 1;
        if top > bottom {
            break;
        }

        for y in (top..=bottom).rev() {
            coords.push((left as u32, y as u32));
        }
        left += 1;
    }

    coords
}

/// the mirrored peel: left column downwards, bottom row left to right,
/// right column upwards, top row right to left
fn spiral_counter_clockwise(width: u32, height: u32) -> Vec<(u32, u32)> {
    let mut coords = Vec::with_capacity(grid_capacity(width, height));
    let (mut left, mut right) = (0i64, width as i64 - 1);
    let (mut top, mut bottom) = (0i64, height as i64 - 1);

    while left <= right && top <= bottom {
        for y in top..=bottom {
            coords.push((left as u32, y as u32));
        }
        left += 1;
        if left > right {
            break;
        }

        for x in left..=right {
            coords.push((x as u32, bottom as u32));
        }
        bottom -= 1;
        if top > bottom {
            break;
        }

        for y in (top..=bottom).rev() {
            coords.push((right as u32, y as u32));
        }
        right -= 1;
        if left > right {
            break;
        }

        for x in (left..=right).rev() {
            coords.push((x as u32, top as u32));
        }
        top += 1;
    }

    coords
}

/// Walks the anti-diagonals indexed by `x + y`. Within a diagonal, cells are
/// visited with increasing x; `mirrored` flips the x axis, so the walk starts
/// at the top right corner instead.
fn diagonals(width: u32, height: u32, mirrored: bool) -> Vec<(u32, u32)> {
    let (w, h) = (width as i64, height as i64);
    let mut coords = Vec::with_capacity(grid_capacity(width, height));

    for d in 0..(w + h - 1) {
        let x_min = (d - h + 1).max(0);
        let x_max = d.min(w - 1);
        for i in x_min..=x_max {
            let y = d - i;
            let x = if mirrored { w - 1 - i } else { i };
            coords.push((x as u32, y as u32));
        }
    }

    coords
}
