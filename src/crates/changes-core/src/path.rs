//! Position accumulation.
//!
//! Each interval owns a fixed displacement; walking a progression adds them
//! up from a shared origin. The table is a hand-tuned layout, not a circle
//! of fifths, so magnitudes and angles are irregular. Screen coordinates:
//! `y` grows downward.

use crate::chord::Quality;
use crate::interval::Interval;
use crate::walker::ProgressionPair;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionVector {
    pub dx: i32,
    pub dy: i32,
}

const fn dir(dx: i32, dy: i32) -> DirectionVector {
    DirectionVector { dx, dy }
}

/// Displacement for each interval, indexed by semitones
pub const DIRECTIONS: [DirectionVector; 12] = [
    dir(12, 0),
    dir(6, -3),
    dir(8, -8),
    dir(13, 13),
    dir(13, -13),
    dir(7, 0),
    dir(5, -20),
    dir(7, 7),
    dir(13, -7),
    dir(13, 7),
    dir(0, 12),
    dir(6, 3),
];

impl DirectionVector {
    pub fn for_interval(interval: Interval) -> Self {
        DIRECTIONS[interval.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Clamps at the `i32` limits instead of wrapping
    pub fn offset(self, direction: DirectionVector) -> Self {
        Point::new(
            self.x.saturating_add(direction.dx),
            self.y.saturating_add(direction.dy),
        )
    }
}

/// Where every path starts
pub const ORIGIN: Point = Point::new(10, 80);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: i32,
    pub y: i32,
    pub quality: Quality,
}

impl PathPoint {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Axis-aligned box covering the origin and every point of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn width(&self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    pub fn height(&self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub origin: Point,
    pub points: Vec<PathPoint>,
}

impl Path {
    pub fn bounds(&self) -> Bounds {
        self.points.iter().map(PathPoint::position).fold(
            Bounds {
                min: self.origin,
                max: self.origin,
            },
            |b, p| Bounds {
                min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
            },
        )
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Walk the direction table from `origin`, one point per pair
pub fn accumulate(pairs: &[ProgressionPair], origin: Point) -> Path {
    let mut position = origin;
    let points = pairs
        .iter()
        .map(|pair| {
            position = position.offset(DirectionVector::for_interval(pair.interval));
            PathPoint {
                x: position.x,
                y: position.y,
                quality: pair.quality.clone(),
            }
        })
        .collect();

    Path { origin, points }
}
