//! Straight line segments on the grid, used to place ships and to walk cells.

/// A straight run of cells: a fixed coordinate on one axis and a start/end on
/// the other. For a vertical segment the fixed axis is `x` and the walk moves
/// along `y`; for a horizontal one it is the other way round.
///
/// The walk goes from `start` to `end` inclusive and may be decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    #[cfg_attr(feature = "std", serde(rename = "axis1"))]
    pub fixed: i32,
    #[cfg_attr(feature = "std", serde(rename = "startAxis2"))]
    pub start: i32,
    #[cfg_attr(feature = "std", serde(rename = "endAxis2"))]
    pub end: i32,
    #[cfg_attr(feature = "std", serde(rename = "isVertical", default))]
    pub vertical: bool,
}

impl Segment {
    pub const fn new(fixed: i32, start: i32, end: i32, vertical: bool) -> Self {
        Self {
            fixed,
            start,
            end,
            vertical,
        }
    }

    /// Horizontal segment on row `y` from `x0` to `x1`.
    pub const fn horizontal(y: i32, x0: i32, x1: i32) -> Self {
        Self::new(y, x0, x1, false)
    }

    /// Vertical segment on column `x` from `y0` to `y1`.
    pub const fn vertical(x: i32, y0: i32, y1: i32) -> Self {
        Self::new(x, y0, y1, true)
    }

    /// Number of cells the segment denotes.
    pub fn length(&self) -> usize {
        self.start.abs_diff(self.end) as usize + 1
    }

    /// Same cells with `start <= end`.
    pub fn normalize(&self) -> Self {
        if self.start > self.end {
            Self::new(self.fixed, self.end, self.start, self.vertical)
        } else {
            *self
        }
    }

    /// Keeps `start` and the walking direction, cutting the segment down to at
    /// most `len` cells. `len == 0` is treated as 1.
    pub fn truncated(&self, len: usize) -> Self {
        let len = len.max(1);
        if len >= self.length() {
            return *self;
        }
        let offset = (len - 1) as i32;
        let end = if self.start <= self.end {
            self.start + offset
        } else {
            self.start - offset
        };
        Self::new(self.fixed, self.start, end, self.vertical)
    }

    /// Coordinates of the segment's cells as `(x, y)`, in walking order.
    pub fn coords(&self) -> SegmentCoords {
        SegmentCoords {
            fixed: self.fixed,
            vertical: self.vertical,
            next: i64::from(self.start),
            step: if self.start <= self.end { 1 } else { -1 },
            remaining: self.length(),
        }
    }
}

/// Iterator over the coordinates of a [`Segment`].
#[derive(Debug, Clone)]
pub struct SegmentCoords {
    fixed: i32,
    vertical: bool,
    next: i64,
    step: i64,
    remaining: usize,
}

impl Iterator for SegmentCoords {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // start and end are both i32, so every intermediate value fits.
        let i = self.next as i32;
        self.next += self.step;
        Some(if self.vertical {
            (self.fixed, i)
        } else {
            (i, self.fixed)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SegmentCoords {}
