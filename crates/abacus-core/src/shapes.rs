use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

/// Sides longer than this are not drawn by [`Shape::picture`].
pub const MAX_PICTURE_SIDE: u32 = 50;

pub const TOO_BIG_FOR_PICTURE: &str = "Too big for picture.";

/// Axis-aligned shape with integer sides.
pub trait Shape {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    fn perimeter(&self) -> u64 {
        2 * (u64::from(self.width()) + u64::from(self.height()))
    }

    fn diagonal(&self) -> f64 {
        f64::from(self.width()).hypot(f64::from(self.height()))
    }

    /// Rows of `*`, one line per unit of height, each newline-terminated.
    fn picture(&self) -> String {
        if self.width() > MAX_PICTURE_SIDE || self.height() > MAX_PICTURE_SIDE {
            return TOO_BIG_FOR_PICTURE.to_string();
        }
        let row = format!("{}\n", "*".repeat(self.width() as usize));
        row.repeat(self.height() as usize)
    }

    /// How many copies of `other` tile inside `self` without rotation.
    fn amount_inside(&self, other: &dyn Shape) -> Result<u64, CoreError> {
        let across = self.width().checked_div(other.width());
        let down = self.height().checked_div(other.height());
        match (across, down) {
            (Some(a), Some(d)) => Ok(u64::from(a) * u64::from(d)),
            _ => Err(CoreError::DegenerateShape(format!(
                "{}x{}",
                other.width(),
                other.height()
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rectangle {
    width: u32,
    height: u32,
}

impl Rectangle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}

impl Shape for Rectangle {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle(width={}, height={})", self.width, self.height)
    }
}

/// A rectangle whose sides always match. Every mutator goes through [`Square::set_side`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Square {
    inner: Rectangle,
}

impl Square {
    pub fn new(side: u32) -> Self {
        Self {
            inner: Rectangle::new(side, side),
        }
    }

    pub fn side(&self) -> u32 {
        self.inner.width
    }

    pub fn set_side(&mut self, side: u32) {
        self.inner.set_width(side);
        self.inner.set_height(side);
    }

    pub fn set_width(&mut self, width: u32) {
        self.set_side(width);
    }

    pub fn set_height(&mut self, height: u32) {
        self.set_side(height);
    }

    pub fn as_rectangle(&self) -> &Rectangle {
        &self.inner
    }
}

impl Shape for Square {
    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square(side={})", self.side())
    }
}
