use mockall::automock;
use serde::Deserialize;
use tracing::debug;

/// Anything that can describe how it would be drawn.
///
/// There is no registration step: any type that implements `draw` can be handed to [`render`].
#[automock]
pub trait Drawable {
    fn draw(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Drawable for Circle {
    fn draw(&self) -> String {
        format!("Circle(radius={:?})", self.radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Drawable for Rectangle {
    fn draw(&self) -> String {
        format!("Rectangle({:?}x{:?})", self.width, self.height)
    }
}

pub fn render(shape: &dyn Drawable) -> String {
    let drawn = shape.draw();
    debug!(shape = %drawn, "rendering");
    format!("Rendering: {drawn}")
}

/// A shape as it appears in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl From<Shape> for Box<dyn Drawable> {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Circle { radius } => Box::new(Circle::new(radius)),
            Shape::Rectangle { width, height } => Box::new(Rectangle::new(width, height)),
        }
    }
}
