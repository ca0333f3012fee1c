use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Minimum width and height a shape may have
pub const MIN_SHAPE_SIZE: f32 = 2.0;

/// Dash patterns offered by the stroke-type menu, as alternating
/// on/off lengths. The first entry is a solid line.
pub const DASH_PRESETS: [&[f32]; 7] = [
    &[],
    &[1.0],
    &[1.0, 3.0],
    &[4.0, 1.0],
    &[4.0, 3.0],
    &[5.0, 2.0, 2.0, 2.0],
    &[5.0, 2.0, 1.0, 1.0, 1.0, 2.0],
];

/// A unique identifier for a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    /// Creates a new unique id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The geometric primitive a shape is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// A line running corner to corner through the bounding rectangle
    Line,
    Rectangle,
    Ellipse,
}

/// Visual styling shared by all shape kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub stroke_color: Color32,
    /// Fill color; transparent means no fill
    pub fill_color: Color32,
    pub thickness: f32,
    /// Dash pattern as alternating on/off lengths; empty means solid
    pub dash_pattern: Vec<f32>,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color32::BLACK,
            fill_color: Color32::TRANSPARENT,
            thickness: 2.0,
            dash_pattern: Vec::new(),
        }
    }
}

/// A single document element: a styled primitive with a stable id and an
/// axis-aligned bounding rectangle as its geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    bounds: Rect,
    style: ShapeStyle,
}

impl Shape {
    pub fn new(kind: ShapeKind, bounds: Rect, style: ShapeStyle) -> Self {
        Self {
            id: ShapeId::new(),
            kind,
            bounds,
            style,
        }
    }

    /// Create a line between two points; the points may be given in any order
    pub fn line(from: Pos2, to: Pos2, style: ShapeStyle) -> Self {
        Self::new(ShapeKind::Line, Rect::from_two_pos(from, to), style)
    }

    pub fn rectangle(bounds: Rect, style: ShapeStyle) -> Self {
        Self::new(ShapeKind::Rectangle, bounds, style)
    }

    pub fn ellipse(bounds: Rect, style: ShapeStyle) -> Self {
        Self::new(ShapeKind::Ellipse, bounds, style)
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Get the bounding rectangle for this shape
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Top-left corner of the bounding rectangle
    pub fn origin(&self) -> Pos2 {
        self.bounds.min
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    /// Move the shape so its top-left corner sits at `origin`, keeping its size
    pub(crate) fn set_origin(&mut self, origin: Pos2) {
        self.bounds = Rect::from_min_size(origin, self.bounds.size());
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Copy of this shape under a fresh id, shifted by `offset`
    pub(crate) fn duplicate(&self, offset: Vec2) -> Self {
        Self {
            id: ShapeId::new(),
            kind: self.kind,
            bounds: self.bounds.translate(offset),
            style: self.style.clone(),
        }
    }
}
