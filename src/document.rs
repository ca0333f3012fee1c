use crate::shape::{MIN_SHAPE_SIZE, Shape, ShapeId};
use egui::{Pos2, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when editing the document directly
#[derive(Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error("shape {0} not found")]
    ShapeNotFound(ShapeId),

    #[error("shape dimensions too small (min: {}). Width: {width}, Height: {height}", MIN_SHAPE_SIZE)]
    BoundsTooSmall { width: f32, height: f32 },
}

/// The mutable shape store a drawing session edits. Commands hold ids into
/// it; the application layer edits it through the methods below and commits
/// the matching command afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes in insertion order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn find_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub(crate) fn find_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes and returns the shape with the given id
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|shape| shape.id() == id)?;
        Some(self.shapes.remove(index))
    }

    /// Move a shape so its top-left corner sits at `new_origin`. Returns the
    /// previous origin, which the caller needs to build the move command.
    pub fn move_shape(&mut self, id: ShapeId, new_origin: Pos2) -> Result<Pos2, DocumentError> {
        let shape = self
            .find_shape_mut(id)
            .ok_or(DocumentError::ShapeNotFound(id))?;
        let old_origin = shape.origin();
        shape.set_origin(new_origin);
        Ok(old_origin)
    }

    /// Change a shape's bounding rectangle. Returns the previous bounds,
    /// which the caller needs to build the resize command.
    pub fn resize_shape(&mut self, id: ShapeId, new_bounds: Rect) -> Result<Rect, DocumentError> {
        validate_bounds(&new_bounds)?;
        let shape = self
            .find_shape_mut(id)
            .ok_or(DocumentError::ShapeNotFound(id))?;
        let old_bounds = shape.bounds();
        shape.set_bounds(new_bounds);
        Ok(old_bounds)
    }
}

/// Validates that a rectangle has minimum dimensions
fn validate_bounds(bounds: &Rect) -> Result<(), DocumentError> {
    if bounds.width() < MIN_SHAPE_SIZE || bounds.height() < MIN_SHAPE_SIZE {
        Err(DocumentError::BoundsTooSmall {
            width: bounds.width(),
            height: bounds.height(),
        })
    } else {
        Ok(())
    }
}
