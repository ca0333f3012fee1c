use crate::document::Document;
use crate::shape::{Shape, ShapeId};
use egui::{Pos2, Rect, Vec2};
use log::warn;
use serde::{Deserialize, Serialize};

/// A reversible edit recorded in the undo/redo history.
///
/// Each variant holds the id of the shape it targets plus the minimal
/// before/after state needed to apply and revert that one edit. Geometry is
/// stored absolutely, so reverting is an exact assignment rather than an
/// inverse transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Add a newly drawn shape to the document
    DrawShape { shape: Shape },

    /// Move a shape to a new origin
    MoveShape {
        shape_id: ShapeId,
        old_origin: Pos2,
        new_origin: Pos2,
    },

    /// Change a shape's bounding rectangle
    ResizeShape {
        shape_id: ShapeId,
        old_bounds: Rect,
        new_bounds: Rect,
    },

    /// Insert copies of previously captured shapes
    Paste { shapes: Vec<Shape> },
}

impl Command {
    /// Build a paste command from the source shapes, shifted by `offset`.
    ///
    /// Every copy gets a fresh id here, at construction, so repeated pastes
    /// of the same source never collide in the document.
    pub fn paste(source: &[Shape], offset: Vec2) -> Self {
        Self::Paste {
            shapes: source.iter().map(|shape| shape.duplicate(offset)).collect(),
        }
    }

    /// Perform this edit on the document.
    ///
    /// The caller has already made the edit by the time a command is first
    /// committed; the history only calls `apply` again on redo, when the
    /// command is currently in the reverted state.
    pub fn apply(&self, document: &mut Document) {
        match self {
            Command::DrawShape { shape } => {
                document.add_shape(shape.clone());
            }
            Command::MoveShape {
                shape_id,
                new_origin,
                ..
            } => {
                if let Some(shape) = document.find_shape_mut(*shape_id) {
                    shape.set_origin(*new_origin);
                } else {
                    warn!("move target {} is gone", shape_id);
                }
            }
            Command::ResizeShape {
                shape_id,
                new_bounds,
                ..
            } => {
                if let Some(shape) = document.find_shape_mut(*shape_id) {
                    shape.set_bounds(*new_bounds);
                } else {
                    warn!("resize target {} is gone", shape_id);
                }
            }
            Command::Paste { shapes } => {
                for shape in shapes {
                    document.add_shape(shape.clone());
                }
            }
        }
    }

    /// Reverse this edit, restoring the document state from just before the
    /// matching `apply`. Only called by the history while the command is in
    /// the applied state.
    pub fn revert(&self, document: &mut Document) {
        match self {
            Command::DrawShape { shape } => {
                if document.remove_shape(shape.id()).is_none() {
                    warn!("drawn shape {} is gone", shape.id());
                }
            }
            Command::MoveShape {
                shape_id,
                old_origin,
                ..
            } => {
                if let Some(shape) = document.find_shape_mut(*shape_id) {
                    shape.set_origin(*old_origin);
                } else {
                    warn!("move target {} is gone", shape_id);
                }
            }
            Command::ResizeShape {
                shape_id,
                old_bounds,
                ..
            } => {
                if let Some(shape) = document.find_shape_mut(*shape_id) {
                    shape.set_bounds(*old_bounds);
                } else {
                    warn!("resize target {} is gone", shape_id);
                }
            }
            Command::Paste { shapes } => {
                for shape in shapes.iter().rev() {
                    if document.remove_shape(shape.id()).is_none() {
                        warn!("pasted shape {} is gone", shape.id());
                    }
                }
            }
        }
    }
}
