#![warn(clippy::all, rust_2018_idioms)]

pub mod command;
pub mod document;
pub mod shape;

pub use command::{Command, CommandError, CommandHistory, CommandResult};
pub use document::{Document, DocumentError};
pub use shape::{Shape, ShapeId, ShapeKind, ShapeStyle};
