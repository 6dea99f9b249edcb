#![cfg_attr(doc, doc = include_str!("../README.md"))]
//! Model and context tree for LEMS model specifications

pub mod behavior;
pub mod component;
pub mod context;
pub mod dimension;
pub mod error;
pub mod expr;
pub mod model;
pub mod registry;
pub mod render;
pub mod unit;

#[cfg(test)]
mod test;

pub use behavior::{Behavior, Regime, StateVariable, TimeDerivative};
pub use component::{Component, ComponentBase, ComponentType};
pub use context::Context;
pub use dimension::{Dimension, DimensionExponents};
pub use error::{DefinitionKind, DuplicateDefinitionError};
pub use expr::{BinaryOp, Expr, UnaryOp};
pub use model::Model;
pub use registry::{Definition, Registry};
pub use unit::Unit;
