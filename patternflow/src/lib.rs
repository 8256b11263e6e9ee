//! Schema driven control panels for generative patterns.
//!
//! A pattern declares its tunable values as a [`control::PatternSchema`].
//! [`control::ControlRenderer`] turns that schema into a toolkit independent
//! widget tree, owns the live [`control::Params`] store and keeps the two in
//! sync as the user interacts. [`view`] materializes the tree for a concrete
//! frontend and [`runtime`] provides the gallery host around it.

pub mod control;
pub mod core;
pub mod prelude;
pub mod runtime;
pub mod view;
