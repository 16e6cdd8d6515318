#![warn(missing_docs)]
//! Utilities for loading and querying Pacman-style mazes

pub mod grid;
pub mod standard_mazes;
