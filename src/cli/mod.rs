//! CLI infrastructure for the Red-Blue Nim toolkit
//!
//! This module provides the command-line interface for playing interactive
//! games and for analyzing and cross-checking the search algorithms.

pub mod commands;
pub mod output;
