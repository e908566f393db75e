//! CLI infrastructure for the noughts binary
//!
//! This module provides the text-mode driver around the engine: playing a
//! game on the terminal, running engine-versus-engine batches, and analyzing
//! positions.

pub mod commands;
pub mod output;
