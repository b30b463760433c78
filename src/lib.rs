//! Driving Simulation Library
//!
//! A fixed-step driving simulation core that can run headless or feed any
//! renderer through per-frame scene snapshots.

pub mod simulation;
