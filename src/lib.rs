//! Scroll-driven rigid-body scene.
//!
//! A box of walls holds a handful of cubes simulated by Rapier.  Scrolling
//! the virtual page accelerates it, and that acceleration is folded into
//! world gravity so the cubes jump and settle as the page moves.

pub mod breakpoint;
pub mod camera_fit;
pub mod config;
pub mod constants;
pub mod error;
pub mod gravity;
pub mod hud;
pub mod layout;
pub mod page;
pub mod scene;
pub mod scroll;
pub mod simulation;
pub mod viewport;
pub mod world;
