//! Core logic for a terminal side-scrolling zombie platformer: fixed-step
//! kinematics, stomp-or-die collision resolution, a dead-zone camera with a
//! two-tile background ring buffer, and flat-file high scores.

pub mod compute;
pub mod display;
pub mod entities;
pub mod input;
pub mod scores;
