//! Events and messages exchanged with the host.
//!
//! Submodules:
//! - [`hit`] – hit notifications entering the behavior core from outside
//! - [`spawn`] – projectile spawn requests leaving the behavior core

pub mod hit;
pub mod spawn;
