//! Core fractal-tree generation library.
//!
//! Main components:
//! - [`grow`] — trunk drawing and the branch-generation walk.
//! - [`sampler`] — Gaussian jitter sampling.
//! - [`surface`] — drawing capabilities a host surface must provide.
//! - [`command`] — recorded draw calls for replay by a host.
//! - [`config`] — tree parameters.
//! - [`types`] — shared geometry and color types.

pub mod command;
pub mod config;
pub mod grow;
pub mod sampler;
pub mod surface;
pub mod types;
