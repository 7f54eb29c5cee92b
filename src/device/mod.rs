//! Headless GPU plumbing.
//!
//! The host renderer normally owns the device and queue; [`WgpuTextures`]
//! wraps whichever it provides. [`Gpu`] exists for hosts (and integration
//! tests) that need to bring up a device without a window.

mod gpu;
mod textures;

pub use gpu::{Gpu, GpuInit};
pub use textures::{GridTexture, WgpuTextures};
