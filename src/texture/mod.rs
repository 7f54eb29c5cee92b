//! GPU-texture capability and the dirty-flag texture cache.

mod cache;

#[cfg(test)]
pub(crate) mod testutil;

pub use cache::TextureCache;

/// The host GPU contract the cache needs: create a 2D RGBA texture, upload
/// pixel bytes into it, delete it.
///
/// Expressed as a capability trait rather than a renderer base class so the
/// skin composes over whatever context the host owns ([`crate::device`]
/// provides the wgpu implementation; tests use an in-memory mock).
pub trait TextureBackend {
    type Handle;

    /// Allocates a `width × height` RGBA8 texture with clamp-to-edge
    /// wrapping and no mip chain.
    fn create(&self, width: u32, height: u32) -> Self::Handle;

    /// Uploads `pixels` (`width × height × 4` straight RGBA bytes, top-left
    /// origin) into an existing texture.
    fn upload(&self, handle: &Self::Handle, width: u32, height: u32, pixels: &[u8]);

    /// Releases the texture. Called at most once per handle.
    fn delete(&self, handle: Self::Handle);
}
