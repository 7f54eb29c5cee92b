use super::TextureBackend;

/// Lazily regenerated GPU texture.
///
/// Invariants:
/// - the dirty flag starts set; it is cleared only by a successful upload,
///   so a clean cache always holds a handle.
/// - the handle is allocated once, on the first upload, and re-uploaded in
///   place on later dirty cycles; it is never re-allocated while valid.
pub struct TextureCache<B: TextureBackend> {
    handle: Option<B::Handle>,
    dirty: bool,
}

impl<B: TextureBackend> TextureCache<B> {
    pub fn new() -> Self {
        Self { handle: None, dirty: true }
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flags the cached texture as stale. The next [`upload`](Self::upload)
    /// regenerates it; until then the old handle keeps being served.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// The current handle, if a first upload has happened.
    #[inline]
    pub fn handle(&self) -> Option<&B::Handle> {
        self.handle.as_ref()
    }

    /// Pushes freshly rasterized pixels to the GPU and clears the dirty
    /// flag. Allocates the texture on the first call, re-uploads in place on
    /// every later one.
    pub fn upload(&mut self, backend: &B, width: u32, height: u32, pixels: &[u8]) -> &B::Handle {
        let handle = self.handle.get_or_insert_with(|| {
            log::debug!("allocating grid texture ({width}x{height})");
            backend.create(width, height)
        });
        backend.upload(handle, width, height, pixels);
        self.dirty = false;
        handle
    }

    /// Releases the GPU texture. The cache must not be used afterwards.
    pub fn dispose(&mut self, backend: &B) {
        if let Some(handle) = self.handle.take() {
            log::debug!("deleting grid texture");
            backend.delete(handle);
        }
    }
}

impl<B: TextureBackend> Default for TextureCache<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::testutil::MockBackend;

    #[test]
    fn starts_dirty_with_no_handle() {
        let cache = TextureCache::<MockBackend>::new();
        assert!(cache.is_dirty());
        assert!(cache.handle().is_none());
    }

    #[test]
    fn upload_creates_once_then_reuses_handle() {
        let backend = MockBackend::default();
        let mut cache = TextureCache::new();

        let first = *cache.upload(&backend, 4, 4, &[0u8; 64]);
        cache.mark_dirty();
        let second = *cache.upload(&backend, 4, 4, &[0u8; 64]);

        assert_eq!(first, second, "handle must be re-uploaded, not re-allocated");
        assert_eq!(backend.created.get(), 1);
        assert_eq!(backend.uploads.get(), 2);
    }

    #[test]
    fn upload_clears_dirty() {
        let backend = MockBackend::default();
        let mut cache = TextureCache::new();
        cache.upload(&backend, 1, 1, &[0u8; 4]);
        assert!(!cache.is_dirty());
        cache.mark_dirty();
        assert!(cache.is_dirty());
    }

    #[test]
    fn dispose_deletes_exactly_once() {
        let backend = MockBackend::default();
        let mut cache = TextureCache::new();
        cache.upload(&backend, 1, 1, &[0u8; 4]);
        cache.dispose(&backend);
        cache.dispose(&backend);
        assert_eq!(backend.deleted.get(), 1);
        assert!(cache.handle().is_none());
    }

    #[test]
    fn dispose_without_upload_is_a_no_op() {
        let backend = MockBackend::default();
        let mut cache = TextureCache::<MockBackend>::new();
        cache.dispose(&backend);
        assert_eq!(backend.deleted.get(), 0);
    }
}
