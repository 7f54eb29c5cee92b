//! The grid skin façade.

use crate::coords::{CanvasSize, Vec2};
use crate::geometry::{self, MAJOR_INTERVAL, MINOR_INTERVAL};
use crate::paint::StyleConfig;
use crate::raster::RasterSurface;
use crate::text::{GlyphSource, LabelFont};
use crate::texture::{TextureBackend, TextureCache};

/// Default axis-label size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// The capability contract a stage skin satisfies for the host renderer:
/// report its logical size and rotation center, produce a texture on demand,
/// release its resources on disposal.
pub trait Skin {
    type Texture;

    fn size(&self) -> CanvasSize;
    fn rotation_center(&self) -> Vec2;

    /// Returns the skin's current texture, regenerating it first if stale.
    ///
    /// `scale_hint` exists for device-pixel-ratio-aware hosts; see
    /// [`GridSkin::get_texture`] for this skin's handling of it.
    fn get_texture(&mut self, scale_hint: Option<f32>) -> &Self::Texture;

    /// Releases GPU and raster resources. The skin is unusable afterwards.
    fn dispose(&mut self);
}

/// Coordinate-grid overlay skin.
///
/// Composes the tier builders, the raster surface and the texture cache; the
/// host drives it from a single render loop (all operations are synchronous
/// and run to completion, so the dirty flag is a work-avoidance device, not
/// a synchronization one).
///
/// Lifecycle: dirty on construction; `get_texture` rasterizes and uploads
/// once per invalidation; `set_size` / `set_font_size` invalidate; any call
/// after `dispose` is a contract violation and panics. On stage resize the
/// documented host pattern is to destroy this skin and create a fresh one —
/// `set_size` exists for hosts that keep the instance alive instead.
pub struct GridSkin<B: TextureBackend, F: GlyphSource = LabelFont> {
    backend: B,
    size: CanvasSize,
    style: StyleConfig,
    font: F,
    font_size: f32,
    surface: RasterSurface,
    cache: TextureCache<B>,
    disposed: bool,
}

impl<B: TextureBackend, F: GlyphSource> GridSkin<B, F> {
    /// Creates a skin for the given stage size.
    ///
    /// `font` is the sans-serif face used for axis labels; the host supplies
    /// its bytes via [`LabelFont::from_bytes`]. No rasterization happens
    /// until the first [`get_texture`](Skin::get_texture).
    pub fn new(backend: B, size: CanvasSize, style: StyleConfig, font: F) -> Self {
        Self {
            backend,
            size,
            style,
            font,
            font_size: DEFAULT_FONT_SIZE,
            surface: RasterSurface::new(size),
            cache: TextureCache::new(),
            disposed: false,
        }
    }

    /// Updates the logical size, recomputes the rotation center and marks
    /// the texture stale. Does not re-render; that happens on the next
    /// `get_texture`.
    pub fn set_size(&mut self, size: CanvasSize) {
        self.ensure_live("set_size");
        self.size = size;
        self.surface = RasterSurface::new(size);
        self.cache.mark_dirty();
    }

    /// Updates the label font size and marks the texture stale.
    pub fn set_font_size(&mut self, px: f32) {
        self.ensure_live("set_font_size");
        self.font_size = px;
        self.cache.mark_dirty();
    }

    /// Rasterizes all three tiers in order: main axis, then major grid, then
    /// minor grid. Later tiers paint over earlier ones where they coincide.
    fn rasterize(&mut self) {
        self.surface.clear();
        if self.size.is_empty() {
            // Nothing to draw into; the empty buffer is still uploadable.
            return;
        }
        let tiers = [
            geometry::main_axis(self.size, &self.style),
            geometry::grid_axis(self.size, &self.style, MAJOR_INTERVAL, true),
            geometry::grid_axis(self.size, &self.style, MINOR_INTERVAL, false),
        ];
        for tier in &tiers {
            self.surface.draw_axis(tier, &self.font, self.font_size);
        }
    }

    #[inline]
    fn ensure_live(&self, op: &str) {
        assert!(!self.disposed, "GridSkin::{op} called after dispose()");
    }
}

impl<B: TextureBackend, F: GlyphSource> Skin for GridSkin<B, F> {
    type Texture = B::Handle;

    #[inline]
    fn size(&self) -> CanvasSize {
        self.size
    }

    /// The rotation center is always the stage midpoint; it is recomputed
    /// with the size and never independently mutated.
    #[inline]
    fn rotation_center(&self) -> Vec2 {
        self.surface.center()
    }

    /// Returns the cached texture, regenerating at most once per
    /// invalidation.
    ///
    /// `scale_hint` is accepted for forward compatibility with
    /// device-pixel-ratio-aware hosts and currently ignored: the grid is
    /// always rasterized at 1× logical scale.
    fn get_texture(&mut self, _scale_hint: Option<f32>) -> &B::Handle {
        self.ensure_live("get_texture");
        if self.cache.is_dirty() {
            log::debug!(
                "regenerating grid texture: {}x{}, font {}px",
                self.size.width,
                self.size.height,
                self.font_size
            );
            self.rasterize();
            let (w, h) = self.surface.dims();
            self.cache.upload(&self.backend, w, h, self.surface.bytes())
        } else {
            self.cache
                .handle()
                .expect("clean texture cache always holds a handle")
        }
    }

    fn dispose(&mut self) {
        self.ensure_live("dispose");
        self.cache.dispose(&self.backend);
        self.disposed = true;
    }
}
