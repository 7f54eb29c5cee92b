use crate::texture::TextureBackend;

/// A grid texture plus the view/sampler the host binds it with.
pub struct GridTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

/// [`TextureBackend`] over a wgpu device/queue pair.
///
/// The host typically constructs this from its own device; [`super::Gpu`]
/// provides one for headless use.
#[derive(Clone)]
pub struct WgpuTextures {
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl WgpuTextures {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self { device, queue }
    }
}

impl TextureBackend for WgpuTextures {
    type Handle = GridTexture;

    fn create(&self, width: u32, height: u32) -> GridTexture {
        // wgpu rejects zero-extent textures; a zero-sized canvas still gets
        // a (1×1) placeholder whose upload is skipped.
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("stagegrid texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = self.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("stagegrid sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        GridTexture { texture, view, sampler }
    }

    fn upload(&self, handle: &GridTexture, width: u32, height: u32, pixels: &[u8]) {
        if pixels.is_empty() {
            log::debug!("skipping upload of empty pixel buffer");
            return;
        }
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);

        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &handle.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
        );
    }

    fn delete(&self, handle: GridTexture) {
        handle.texture.destroy();
    }
}
