use super::helpers;

/// Per-surface attachments: depth buffer and, with MSAA, the multisampled
/// color target that resolves into the swapchain image.
pub(crate) struct RenderTargets {
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) msaa: Option<(wgpu::Texture, wgpu::TextureView)>,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (depth_tex, depth_view) = helpers::create_attachment(
            device,
            "depth_tex",
            width,
            height,
            super::DEPTH_FORMAT,
            sample_count,
        );
        let msaa = (sample_count > 1).then(|| {
            helpers::create_attachment(
                device,
                "msaa_color",
                width,
                height,
                color_format,
                sample_count,
            )
        });
        Self {
            depth_tex,
            depth_view,
            msaa,
            color_format,
            sample_count,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height, self.color_format, self.sample_count);
    }

    pub(crate) fn msaa_view(&self) -> Option<&wgpu::TextureView> {
        self.msaa.as_ref().map(|(_, view)| view)
    }
}
