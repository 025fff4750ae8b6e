pub fn create_attachment(
    device: &wgpu::Device,
    label: &str,
    width: u32,
    height: u32,
    format: wgpu::TextureFormat,
    sample_count: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

/// Pick the largest sample count in {`requested`, 1} the format supports.
pub fn supported_sample_count(
    adapter: &wgpu::Adapter,
    format: wgpu::TextureFormat,
    requested: u32,
) -> u32 {
    if requested <= 1 {
        return 1;
    }
    let color = adapter.get_texture_format_features(format).flags;
    let depth = adapter
        .get_texture_format_features(super::DEPTH_FORMAT)
        .flags;
    if color.sample_count_supported(requested) && depth.sample_count_supported(requested) {
        requested
    } else {
        log::warn!(
            "[gpu] {}x MSAA unsupported for {:?}; rendering without antialiasing",
            requested,
            format
        );
        1
    }
}
