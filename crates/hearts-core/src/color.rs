use glam::Vec3;

/// Convert a packed `0xRRGGBB` sRGB color into linear RGB.
pub fn srgb_hex_to_linear(hex: u32) -> Vec3 {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    Vec3::new(channel(16), channel(8), channel(0))
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
pub fn to_wgpu_color(linear: Vec3) -> wgpu::Color {
    wgpu::Color {
        r: linear.x as f64,
        g: linear.y as f64,
        b: linear.z as f64,
        a: 1.0,
    }
}
