/// How the canvas surface is configured: storage format, the format frames
/// are rendered through, and the compositing mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfacePlan {
    pub format: wgpu::TextureFormat,
    /// sRGB view of `format`. Pipelines target this so linear shader output
    /// is encoded on write.
    pub view_format: wgpu::TextureFormat,
    pub alpha_mode: wgpu::CompositeAlphaMode,
}

impl SurfacePlan {
    /// Extra view formats the surface must be configured with.
    pub fn extra_view_formats(&self) -> Vec<wgpu::TextureFormat> {
        if self.view_format == self.format {
            vec![]
        } else {
            vec![self.view_format]
        }
    }
}

/// Pick a surface setup from the reported formats. The browser backend only
/// lists non-sRGB canvas formats and only `Opaque`, but accepts an sRGB view
/// format and `PreMultiplied` on configure; the canvas has to be transparent.
pub fn plan_surface(formats: &[wgpu::TextureFormat]) -> Option<SurfacePlan> {
    let format = formats
        .iter()
        .copied()
        .find(|f| {
            matches!(
                f,
                wgpu::TextureFormat::Bgra8UnormSrgb
                    | wgpu::TextureFormat::Rgba8UnormSrgb
                    | wgpu::TextureFormat::Bgra8Unorm
                    | wgpu::TextureFormat::Rgba8Unorm
            )
        })
        .or_else(|| formats.first().copied())?;
    Some(SurfacePlan {
        format,
        view_format: format.add_srgb_suffix(),
        alpha_mode: wgpu::CompositeAlphaMode::PreMultiplied,
    })
}
