use crate::constants::{LIGHT_DIRECTION, LIGHT_INTENSITY, TOON_RAMP};
use crate::core::Shape;
use glam::{Mat4, Vec3};
use web_sys as web;

mod helpers;
mod particles;
mod surface;
mod targets;
mod toon;

use particles::{create_particle_resources, ParticleResources, ParticleUniforms};
use surface::plan_surface;
use targets::DepthTarget;
use toon::{create_toon_resources, ObjectUniforms, SceneUniforms, ToonResources};

/// What the renderer needs to know about the scene up front.
pub struct SceneSetup<'s> {
    pub shapes: &'s [Shape],
    pub particles: &'s [Vec3],
    pub particle_half_extent: f32,
    pub material_rgb: [f32; 3],
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    depth: DepthTarget,
    toon: ToonResources,
    particles: ParticleResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    material_rgb: [f32; 3],
    particle_half_extent: f32,
    view: Mat4,
    proj: Mat4,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, setup: SceneSetup<'_>) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let plan = plan_surface(&caps.formats)
            .ok_or_else(|| anyhow::anyhow!("surface reports no texture formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: plan.format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: plan.alpha_mode,
            view_formats: plan.extra_view_formats(),
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} view={:?} alpha={:?}",
            width,
            height,
            plan.format,
            plan.view_format,
            plan.alpha_mode
        );

        let depth = DepthTarget::new(&device, width, height);
        let toon = create_toon_resources(&device, &queue, plan.view_format, setup.shapes, &TOON_RAMP);
        let particles = create_particle_resources(&device, plan.view_format, setup.particles);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            view_format: plan.view_format,
            depth,
            toon,
            particles,
            width,
            height,
            clear_color: wgpu::Color::TRANSPARENT,
            material_rgb: setup.material_rgb,
            particle_half_extent: setup.particle_half_extent,
            view: Mat4::IDENTITY,
            proj: Mat4::IDENTITY,
        })
    }

    pub fn set_camera(&mut self, view: Mat4, proj: Mat4) {
        self.view = view;
        self.proj = proj;
    }

    /// Upload model matrices, one per section object in setup order.
    pub fn set_object_transforms(&mut self, models: &[Mat4]) {
        for (binding, model) in self.toon.objects.iter().zip(models) {
            let u = ObjectUniforms {
                model: model.to_cols_array_2d(),
            };
            self.queue
                .write_buffer(&binding.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }

    /// Shared by the toon material and the particles.
    pub fn set_material_color(&mut self, linear_rgb: [f32; 3]) {
        self.material_rgb = linear_rgb;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    /// Re-apply the current configuration after a lost or outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let [r, g, b] = self.material_rgb;
        let light = Vec3::from_array(LIGHT_DIRECTION).normalize();
        let scene = SceneUniforms {
            view_proj: (self.proj * self.view).to_cols_array_2d(),
            light: [light.x, light.y, light.z, LIGHT_INTENSITY],
            color: [r, g, b, 1.0],
        };
        self.queue
            .write_buffer(&self.toon.scene_buffer, 0, bytemuck::bytes_of(&scene));
        let pu = ParticleUniforms {
            view: self.view.to_cols_array_2d(),
            proj: self.proj.to_cols_array_2d(),
            color: [r, g, b, 1.0],
            size: [self.particle_half_extent, 0.0, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.particles.uniform_buffer, 0, bytemuck::bytes_of(&pu));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.view_format),
                ..Default::default()
            });
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.toon.pipeline);
            rpass.set_bind_group(0, &self.toon.scene_bind_group, &[]);
            for object in &self.toon.objects {
                rpass.set_bind_group(1, &object.bind_group, &[]);
                rpass.set_vertex_buffer(0, object.mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(
                    object.mesh.index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                rpass.draw_indexed(0..object.mesh.index_count, 0, 0..1);
            }

            if self.particles.count > 0 {
                rpass.set_pipeline(&self.particles.pipeline);
                rpass.set_bind_group(0, &self.particles.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.particles.instance_buffer.slice(..));
                rpass.draw(0..6, 0..self.particles.count);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
