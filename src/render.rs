use crate::core::{HeroCamera, SceneParams};
use glam::{EulerRot, Mat4, Vec3};
use web_sys as web;

mod cube;
mod helpers;
mod markers;
mod mesh;

use cube::{create_cube_resources, CubeResources, CubeUniforms};
use markers::{create_marker_resources, MarkerInstance, MarkerResources, MarkerUniforms};

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    cube: CubeResources,
    markers: MarkerResources,
    arms: [Mat4; mesh::ARMS_PER_MARKER],
    _depth: wgpu::Texture,
    depth_view: wgpu::TextureView,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // the page shows through wherever the cube is not drawn
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (depth, depth_view) = helpers::create_depth_texture(&device, width, height);
        let cube = create_cube_resources(&device, format);
        let markers = create_marker_resources(&device, format);
        log::info!(
            "[hero] gpu ready {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            cube,
            markers,
            arms: mesh::chevron_arms(),
            _depth: depth,
            depth_view,
            width,
            height,
        })
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
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
            let (depth, view) = helpers::create_depth_texture(&self.device, width, height);
            self._depth = depth;
            self.depth_view = view;
        }
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn write_uniforms(&self, scene: &SceneParams, camera: &HeroCamera) {
        let view_proj = camera.view_projection(self.aspect());
        let c = &scene.cube;
        let group = Mat4::from_translation(c.position)
            * Mat4::from_euler(EulerRot::XYZ, c.rotation.x, c.rotation.y, c.rotation.z);
        let model = group * Mat4::from_scale(Vec3::splat(c.scale));
        let u = &scene.uniforms;
        let cube = CubeUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            pointer_velocity: [u.pointer.x, u.pointer.y, u.velocity.x, u.velocity.y],
            params: [u.time, u.aspect, u.influence, u.opacity],
            extra: [u.intro, camera.eye.z, 0.0, 0.0],
        };
        self.queue
            .write_buffer(&self.cube.uniform_buffer, 0, bytemuck::bytes_of(&cube));

        let markers = MarkerUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            tint: mesh::marker_tint(u.opacity),
        };
        self.queue
            .write_buffer(&self.markers.uniform_buffer, 0, bytemuck::bytes_of(&markers));

        let instances: Vec<MarkerInstance> = scene
            .markers
            .iter()
            .flat_map(|m| {
                let base = group * Mat4::from_translation(m.position) * Mat4::from_scale(m.scale);
                self.arms.iter().map(move |arm| MarkerInstance {
                    model: (base * *arm).to_cols_array_2d(),
                })
            })
            .collect();
        self.queue.write_buffer(
            &self.markers.instance_buffer,
            0,
            bytemuck::cast_slice(&instances),
        );
    }

    pub fn render(
        &mut self,
        scene: &SceneParams,
        camera: &HeroCamera,
    ) -> Result<(), wgpu::SurfaceError> {
        self.write_uniforms(scene, camera);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("hero_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.cube.pipeline);
            rpass.set_bind_group(0, &self.cube.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.cube.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.cube.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..self.cube.index_count, 0, 0..1);

            rpass.set_pipeline(&self.markers.pipeline);
            rpass.set_bind_group(0, &self.markers.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.markers.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, self.markers.instance_buffer.slice(..));
            rpass.set_index_buffer(
                self.markers.index_buffer.slice(..),
                wgpu::IndexFormat::Uint16,
            );
            rpass.draw_indexed(
                0..self.markers.index_count,
                0,
                0..markers::MARKER_INSTANCES as u32,
            );
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
