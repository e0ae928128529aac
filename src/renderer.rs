use std::sync::Arc;

use anyhow::Result;
use bytemuck::Zeroable;
use glam::Vec2;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::core::GpuContext;
use crate::overlay::{self, Overlay, Stats};
use crate::scene::Scene;
use crate::types::{PuffInstance, SceneUniform, StarInstance};

const STAR_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x3];

const PUFF_ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32,
    2 => Float32,
    3 => Float32,
    4 => Float32,
    5 => Float32,
];

/// Stars add light on top of whatever is behind them
const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::SrcAlpha,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::Zero,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

/// Instanced sprites sharing the scene uniform
struct SpriteBatch {
    pipeline: wgpu::RenderPipeline,
    instances: Option<wgpu::Buffer>,
    count: u32,
}

impl SpriteBatch {
    fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if let Some(instances) = &self.instances {
            pass.set_pipeline(&self.pipeline);
            pass.set_vertex_buffer(0, instances.slice(..));
            pass.draw(0..6, 0..self.count);
        }
    }
}

/// Draws the sky and cloud with wgpu and the billboards and diagnostics with egui
pub struct SceneRenderer {
    gpu: GpuContext,
    clear_color: wgpu::Color,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    stars: SpriteBatch,
    cloud: SpriteBatch,
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
}

impl SceneRenderer {
    pub async fn new(window: Arc<Window>, scene: &Scene, config: &SceneConfig) -> Result<Self> {
        let gpu = GpuContext::for_window(window.clone()).await?;
        let device = gpu.device();

        let initial = SceneUniform::zeroed();
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Scene Uniform Buffer"),
            contents: bytemuck::cast_slice(&[initial]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("scene_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("scene_bind_group"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let stars = SpriteBatch {
            pipeline: Self::create_sprite_pipeline(
                device,
                &pipeline_layout,
                gpu.format(),
                "Star",
                include_str!("stars.wgsl"),
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<StarInstance>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &STAR_ATTRIBUTES,
                },
                ADDITIVE,
            ),
            instances: Self::create_instance_buffer(
                device,
                "Star Instances",
                scene.stars().instances(),
            ),
            count: scene.stars().len() as u32,
        };

        let cloud = SpriteBatch {
            pipeline: Self::create_sprite_pipeline(
                device,
                &pipeline_layout,
                gpu.format(),
                "Cloud",
                include_str!("cloud.wgsl"),
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<PuffInstance>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &PUFF_ATTRIBUTES,
                },
                wgpu::BlendState::ALPHA_BLENDING,
            ),
            instances: Self::create_instance_buffer(
                device,
                "Puff Instances",
                scene.cloud().instances(),
            ),
            count: scene.cloud().instances().len() as u32,
        };

        let egui_ctx = egui::Context::default();
        overlay::install_font(&egui_ctx, config.text.font_path.as_deref())?;
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            gpu.format(),
            egui_wgpu::RendererOptions::default(),
        );

        let [r, g, b] = config.background.linear();
        let clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        };

        log::info!(
            "Renderer initialized: {} stars, {} cloud puffs",
            stars.count,
            cloud.count
        );

        Ok(Self {
            gpu,
            clear_color,
            uniform_buffer,
            bind_group,
            stars,
            cloud,
            egui_renderer,
            egui_state,
            egui_ctx,
        })
    }

    fn create_instance_buffer<T: bytemuck::Pod>(
        device: &wgpu::Device,
        label: &str,
        instances: &[T],
    ) -> Option<wgpu::Buffer> {
        if instances.is_empty() {
            return None;
        }
        Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(instances),
            usage: wgpu::BufferUsages::VERTEX,
        }))
    }

    fn create_sprite_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        surface_format: wgpu::TextureFormat,
        name: &str,
        source: &str,
        instance_layout: wgpu::VertexBufferLayout,
        blend: wgpu::BlendState,
    ) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&format!("{} Shader", name)),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{} Pipeline", name)),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[instance_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(blend),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        self.gpu.size()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Recover from a lost or outdated surface
    pub fn reconfigure(&self) {
        self.gpu.reconfigure();
    }

    /// Feed a window event to egui; true when egui used it
    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }

    pub fn render(
        &mut self,
        window: &Window,
        scene: &mut Scene,
        camera: &Camera,
        overlay: &Overlay,
        stats: Stats,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        let (width, height) = self.gpu.size();
        let uniform = scene.uniform(camera, Vec2::new(width as f32, height as f32));
        self.gpu
            .queue()
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));

        let output = self.gpu.surface().get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Sky Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            self.stars.draw(&mut render_pass);
            self.cloud.draw(&mut render_pass);
        }

        let raw_input = self.egui_state.take_egui_input(window);
        let full_output = self
            .egui_ctx
            .run(raw_input, |ctx| overlay.draw(ctx, scene, camera, stats));

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(self.gpu.device(), self.gpu.queue(), *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: window.scale_factor() as f32,
        };

        let egui_commands = self.egui_renderer.update_buffers(
            self.gpu.device(),
            self.gpu.queue(),
            &mut encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Billboard Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.gpu.queue().submit(
            egui_commands
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        output.present();

        Ok(())
    }
}
