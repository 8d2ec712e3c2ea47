//! SDF-based WebGPU render pipeline
//!
//! Renders the whole canvas in one fullscreen pass: background plus the ball
//! as an anti-aliased circle.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::settings::Settings;
use crate::sim::SimState;

/// WebGPU where the browser has it, WebGL2 otherwise
pub const BACKENDS: wgpu::Backends = wgpu::Backends::BROWSER_WEBGPU.union(wgpu::Backends::GL);

/// Renderer setup failure
#[derive(Debug)]
pub enum RenderError {
    /// No WebGPU/WebGL adapter for the canvas
    Adapter(String),
    /// Adapter refused to create a device
    Device(String),
    /// Surface could not be created for the canvas
    Surface(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Adapter(msg) => write!(f, "No graphics adapter: {}", msg),
            RenderError::Device(msg) => write!(f, "Device request failed: {}", msg),
            RenderError::Surface(msg) => write!(f, "Surface creation failed: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

// ============================================================================
// GPU DATA STRUCTURES (must match ball.wgsl)
// ============================================================================

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
struct Globals {
    ball_color: [f32; 4], // offset 0
    background: [f32; 4], // offset 16
    resolution: [f32; 2], // offset 32
    center: [f32; 2],     // offset 40
    radius: f32,          // offset 48
    _pad: [f32; 3],       // pad to 64 bytes
}

impl Globals {
    fn new(state: &SimState, settings: &Settings, size: (u32, u32)) -> Self {
        Self {
            ball_color: settings.ball_rgba(),
            background: settings.background_rgba(),
            resolution: [size.0 as f32, size.1 as f32],
            center: [state.pos.x, state.pos.y],
            radius: settings.ball_radius,
            _pad: [0.0; 3],
        }
    }
}

// ============================================================================
// SDF RENDER STATE
// ============================================================================

pub struct SdfRenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,

    globals_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    pub size: (u32, u32),
}

impl SdfRenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<Self, RenderError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("sdf-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await
            .map_err(|e| RenderError::Device(e.to_string()))?;

        let surface_caps = surface.get_capabilities(adapter);
        log::debug!("Surface formats: {:?}", surface_caps.formats);

        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| RenderError::Surface("no supported formats".to_string()))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ball_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("ball.wgsl").into()),
        });

        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals"),
            contents: bytemuck::bytes_of(&Globals::new(
                &SimState::default(),
                &Settings::default(),
                (width, height),
            )),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sdf_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sdf_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sdf_pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sdf_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[], // No vertex buffers - fullscreen triangle
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            globals_buffer,
            bind_group,
            size: (width, height),
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Upload the ball state and draw one frame
    pub fn render(
        &mut self,
        state: &SimState,
        settings: &Settings,
    ) -> Result<(), wgpu::SurfaceError> {
        let globals = Globals::new(state, settings, self.size);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("sdf_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sdf_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::WHITE),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.draw(0..3, 0..1); // Fullscreen triangle
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_backends_include_webgl_fallback() {
        assert!(BACKENDS.contains(wgpu::Backends::BROWSER_WEBGPU));
        assert!(BACKENDS.contains(wgpu::Backends::GL));
    }

    #[test]
    fn test_globals_layout_matches_shader() {
        assert_eq!(std::mem::size_of::<Globals>(), 64);
        assert_eq!(std::mem::size_of::<Globals>() % 16, 0);
    }

    #[test]
    fn test_globals_from_state() {
        let state = SimState {
            pos: Vec2::new(275.0, 100.0),
            vel: Vec2::new(-5.0, 0.0),
            running: true,
        };
        let globals = Globals::new(&state, &Settings::default(), (280, 198));
        assert_eq!(globals.center, [275.0, 100.0]);
        assert_eq!(globals.resolution, [280.0, 198.0]);
        assert_eq!(globals.radius, 20.0);
        assert_eq!(globals.ball_color[3], 1.0);
    }
}
