//! wgpu-based renderer for Judo Dance.
//!
//! Screens are laid out with egui (see `crate::ui`); this module owns the
//! GPU surface and paints the tessellated egui output onto it.

pub mod gpu;
pub mod metrics;
pub mod textures;

use crate::core::error::Result;
use egui_wgpu::ScreenDescriptor;
use std::sync::Arc;
use winit::window::Window;

use gpu::GpuContext;

/// Tessellated egui output for one frame.
pub struct FrameOutput {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

/// Main renderer struct.
pub struct Renderer {
    ctx: GpuContext,
    egui_renderer: egui_wgpu::Renderer,
    metrics: RenderMetrics,
}

impl Renderer {
    /// Create a new renderer for the given window.
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let ctx = GpuContext::new(window).await?;
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.format(), None, 1);

        Ok(Self {
            ctx,
            egui_renderer,
            metrics: RenderMetrics::new(),
        })
    }

    /// Handle window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.ctx.resize(width, height);
    }

    /// Get current surface size.
    pub fn size(&self) -> (u32, u32) {
        self.ctx.size()
    }

    pub fn metrics(&self) -> &RenderMetrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut RenderMetrics {
        &mut self.metrics
    }

    /// Clear the surface and paint one frame of egui output.
    pub fn render(&mut self, frame: &FrameOutput) -> std::result::Result<(), wgpu::SurfaceError> {
        let device = &self.ctx.device;
        let queue = &self.ctx.queue;

        for (id, image_delta) in &frame.textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

        let (width, height) = self.ctx.size();
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: frame.pixels_per_point,
        };

        let user_buffers = self.egui_renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            &frame.paint_jobs,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer
                .render(&mut render_pass, &frame.paint_jobs, &screen_descriptor);
        }

        queue.submit(
            user_buffers
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );
        output.present();

        for id in &frame.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        Ok(())
    }
}

// Re-export commonly used types
pub use metrics::RenderMetrics;
pub use textures::TextureCache;
