//! Windowed game loop
//!
//! Each redraw is one frame: poll the pad, translate keyboard and window
//! events, run the session frame, then draw the resulting state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use egui_winit::State as EguiWinitState;
use rand_chacha::ChaCha8Rng;
use winit::{
    event::{ElementState, Event as WindowLoopEvent, WindowEvent},
    event_loop::EventLoop,
    window::{Fullscreen, WindowBuilder},
};

use crate::audio::RodioPlayer;
use crate::core::clock::SystemClock;
use crate::core::error::{JudoError, Result};
use crate::game::{Event, GameSession};
use crate::input::{is_quit_key, PadInput};
use crate::renderer::{FrameOutput, Renderer};
use crate::ui::GameScreen;

/// How often frame statistics are logged
const METRICS_INTERVAL: Duration = Duration::from_secs(10);

/// Everything the window loop needs, already validated
pub struct App {
    pub session: GameSession<SystemClock, ChaCha8Rng, RodioPlayer>,
    pub pad: PadInput,
    pub screen: GameScreen,
    pub fullscreen: bool,
}

impl App {
    /// Open the window and run until the player quits
    pub fn run(self) -> Result<()> {
        let App {
            mut session,
            mut pad,
            mut screen,
            fullscreen,
        } = self;

        let event_loop = EventLoop::new().map_err(|e| JudoError::Window(e.to_string()))?;

        let mut builder = WindowBuilder::new()
            .with_title("Judo Dance")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
        if fullscreen {
            builder = builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        let window = Arc::new(
            builder
                .build(&event_loop)
                .map_err(|e| JudoError::Window(e.to_string()))?,
        );

        let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;

        let egui_ctx = egui::Context::default();
        let mut egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &*window,
            None,
            None,
        );

        let mut pending: Vec<Event> = Vec::new();
        let mut last_metrics_log = Instant::now();

        event_loop
            .run(move |event, elwt| match event {
                WindowLoopEvent::WindowEvent { ref event, .. } => {
                    // Redraws are requested every AboutToWait, so egui's repaint hint is unused.
                    let _response = egui_state.on_window_event(&window, event);

                    match event {
                        WindowEvent::CloseRequested => {
                            pending.push(Event::ReceivedQuit);
                        }

                        WindowEvent::Resized(size) => {
                            renderer.resize(size.width, size.height);
                        }

                        WindowEvent::KeyboardInput {
                            event: key_event, ..
                        } => {
                            if key_event.state == ElementState::Pressed
                                && is_quit_key(key_event.physical_key)
                            {
                                pending.push(Event::ReceivedQuit);
                            }
                        }

                        WindowEvent::RedrawRequested => {
                            renderer.metrics_mut().begin_frame();

                            pending.extend(pad.poll());
                            let handled = session.frame(pending.drain(..));
                            renderer.metrics_mut().record_events(handled);

                            if session.received_quit() {
                                tracing::info!("Quitting with score {}", session.state().score);
                                elwt.exit();
                                return;
                            }

                            let raw_input = egui_state.take_egui_input(&window);
                            let full_output = egui_ctx.run(raw_input, |ctx| {
                                screen.draw(ctx, session.state(), session.database());
                            });
                            egui_state
                                .handle_platform_output(&window, full_output.platform_output);

                            let frame = FrameOutput {
                                paint_jobs: egui_ctx
                                    .tessellate(full_output.shapes, full_output.pixels_per_point),
                                textures_delta: full_output.textures_delta,
                                pixels_per_point: full_output.pixels_per_point,
                            };

                            match renderer.render(&frame) {
                                Ok(()) => {}
                                Err(wgpu::SurfaceError::Lost) => {
                                    let (w, h) = renderer.size();
                                    renderer.resize(w, h);
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => {
                                    tracing::error!("Out of GPU memory!");
                                    elwt.exit();
                                }
                                Err(e) => {
                                    tracing::warn!("Render error: {:?}", e);
                                }
                            }

                            renderer.metrics_mut().end_frame();

                            if last_metrics_log.elapsed() >= METRICS_INTERVAL {
                                let metrics = renderer.metrics();
                                tracing::debug!(
                                    "{:.1} FPS, max frame {:.1}ms, max {} events/frame, {} textures",
                                    metrics.fps(),
                                    metrics.max_frame_time_ms(),
                                    metrics.max_events_per_frame,
                                    screen.textures().len()
                                );
                                last_metrics_log = Instant::now();
                            }
                        }

                        _ => {}
                    }
                }

                WindowLoopEvent::AboutToWait => {
                    window.request_redraw();
                }

                _ => {}
            })
            .map_err(|e| JudoError::Window(e.to_string()))
    }
}
