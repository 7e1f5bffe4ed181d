//! Core application state and lifecycle.

use kurbo::Size;
use peniko::Color;
use std::path::Path;
use std::sync::Arc;
use stretchbadge_core::{BadgeConfig, ConfigResult, InteractionController, PointerEvent};
use stretchbadge_render::{FillStyle, RenderContext, RenderResult, Renderer, RendererError, VelloRenderer};
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use crate::event_handler::EventHandler;
use crate::overlays::{BurstOverlay, LabelOverlay, WindowHost};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub badge: BadgeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Stretch Badge".to_string(),
            width: 480,
            height: 640,
            background_color: Color::from_rgba8(250, 250, 250, 255),
            badge: BadgeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default window settings with the badge config read from `path`.
    pub fn with_badge_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Ok(Self {
            badge: BadgeConfig::from_path(path)?,
            ..Self::default()
        })
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    badge_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // Badge
    controller: InteractionController,
    label: LabelOverlay,
    burst: BurstOverlay,

    // Event handling
    event_handler: EventHandler,
}

impl AppState {
    /// Feed one pointer event to the controller.
    fn dispatch(&mut self, event: PointerEvent) {
        let mut host = WindowHost {
            window: &self.window,
            label: &mut self.label,
            burst: &mut self.burst,
        };
        let transition = self.controller.handle_pointer_event(event, &mut host);
        log::trace!("{:?} -> {:?}", event, transition);
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
        }
    }

    /// Run the application until the window closes.
    pub async fn run(config: AppConfig) {
        let event_loop = match EventLoop::new() {
            Ok(event_loop) => event_loop,
            Err(e) => {
                log::error!("Failed to create event loop: {}", e);
                return;
            }
        };
        let mut app = App::with_config(config);
        if let Err(e) = event_loop.run_app(&mut app) {
            log::error!("Event loop error: {}", e);
        }
    }

    /// Finish initialization after surface is created.
    fn finish_init(&mut self, window: Arc<Window>, surface: RenderSurface<'static>) -> RenderResult<()> {
        let render_cx = self
            .render_cx
            .as_ref()
            .ok_or_else(|| RendererError::InitFailed("RenderContext not initialized".to_string()))?;
        let device = &render_cx.devices[surface.dev_id].device;

        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(format!("{:?}", e)))?;

        // Vello renders to Rgba8Unorm; the surface format may be Bgra8Unorm
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        let badge = &self.config.badge;
        let controller = InteractionController::new(badge)
            .map_err(|e| RendererError::InitFailed(format!("badge config: {}", e)))?;
        log::info!(
            "Stretch badge initialized - {}x{}, anchor {:?}",
            surface.config.width,
            surface.config.height,
            badge.anchor
        );

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            badge_renderer: VelloRenderer::new(),
            texture_blitter,
            controller,
            label: LabelOverlay::new(badge.label_text.clone(), badge.anchor),
            burst: BurstOverlay::new(badge.min_radius),
            event_handler: EventHandler::new(),
        });

        // Request initial redraw
        window.request_redraw();
        Ok(())
    }

    fn redraw(&mut self) -> RenderResult<()> {
        let Some(state) = &mut self.state else {
            return Ok(());
        };
        let Some(render_cx) = self.render_cx.as_ref() else {
            return Ok(());
        };

        let frame = {
            let mut host = WindowHost {
                window: &state.window,
                label: &mut state.label,
                burst: &mut state.burst,
            };
            state.controller.on_redraw(&mut host)
        };

        let width = state.surface.config.width;
        let height = state.surface.config.height;
        let style = self.config.badge.style;

        let render_ctx = RenderContext::new(&frame, Size::new(width as f64, height as f64))
            .with_scale_factor(state.window.scale_factor())
            .with_background(self.config.background_color)
            .with_fill(FillStyle::new(style.fill.into()));
        state.badge_renderer.build_scene(&render_ctx);

        // Overlays paint above the badge
        if state.label.visible {
            state.badge_renderer.render_label(
                state.label.center,
                &state.label.text,
                style.label_font_size,
                style.label_background.into(),
                style.label_text.into(),
            );
        }
        if let Some(progress) = state.burst.progress() {
            state
                .badge_renderer
                .render_burst(state.burst.center, state.burst.size, progress, style.fill.into());
            // keep animating until playback ends
            state.window.request_redraw();
        }

        let scene = state.badge_renderer.take_scene();

        let device_handle = &render_cx.devices[state.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = state
            .surface
            .surface
            .get_current_texture()
            .map_err(|e| RendererError::Surface(format!("{:?}", e)))?;

        let params = RenderParams {
            base_color: self.config.background_color,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello's compute shaders need a StorageBinding Rgba8Unorm target
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view = render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        state
            .vello_renderer
            .render_to_texture(device, queue, &scene, &render_texture_view, &params)
            .map_err(|e| RendererError::RenderFailed(format!("{:?}", e)))?;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        let mut blit_encoder = device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
            label: Some("blit encoder"),
        });
        state
            .texture_blitter
            .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
        queue.submit(std::iter::once(blit_encoder.finish()));

        surface_texture.present();
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self.render_cx.get_or_insert_with(vello::util::RenderContext::new);
        let surface = match pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        )) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {:?}", e);
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = self.finish_init(window, surface) {
            log::error!("{}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    log::warn!("Frame dropped: {}", e);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = state.event_handler.cursor_moved(position.x, position.y);
                state.dispatch(event);
            }

            WindowEvent::MouseInput { state: btn_state, button, .. } => {
                if let Some(event) = state.event_handler.mouse_input(btn_state, button) {
                    state.dispatch(event);
                }
            }

            WindowEvent::Touch(touch) => {
                if let Some(event) =
                    state
                        .event_handler
                        .touch(touch.id, touch.phase, touch.location.x, touch.location.y)
                {
                    state.dispatch(event);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && event.logical_key == Key::Named(NamedKey::Escape) {
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}
