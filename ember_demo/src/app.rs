//! Window, GL context, and event plumbing.

use std::ffi::CString;
use std::num::NonZeroU32;
use std::sync::Arc;

use ember_renderer::glam::Vec3;
use ember_renderer::{gfx_error, gfx_info, gfx_warn, Renderer};
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version};
use glutin::display::{Display, GetGlDisplay, GlDisplay};
use glutin::prelude::{GlSurface, NotCurrentGlContext};
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

use crate::assets;
use crate::gui::{self, GuiState};
use crate::input::{self, InputState};

type InitResult<T> = Result<T, Box<dyn std::error::Error>>;

const LOG_SOURCE: &str = "ember::demo::App";

/// Demo application: one window, one GL 4.6 context, one renderer
///
/// The window and everything hanging off its context are created in
/// `resumed` and live in [`WindowState`]; input and GUI state live on
/// the application itself so they survive a suspend/resume cycle.
pub struct App {
    state: Option<WindowState>,
    input: InputState,
    gui_state: GuiState,
}

struct WindowState {
    window: Window,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    egui_glow: EguiGlow,
    renderer: Renderer,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: None,
            input: InputState::default(),
            gui_state: GuiState::default(),
        }
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

        match WindowState::new(event_loop) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(err) => {
                gfx_error!(LOG_SOURCE, "initialization failed: {}", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        let response = state.egui_glow.on_window_event(&state.window, &event);
        if response.repaint {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let (Some(width), Some(height)) =
                    (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                {
                    state.surface.resize(&state.context, width, height);
                    state
                        .renderer
                        .set_viewport(size.width as i32, size.height as i32);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if state.egui_glow.egui_ctx.wants_keyboard_input() || response.consumed {
                    self.input.clear_keys();
                } else if let PhysicalKey::Code(code) = event.physical_key {
                    self.input.handle_key(code, event.state);
                }
            }

            WindowEvent::MouseInput {
                button,
                state: button_state,
                ..
            } => {
                if !state.egui_glow.egui_ctx.wants_pointer_input() {
                    self.input.handle_mouse_button(button, button_state);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some((dx, dy)) = self
                    .input
                    .handle_cursor_moved(position.x as f32, position.y as f32)
                {
                    let camera = state.renderer.camera_mut();
                    camera.rotate_yaw(dx * self.gui_state.sensitivity);
                    camera.rotate_pitch(dy * self.gui_state.sensitivity);
                }
            }

            WindowEvent::RedrawRequested => {
                state.redraw(&self.input, &mut self.gui_state);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = self.state.as_ref() {
            state.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = self.state.as_mut() {
            state.egui_glow.destroy();
        }
        gfx_info!(LOG_SOURCE, "shutting down");
    }
}

impl WindowState {
    fn new(event_loop: &ActiveEventLoop) -> InitResult<Self> {
        let window_attributes = Window::default_attributes()
            .with_title("Renderer")
            .with_inner_size(LogicalSize::new(720.0, 600.0));

        let template = ConfigTemplateBuilder::new().with_depth_size(24);
        let display_builder =
            DisplayBuilder::new().with_window_attributes(Some(window_attributes));

        let (window, gl_config) =
            display_builder.build(event_loop, template, pick_gl_config)?;
        let window = window.ok_or("display builder produced no window")?;
        let gl_display = gl_config.display();

        let raw_window_handle = window.window_handle()?.as_raw();
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(4, 6))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));

        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

        let surface_attributes =
            window.build_surface_attributes(SurfaceAttributesBuilder::default())?;
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes)? };
        let context = not_current.make_current(&surface)?;

        if let Err(err) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
            gfx_warn!(LOG_SOURCE, "unable to enable vsync: {}", err);
        }

        ember_gl::context::load_with(|symbol| load_gl_symbol(&gl_display, symbol));
        let glow_context =
            unsafe { glow::Context::from_loader_function(|symbol| load_gl_symbol(&gl_display, symbol)) };
        let egui_glow = EguiGlow::new(event_loop, Arc::new(glow_context), None, None, true);

        let vertex_src = assets::load_str("shaders/simple.vert")?;
        let fragment_src = assets::load_str("shaders/simple.frag")?;
        let mesh_obj = assets::load_str("models/cube.obj")?;

        let size = window.inner_size();
        let renderer = Renderer::new(
            size.width as i32,
            size.height as i32,
            &vertex_src,
            &fragment_src,
            &mesh_obj,
        )?;

        gfx_info!(
            LOG_SOURCE,
            "window ready: {}x{} GL 4.6 core",
            size.width,
            size.height
        );

        Ok(Self {
            window,
            surface,
            context,
            egui_glow,
            renderer,
        })
    }

    fn redraw(&mut self, input: &InputState, gui_state: &mut GuiState) {
        let keys = input.keys();
        if keys.any() && !self.egui_glow.egui_ctx.wants_keyboard_input() {
            let camera = self.renderer.camera_mut();
            let direction =
                input::movement_vector(keys, camera.forward(), camera.right(), camera.up());
            if direction != Vec3::ZERO {
                camera.offset_position(
                    direction * gui_state.move_speed * input.speed_multiplier(),
                );
            }
        }

        self.egui_glow
            .run(&self.window, |ctx| gui::draw(ctx, &mut self.renderer, gui_state));

        if let Err(err) = self.renderer.render() {
            gfx_error!(LOG_SOURCE, "render failed: {}", err);
        }
        self.egui_glow.paint(&self.window);

        if let Err(err) = self.surface.swap_buffers(&self.context) {
            gfx_error!(LOG_SOURCE, "swap failed: {}", err);
        }
    }
}

/// Prefer the config with the most MSAA samples
fn pick_gl_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, candidate| {
            if candidate.num_samples() > best.num_samples() {
                candidate
            } else {
                best
            }
        })
        .expect("no matching GL configs")
}

fn load_gl_symbol(display: &Display, symbol: &str) -> *const std::ffi::c_void {
    match CString::new(symbol) {
        Ok(symbol) => display.get_proc_address(&symbol),
        Err(_) => std::ptr::null(),
    }
}
