/*!
Window creation and the render loop.

A demo implements `ApplicationContext` and hands control to `State::run_loop`. The loop redraws
continuously: every frame calls `update` and then `draw_frame`. Key presses are forwarded to
`handle_key`, except `Escape` which closes the window. Resizing the window resizes the surface
and calls `reshape`.

*/
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

use glium::Display;
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentContext, Version};
use glutin::display::{Display as GlutinDisplay, DisplayApiPreference, GetGlDisplay};
use glutin::prelude::*;
use glutin::surface::{SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use raw_window_handle::{HasRawDisplayHandle, HasRawWindowHandle, RawWindowHandle};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{EventLoopBuilder, EventLoopWindowTarget};
use winit::window::{Window, WindowBuilder};

use crate::error::DemoError;

/// Parameters of the window and of its OpenGL context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    /// Initial inner width in physical pixels.
    pub width: u32,
    /// Initial inner height in physical pixels.
    pub height: u32,
    /// Title of the window.
    pub title: String,
    /// Requested number of multisampling samples. Zero disables multisampling.
    pub samples: u8,
    /// Whether buffer swaps wait for the vertical blank.
    pub vsync: bool,
    /// Requested OpenGL core profile version.
    pub gl_version: (u8, u8),
    /// Whether to ask for a debug context.
    pub debug: bool,
    /// Bits of the depth buffer.
    pub depth_bits: u8,
}

impl WindowConfig {
    /// Default parameters with the given title: a 1024x768 window with a 4x multisampled
    /// OpenGL 4.1 core debug context and a 24 bits depth buffer.
    pub fn new(title: &str) -> WindowConfig {
        WindowConfig {
            width: 1024,
            height: 768,
            title: title.to_owned(),
            samples: 4,
            vsync: true,
            gl_version: (4, 1),
            debug: true,
            depth_bits: 24,
        }
    }

    /// Sets the title of the window.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    /// Requests the window to be of a certain size.
    pub fn with_inner_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the number of multisampling samples.
    pub fn with_samples(mut self, samples: u8) -> Self {
        self.samples = samples;
        self
    }

    /// Enables or disables vsync.
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Sets the OpenGL version to request.
    pub fn with_gl_version(mut self, major: u8, minor: u8) -> Self {
        self.gl_version = (major, minor);
        self
    }

    /// Enables or disables the debug context flag.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Returns the width divided by the height.
    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.width, self.height)
    }

    fn config_template(&self, samples: u8) -> ConfigTemplateBuilder {
        let template = ConfigTemplateBuilder::new().with_depth_size(self.depth_bits);

        if samples > 0 {
            template.with_multisampling(samples)
        } else {
            template
        }
    }
}

impl Default for WindowConfig {
    fn default() -> WindowConfig {
        WindowConfig::new("glw")
    }
}

/// Returns `width / height`, or `1.0` while the window is minimized.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

/// Picks the candidate with the most multisampling samples, the first one on ties.
///
/// Returns `None` if there is no candidate at all.
pub fn most_samples<C, I, F>(candidates: I, num_samples: F) -> Option<C>
    where I: IntoIterator<Item = C>, F: Fn(&C) -> u8
{
    candidates.into_iter()
        .reduce(|best, candidate| {
            if num_samples(&candidate) > num_samples(&best) { candidate } else { best }
        })
}

/// Error that can happen while opening the window.
#[derive(Debug)]
pub enum CreationError {
    /// The windowing system refused to create the window.
    Window(Box<dyn Error>),

    /// The display offers no GL config with the requested depth buffer, even without
    /// multisampling.
    NoConfig,

    /// None of the requested OpenGL contexts could be created, or it couldn't be made current.
    Context(glutin::error::Error),

    /// The window has a zero width or height.
    ZeroSize,

    /// The OpenGL implementation is too old for glium.
    IncompatibleOpenGl(glium::IncompatibleOpenGl),
}

impl fmt::Display for CreationError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match *self {
            CreationError::Window(ref err) => write!(fmt, "{}", err),
            CreationError::NoConfig => fmt.write_str("No suitable GL config was found"),
            CreationError::Context(ref err) => write!(fmt, "{}", err),
            CreationError::ZeroSize => fmt.write_str("The window has a zero dimension"),
            CreationError::IncompatibleOpenGl(ref err) => write!(fmt, "{}", err),
        }
    }
}

impl Error for CreationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            CreationError::Context(ref err) => Some(err),
            CreationError::IncompatibleOpenGl(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<glutin::error::Error> for CreationError {
    #[inline]
    fn from(err: glutin::error::Error) -> CreationError {
        CreationError::Context(err)
    }
}

impl From<glium::IncompatibleOpenGl> for CreationError {
    #[inline]
    fn from(err: glium::IncompatibleOpenGl) -> CreationError {
        CreationError::IncompatibleOpenGl(err)
    }
}

/// The callbacks of a demo.
pub trait ApplicationContext: Sized {
    /// Title used by `State::run_loop`.
    const WINDOW_TITLE: &'static str;

    /// Uploads the static buffers and loads the programs. Called once the context is current.
    fn new(display: &Display<WindowSurface>) -> Result<Self, DemoError>;

    /// Renders one frame.
    fn draw_frame(&mut self, display: &Display<WindowSurface>) -> Result<(), DemoError>;

    /// Advances the animation by one frame. Called right before `draw_frame`.
    fn update(&mut self) { }

    /// Called for every key press except `Escape`.
    fn handle_key(&mut self, _key: VirtualKeyCode) { }

    /// Called at start-up and whenever the framebuffer changes size.
    fn reshape(&mut self, _width: u32, _height: u32) { }
}

/// An open window, its glium display and the demo drawing into it.
pub struct State<T> {
    /// The glium display of the window.
    pub display: Display<WindowSurface>,
    /// The window itself.
    pub window: Window,
    /// The demo.
    pub context: T,
}

impl<T: ApplicationContext + 'static> State<T> {
    /// Opens the window described by `config` and builds the demo.
    pub fn new<W>(event_loop: &EventLoopWindowTarget<W>, config: &WindowConfig)
                  -> Result<Self, DemoError>
    {
        let window_builder = WindowBuilder::new()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(true);
        let (window, gl_config) = open_window(event_loop, window_builder, config)?;

        let raw_window_handle = window.raw_window_handle();
        let not_current_gl_context = create_context(&gl_config, raw_window_handle, config)?;

        let (width, height): (u32, u32) = window.inner_size().into();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).ok_or(CreationError::ZeroSize)?,
            NonZeroU32::new(height).ok_or(CreationError::ZeroSize)?,
        );

        let surface = unsafe { gl_config.display().create_window_surface(&gl_config, &attrs) }
            .map_err(CreationError::from)?;
        let current_context = not_current_gl_context.make_current(&surface)
            .map_err(CreationError::from)?;

        let interval = if config.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(err) = surface.set_swap_interval(&current_context, interval) {
            log::warn!("Couldn't set the swap interval: {}", err);
        }

        let display = Display::from_context_surface(current_context, surface)
            .map_err(CreationError::from)?;

        log::info!("{}", display.get_opengl_renderer_string());
        log::info!("{}", display.get_opengl_version_string());

        Self::from_display_window(display, window)
    }

    /// Builds the demo for an already created display.
    pub fn from_display_window(display: Display<WindowSurface>, window: Window)
                               -> Result<Self, DemoError>
    {
        let mut context = T::new(&display)?;
        let (width, height) = display.get_framebuffer_dimensions();
        context.reshape(width, height);

        Ok(Self { display, window, context })
    }

    /// Opens a default window titled `T::WINDOW_TITLE` and runs the demo until it is closed.
    pub fn run_loop() {
        Self::run_loop_with(WindowConfig::new(T::WINDOW_TITLE))
    }

    /// Opens a window described by `config` and runs the demo until it is closed.
    pub fn run_loop_with(config: WindowConfig) {
        let event_loop = EventLoopBuilder::new().build();
        let mut state: Option<State<T>> = None;

        event_loop.run(move |event, window_target, control_flow| {
            match event {
                // Delivered once at start-up on desktop platforms, and again after a suspend
                // on Android where the context can be lost.
                Event::Resumed => match State::new(window_target, &config) {
                    Ok(new_state) => state = Some(new_state),
                    Err(err) => {
                        log::error!("{}", err);
                        control_flow.set_exit();
                    },
                },
                Event::Suspended => state = None,
                Event::RedrawRequested(_) => {
                    if let Some(state) = &mut state {
                        state.context.update();
                        if let Err(err) = state.context.draw_frame(&state.display) {
                            log::error!("{}", err);
                            control_flow.set_exit();
                        }
                    }
                },
                // Asking for a new frame once the current one is out keeps the loop running.
                Event::RedrawEventsCleared => {
                    if let Some(state) = &state {
                        state.window.request_redraw();
                    }
                },
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => control_flow.set_exit(),
                    WindowEvent::Resized(new_size) => {
                        if let Some(state) = &mut state {
                            state.display.resize(new_size.into());
                            state.context.reshape(new_size.width, new_size.height);
                        }
                    },
                    WindowEvent::KeyboardInput {
                        input: KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                        ..
                    } => {
                        log::debug!("Key pressed: {:?}", key);

                        if key == VirtualKeyCode::Escape {
                            control_flow.set_exit();
                        } else if let Some(state) = &mut state {
                            state.context.handle_key(key);
                        }
                    },
                    _ => (),
                },
                _ => (),
            };
        });
    }
}

/// Creates the GL display, picks a config for it and builds the window to match.
///
/// WGL needs the window before the display, the other platforms need the config before the
/// window so that its visual matches.
#[cfg(target_os = "windows")]
fn open_window<W>(event_loop: &EventLoopWindowTarget<W>, window_builder: WindowBuilder,
                  config: &WindowConfig) -> Result<(Window, Config), CreationError>
{
    let window = window_builder.build(event_loop)
        .map_err(|err| CreationError::Window(Box::new(err)))?;
    let raw_window_handle = window.raw_window_handle();

    let preference = DisplayApiPreference::Wgl(Some(raw_window_handle));
    let display = unsafe { GlutinDisplay::new(event_loop.raw_display_handle(), preference)? };
    let gl_config = choose_config(&display, config, Some(raw_window_handle))?;

    Ok((window, gl_config))
}

#[cfg(not(target_os = "windows"))]
fn open_window<W>(event_loop: &EventLoopWindowTarget<W>, window_builder: WindowBuilder,
                  config: &WindowConfig) -> Result<(Window, Config), CreationError>
{
    #[cfg(target_os = "macos")]
    let preference = DisplayApiPreference::Cgl;
    #[cfg(not(target_os = "macos"))]
    let preference = DisplayApiPreference::Egl;

    let display = unsafe { GlutinDisplay::new(event_loop.raw_display_handle(), preference)? };
    let gl_config = choose_config(&display, config, None)?;

    let window = glutin_winit::finalize_window(event_loop, window_builder, &gl_config)
        .map_err(|err| CreationError::Window(Box::new(err)))?;

    Ok((window, gl_config))
}

/// Finds the config with the most samples. Multisampling is only a hint: if no config offers
/// it, the search is repeated without.
fn choose_config(display: &GlutinDisplay, config: &WindowConfig,
                 raw_window_handle: Option<RawWindowHandle>) -> Result<Config, CreationError>
{
    let template = |samples| {
        let template = config.config_template(samples);
        let template = match raw_window_handle {
            Some(handle) => template.compatible_with_native_window(handle),
            None => template,
        };
        template.build()
    };

    let configs = unsafe { display.find_configs(template(config.samples))? };
    if let Some(gl_config) = most_samples(configs, |candidate| candidate.num_samples()) {
        return Ok(gl_config);
    }

    if config.samples > 0 {
        log::warn!("No GL config with {}x multisampling, falling back to none", config.samples);

        let configs = unsafe { display.find_configs(template(0))? };
        if let Some(gl_config) = most_samples(configs, |candidate| candidate.num_samples()) {
            return Ok(gl_config);
        }
    }

    Err(CreationError::NoConfig)
}

/// Creates a context for the requested core profile version, falling back to whatever the
/// driver offers by default and finally to OpenGL ES.
fn create_context(gl_config: &Config, raw_window_handle: RawWindowHandle, config: &WindowConfig)
                  -> Result<NotCurrentContext, CreationError>
{
    let (major, minor) = config.gl_version;
    let requested = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
        .with_profile(GlProfile::Core)
        .with_debug(config.debug)
        .build(Some(raw_window_handle));
    let default = ContextAttributesBuilder::new().build(Some(raw_window_handle));
    let gles = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::Gles(None))
        .build(Some(raw_window_handle));

    let display = gl_config.display();

    unsafe {
        display.create_context(gl_config, &requested)
            .or_else(|err| {
                log::warn!("OpenGL {}.{} core context unavailable: {}", major, minor, err);
                display.create_context(gl_config, &default)
            })
            .or_else(|_| display.create_context(gl_config, &gles))
            .map_err(CreationError::from)
    }
}
