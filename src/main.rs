use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use glam::Vec3;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use first_person_camera::cli::Cli;
use first_person_camera::core::{Interval, SoftwareMatrixStack, WinitController};
use first_person_camera::traits::{CameraView, InputSource, Key};
use first_person_camera::{draw_in_view, CameraSettings, CameraState, FrameInput};

const POSE_LOG_INTERVAL: f32 = 1.0;
const START_POSITION: Vec3 = Vec3::new(0.0, 0.0, -5.0);

struct App {
    cli: Cli,
    settings: CameraSettings,
    window: Option<Arc<Window>>,
    input: WinitController,
    camera: Option<CameraState>,
    stack: SoftwareMatrixStack,
    pose_log: Interval,
}

impl App {
    fn new(cli: Cli, settings: CameraSettings) -> Self {
        let size = (cli.width, cli.height);
        Self {
            cli,
            settings,
            window: None,
            input: WinitController::new(size, false),
            camera: None,
            stack: SoftwareMatrixStack::new(size.0, size.1),
            pose_log: Interval::new(POSE_LOG_INTERVAL),
        }
    }

    fn frame(&mut self) {
        let (Some(window), Some(camera)) = (&self.window, self.camera.as_mut()) else {
            return;
        };

        self.input.begin_frame();

        if self.input.is_key_pressed(Key::F1) {
            camera.settings.allow_flight = !camera.settings.allow_flight;
            log::info!("Flight mode: {}", camera.settings.allow_flight);
        }
        if self.input.is_key_pressed(Key::F2) {
            let use_mouse = !camera.settings.use_mouse;
            camera.set_mouse_capture(use_mouse, &self.input, window.as_ref());
            log::info!("Mouse look: {use_mouse}");
        }

        let frame = FrameInput::poll(&camera.settings.controls, &self.input);
        camera.update(&frame, window.as_ref());

        let view_proj = draw_in_view(Some(&*camera), &mut self.stack, frame.screen_size, |stack| {
            stack.view_projection()
        });

        if self.pose_log.tick(frame.elapsed) {
            let angles = camera.view_angles();
            log::info!(
                "pos {:.2?} eye {:.2?} yaw {:.1} pitch {:.1} forward {:.2?}",
                camera.position(),
                camera.view_camera.position,
                angles.x.to_degrees(),
                angles.y.to_degrees(),
                camera.forward(),
            );
            log::debug!("view-projection {view_proj:?}");
        }

        self.input.end_frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("First-Person Camera")
                .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.input = WinitController::new((size.width, size.height), window.has_focus());
        self.stack = SoftwareMatrixStack::new(size.width, size.height);
        self.camera = Some(CameraState::with_settings(
            self.settings.clone(),
            self.cli.fov,
            START_POSITION,
            &self.input,
            window.as_ref(),
        ));
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        self.input.process_window_event(&event);

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                first_person_camera::camera::resize_view(self.camera.as_mut(), (size.width, size.height));
                self.stack = SoftwareMatrixStack::new(size.width, size.height);
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        self.input.process_device_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = cli.settings().context("Failed to load camera settings")?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, settings);

    log::info!("Controls: WASD move, E/Q up/down, arrows or mouse look, Shift sprint, F1 flight, F2 mouse, Escape quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
