/*!
# Ember Demo

Windowed demo for the ember renderer: loads a mesh and a shader pair,
then drives a fly camera with WASDQE + middle-mouse drag and exposes
camera and lighting parameters through an egui panel.
*/

mod app;
mod assets;
mod gui;
mod input;

use std::process::ExitCode;

use ember_renderer::{gfx_error, gfx_info};
use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::App;

fn main() -> ExitCode {
    gfx_info!("ember::demo", "starting");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            gfx_error!("ember::demo", "unable to create event loop: {}", err);
            return ExitCode::FAILURE;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    if let Err(err) = event_loop.run_app(&mut app) {
        gfx_error!("ember::demo", "event loop terminated: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
