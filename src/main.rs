//! Corner-Cutting Curves.
//!
//! Interaktiver Editor für stückweise kubische Bézier-Kurven.
//! Rendering mit egui + wgpu.

use corner_cutting_curves::{
    render, shared, ui, AppController, AppIntent, AppState, CurveOptions,
};
use eframe::egui;
use eframe::egui_wgpu;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Corner-Cutting Curves v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let curve_options = CurveOptions::load_from_file(&CurveOptions::config_path());

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(curve_options.window_size)
                .with_title(shared::WINDOW_TITLE),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            shared::WINDOW_TITLE,
            options,
            Box::new(move |cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(CurvesApp::new(render_state, curve_options)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct CurvesApp {
    state: AppState,
    controller: AppController,
    renderer: std::sync::Arc<std::sync::Mutex<render::Renderer>>,
    device: eframe::wgpu::Device,
    queue: eframe::wgpu::Queue,
    input: ui::InputState,
}

impl CurvesApp {
    fn new(render_state: &egui_wgpu::RenderState, options: CurveOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            renderer: std::sync::Arc::new(std::sync::Mutex::new(render::Renderer::new(
                render_state,
            ))),
            device: render_state.device.clone(),
            queue: render_state.queue.clone(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for CurvesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ui::render_status_bar(ctx, &self.state, self.input.last_pointer());
        let menu_events = ui::render_menu(ctx, &self.state);
        self.process_events(menu_events);

        self.show_viewport(ctx);

        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        if ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}

impl CurvesApp {
    /// Verarbeitet Viewport-Input und hängt den Paint-Callback mit der
    /// Szene nach der Verarbeitung an.
    fn show_viewport(&mut self, ctx: &egui::Context) {
        let [r, g, b, a] = self.state.options.background_color.map(to_u8);
        let frame = egui::Frame::NONE.fill(egui::Color32::from_rgba_unmultiplied(r, g, b, a));

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

            let viewport_size = [rect.width(), rect.height()];
            let events = self
                .input
                .collect_viewport_events(ui, &response, viewport_size);
            self.process_events(events);

            let render_data = render::WgpuRenderData {
                scene: self
                    .controller
                    .build_render_scene(&self.state, viewport_size),
            };

            let callback = egui_wgpu::Callback::new_paint_callback(
                rect,
                render::WgpuRenderCallback {
                    renderer: self.renderer.clone(),
                    render_data,
                    device: self.device.clone(),
                    queue: self.queue.clone(),
                },
            );

            ui.painter().add(callback);

            if self.state.point_count() == 0 && !self.state.session.has_snapshot() {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Click to place control points",
                    egui::FontId::proportional(20.0),
                    egui::Color32::GRAY,
                );
            }
        });
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
