use std::time::Instant;

use eframe::egui;
use log::info;
use particle_field::host::{self, EguiSurface, SurfaceTransform};
use particle_field::{FieldConfig, ParticleField};

const STATS_KEY: egui::Key = egui::Key::F3;

struct ParticleBackground {
    field: ParticleField,
    viewport: egui::Vec2,
    last_frame_time: Instant,
    frame_time: f32,
    show_stats: bool,
}

impl ParticleBackground {
    fn new(_cc: &eframe::CreationContext) -> Self {
        Self {
            field: ParticleField::new(FieldConfig::default()),
            viewport: egui::Vec2::ZERO,
            last_frame_time: Instant::now(),
            frame_time: 0.0,
            show_stats: false,
        }
    }

    /// Frame time converted to simulation ticks.
    fn advance_clock(&mut self) -> f32 {
        let now = Instant::now();
        self.frame_time = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        let render = &self.field.config().render;
        (self.frame_time * render.nominal_frame_rate).min(render.max_frame_ticks)
    }

    fn handle_viewport(&mut self, viewport: egui::Rect) {
        let size = viewport.size();
        if size != self.viewport {
            self.viewport = size;
            self.field.resize_viewport(size.x, size.y);
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context, viewport: egui::Rect) {
        let (events, toggle_stats) =
            ctx.input(|i| (host::pointer_events(i, viewport), i.key_pressed(STATS_KEY)));

        for event in events {
            self.field.handle_pointer(event);
        }
        if toggle_stats {
            self.show_stats = !self.show_stats;
        }
    }

    fn render_stats(&self, ctx: &egui::Context) {
        let pointer = self.field.pointer();
        let bounds = self.field.bounds();

        egui::Area::new("stats")
            .fixed_pos(egui::pos2(8.0, 8.0))
            .show(ctx, |ui| {
                ui.label(format!("FPS: {:.1}", 1.0 / self.frame_time.max(f32::EPSILON)));
                ui.label(format!("Frame Time: {:.3}ms", self.frame_time * 1000.0));
                ui.label(format!("Particles: {}", self.field.particles().len()));
                ui.label(format!("Surface: {:.0}x{:.0}", bounds.width, bounds.height));
                match pointer.position() {
                    Some(p) if pointer.is_active() => {
                        ui.label(format!("Pointer: held at {:.0}, {:.0}", p.x, p.y))
                    }
                    Some(p) => ui.label(format!("Pointer: {:.0}, {:.0}", p.x, p.y)),
                    None => ui.label("Pointer: none"),
                };
            });
    }
}

impl eframe::App for ParticleBackground {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let ticks = self.advance_clock();
        let viewport = ctx.screen_rect();

        self.handle_viewport(viewport);
        self.handle_input(ctx, viewport);

        let [r, g, b] = self.field.config().render.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::from_rgb(r, g, b)))
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
                let painter = ui.painter_at(rect);
                let transform = SurfaceTransform::fit(rect, self.field.input_scale());
                let mut surface = EguiSurface::new(&painter, transform, [r, g, b]);

                // Reschedules itself through request_repaint.
                self.field.tick(&mut surface, ctx, ticks);
            });

        if self.show_stats {
            self.render_stats(ctx);
        }
    }
}

fn main() -> particle_field::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("starting particle field, press F3 for stats");

    eframe::run_native(
        "Particle Field",
        eframe::NativeOptions {
            renderer: eframe::Renderer::Wgpu,
            initial_window_size: Some(egui::vec2(1280.0, 800.0)),
            vsync: true,
            ..Default::default()
        },
        Box::new(|cc| Box::new(ParticleBackground::new(cc))),
    )?;

    Ok(())
}
