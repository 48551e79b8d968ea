#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_title("Cyberpunk Interface"),
        ..Default::default()
    };
    eframe::run_native(
        "egui_cyberpunk demo",
        native_options,
        Box::new(|cc| Ok::<Box<dyn eframe::App>, _>(Box::new(demo_core::CyberpunkApp::new(cc)))),
    )
}

// The web build starts through `demo-web` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
