#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use lexico_portugues::LexicoApp;

    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Léxico Portugués",
        options,
        Box::new(|cc| Ok(Box::new(LexicoApp::from_creation_context(cc)?))),
    )
}

// En la web arranca `web::start`
#[cfg(target_arch = "wasm32")]
fn main() {}
