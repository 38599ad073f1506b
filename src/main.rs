#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use learnlab::LearnApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "LearnLab",
        options,
        Box::new(|cc| Ok(Box::new(LearnApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Routes log lines to the browser console.
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");
        let canvas = document
            .get_element_by_id("learnlab_canvas")
            .expect("no element with id learnlab_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("learnlab_canvas is not a canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(LearnApp::new(cc)))),
            )
            .await
            .expect("failed to start the web runner");
    });
}
