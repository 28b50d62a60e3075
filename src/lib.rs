// ============================================================================
// COMMUNITY INSIGHTS - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica de sesión y de blogs
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use crate::app::App;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

// Instancia global de la app para poder re-renderizar desde cualquier handler
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if config::CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Community Insights App - Rust Puro + MVVM");

    let mut app = App::new()?;
    app.render()?;
    app.bootstrap();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app (el contrato base: re-renderizar el mundo)
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ App no está inicializada");
        }
    });
}
