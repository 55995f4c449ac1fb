// ============================================================================
// DOG FINDER - FRONTEND YEW (RUST + WASM)
// ============================================================================
// Capas:
// - Components: vistas Yew (sin lógica de negocio)
// - Hooks: conectan estado + viewmodels con Yew
// - ViewModels: lógica de sesión y ciclo de búsqueda
// - Services: SOLO comunicación API (detrás del trait DogApi)
// - State: estado puro, probado en nativo
// - Models: estructuras del servicio remoto
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

use crate::components::App;
use crate::config::CONFIG;

/// Arranca la app en el `<body>` del documento
pub fn run() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!(
        "🚀 Dog Finder starting ({}) → {}",
        CONFIG.environment,
        CONFIG.api_base_url()
    );

    yew::Renderer::<App>::new().render();
}
