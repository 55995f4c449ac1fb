use wasm_bindgen::JsValue;
use web_sys::window;

/// The two views of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dogs,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Login,
            "/dogs" => Route::Dogs,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login | Route::NotFound => "/",
            Route::Dogs => "/dogs",
        }
    }
}

/// Route for the current `location.pathname`
pub fn current_route() -> Route {
    window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Login)
}

/// Pushes `route` onto the browser history without reloading
pub fn push_route(route: Route) -> Result<(), JsValue> {
    let history = window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .history()?;
    history.push_state_with_url(&JsValue::NULL, "", Some(route.path()))
}
