use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::utils::routing::{current_route, push_route, Route};

#[derive(Clone)]
pub struct UseRouteHandle {
    pub route: Route,
    pub navigate: Callback<Route>,
}

#[hook]
pub fn use_route() -> UseRouteHandle {
    let route = use_state(current_route);

    // Back/forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                route.set(current_route());
            }) as Box<dyn FnMut(web_sys::Event)>);

            let win = window();
            if let Some(win) = &win {
                if win
                    .add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("⚠️ [ROUTE] No se pudo registrar popstate");
                }
            }

            move || {
                if let Some(win) = win {
                    let _ = win.remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
                }
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            if let Err(e) = push_route(target) {
                log::error!("❌ [ROUTE] Error navegando a {}: {:?}", target.path(), e);
            }
            route.set(target);
        })
    };

    UseRouteHandle {
        route: *route,
        navigate,
    }
}
