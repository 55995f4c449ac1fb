use yew::prelude::*;

use super::{LoginScreen, SearchPage};
use crate::hooks::{use_route, use_session_provider, SessionContext};
use crate::utils::routing::Route;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session_provider();
    let router = use_route();

    let page = match router.route {
        Route::Dogs => html! { <SearchPage on_navigate={router.navigate.clone()} /> },
        Route::Login | Route::NotFound => html! { <LoginScreen on_navigate={router.navigate.clone()} /> },
    };

    html! {
        <ContextProvider<SessionContext> context={session}>
            <main class="app">{page}</main>
        </ContextProvider<SessionContext>>
    }
}
