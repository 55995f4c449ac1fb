// ============================================================================
// USE SESSION - Contexto de sesión para las vistas
// ============================================================================
// Se construye una sola vez en App y se reparte con ContextProvider.
// ============================================================================

use yew::prelude::*;

use crate::models::{LoginOutcome, LoginRequest};
use crate::services::ApiClient;
use crate::state::SessionState;
use crate::utils::cookies::read_document_cookie;
use crate::viewmodels::SessionViewModel;

/// Session as seen by views
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub is_authenticated: bool,
    /// Login request plus the callback that receives its outcome
    pub login: Callback<(LoginRequest, Callback<LoginOutcome>)>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_session_provider() -> SessionContext {
    let is_authenticated = use_state(|| {
        let probe = SessionState::from_cookie(&read_document_cookie());
        log::info!("🍪 [AUTH] Cookie de sesión presente: {}", probe.is_authenticated());
        probe.is_authenticated()
    });

    let login = use_callback(
        is_authenticated.clone(),
        move |(request, respond): (LoginRequest, Callback<LoginOutcome>), is_authenticated| {
            let is_authenticated = is_authenticated.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = SessionViewModel::new(ApiClient::new(), SessionState::new(*is_authenticated));
                let outcome = LoginOutcome::from(vm.login(&request.name, &request.email).await);
                if outcome.is_accepted() {
                    log::info!("✅ [AUTH] Login aceptado para {}", request.email);
                } else if let LoginOutcome::Failed(e) = &outcome {
                    log::error!("❌ [AUTH] Login falló ({}): {}", e.error_code(), e);
                }
                is_authenticated.set(vm.is_authenticated());
                respond.emit(outcome);
            });
        },
    );

    let logout = use_callback(is_authenticated.clone(), move |_: (), is_authenticated| {
        let is_authenticated = is_authenticated.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let vm = SessionViewModel::new(ApiClient::new(), SessionState::new(*is_authenticated));
            vm.logout().await;
            is_authenticated.set(vm.is_authenticated());
        });
    });

    SessionContext {
        is_authenticated: *is_authenticated,
        login,
        logout,
    }
}

/// Session context of the surrounding `App`, if any
#[hook]
pub fn use_session() -> Option<SessionContext> {
    use_context::<SessionContext>()
}
