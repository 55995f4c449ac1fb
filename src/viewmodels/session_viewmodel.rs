// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Devuelve valores, los hooks actualizan el estado de Yew
// ============================================================================

use crate::error::ApiResult;
use crate::services::DogApi;
use crate::state::SessionState;

/// ViewModel de sesión - SOLO lógica de negocio
pub struct SessionViewModel<A: DogApi> {
    api: A,
    state: SessionState,
}

impl<A: DogApi> SessionViewModel<A> {
    pub fn new(api: A, state: SessionState) -> Self {
        Self { api, state }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    /// Only a confirmed 2xx flips the flag to true
    pub async fn login(&self, name: &str, email: &str) -> ApiResult<bool> {
        log::info!("🔐 [AUTH] Iniciando login...");
        let accepted = self.api.login(name, email).await?;
        if accepted {
            self.state.set_authenticated(true);
            log::info!("✅ [AUTH] Login correcto");
        } else {
            log::warn!("⚠️ [AUTH] Login rechazado por el servicio");
        }
        Ok(accepted)
    }

    /// Clears the flag even when the remote call fails
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            log::error!("❌ [AUTH] Error en logout ({}): {}", e.error_code(), e);
        }
        self.state.set_authenticated(false);
        log::info!("👋 [AUTH] Sesión cerrada");
    }
}
