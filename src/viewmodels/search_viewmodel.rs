// ============================================================================
// SEARCH VIEWMODEL - CICLO DE BÚSQUEDA
// ============================================================================
// Llamadas estrictamente secuenciales, cada una depende de la anterior:
//   ZIP → coordenadas → ZIPs en el radio → ids → detalles
// Devuelve un CycleOutcome; SearchState decide si sigue vigente.
// ============================================================================

use crate::error::ApiResult;
use crate::models::{SearchCriteria, SearchPage, SearchQuery};
use crate::services::{geo, DogApi};
use crate::state::{CycleKind, CycleOutcome, CycleRequest};
use crate::utils::constants::DETAIL_BATCH_LIMIT;
use crate::utils::dedup::unique_ids;

/// ZIP restriction for one cycle
#[derive(Debug, Clone, PartialEq)]
enum ZipScope {
    Any,
    Only(Vec<String>),
    /// Radius search found no ZIPs: nothing can match
    Nowhere,
}

pub struct SearchViewModel<A: DogApi> {
    api: A,
}

impl<A: DogApi> SearchViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn run_cycle(&self, request: &CycleRequest) -> ApiResult<CycleOutcome> {
        let page = match &request.kind {
            CycleKind::Fresh => match self.zip_scope(&request.criteria).await? {
                ZipScope::Nowhere => {
                    log::info!("📍 [SEARCH] Ningún ZIP en el radio, resultado vacío");
                    SearchPage::default()
                }
                ZipScope::Any => {
                    let query = SearchQuery::from_criteria(&request.criteria, Vec::new());
                    self.api.fetch_search_page(&query).await?
                }
                ZipScope::Only(zip_codes) => {
                    let query = SearchQuery::from_criteria(&request.criteria, zip_codes);
                    self.api.fetch_search_page(&query).await?
                }
            },
            CycleKind::NextPage(cursor) => self.api.fetch_search_cursor(cursor).await?,
        };

        // an empty page ends paging even if the service still hands out a cursor
        let next = if page.result_ids.is_empty() { None } else { page.next };
        let requested_ids = unique_ids(page.result_ids, &request.seen_ids, DETAIL_BATCH_LIMIT);
        let dogs = if requested_ids.is_empty() {
            log::warn!("⚠️ [SEARCH] La búsqueda no devolvió ids nuevos");
            Vec::new()
        } else {
            self.api.fetch_details(&requested_ids).await?
        };

        log::info!(
            "✅ [SEARCH] Ciclo {}: {} perros, siguiente página: {}",
            request.generation,
            dogs.len(),
            next.is_some()
        );

        Ok(CycleOutcome {
            generation: request.generation,
            requested_ids,
            dogs,
            next,
            total: page.total,
        })
    }

    async fn zip_scope(&self, criteria: &SearchCriteria) -> ApiResult<ZipScope> {
        let Some(zip_code) = criteria.zip_filter() else {
            return Ok(ZipScope::Any);
        };

        if !criteria.wants_radius_search() {
            return Ok(ZipScope::Only(vec![zip_code.to_string()]));
        }

        let center = self.api.resolve_zip(zip_code).await?;
        let bounding_box = geo::bounding_box(&center, criteria.radius_miles);
        let zip_codes = self.api.search_zips_in_radius(&bounding_box).await?;
        log::info!(
            "📍 [SEARCH] {} ZIPs a {} millas de {}",
            zip_codes.len(),
            criteria.radius_miles,
            zip_code
        );

        if zip_codes.is_empty() {
            Ok(ZipScope::Nowhere)
        } else {
            Ok(ZipScope::Only(zip_codes))
        }
    }
}
