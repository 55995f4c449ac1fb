// ============================================================================
// USE DOG SEARCH - Conecta SearchState + SearchViewModel con Yew
// ============================================================================
// El estado vive en Rc<RefCell<SearchState>>; cada ciclo corre en
// spawn_local y al terminar solo se aplica si su generación sigue vigente.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::services::ApiClient;
use crate::state::{CycleRequest, SearchState};
use crate::viewmodels::SearchViewModel;

#[derive(Clone)]
pub struct UseDogSearchHandle {
    /// Snapshot for this render
    pub state: SearchState,
    pub set_breed: Callback<String>,
    pub set_zip: Callback<String>,
    pub set_radius: Callback<u32>,
    pub toggle_sort: Callback<()>,
    pub next_page: Callback<()>,
    pub prev_page: Callback<()>,
    pub refresh: Callback<()>,
}

fn spawn_cycle(store: Rc<RefCell<SearchState>>, update: UseForceUpdateHandle, request: CycleRequest) {
    update.force_update();
    wasm_bindgen_futures::spawn_local(async move {
        let vm = SearchViewModel::new(ApiClient::new());
        let applied = match vm.run_cycle(&request).await {
            Ok(outcome) => store.borrow_mut().apply_outcome(outcome),
            Err(e) => {
                log::error!("❌ [SEARCH] Ciclo {} falló ({}): {}", request.generation, e.error_code(), e);
                store.borrow_mut().apply_failure(request.generation, e.to_string())
            }
        };
        if applied {
            update.force_update();
        }
    });
}

/// Wraps a state transition that may start a cycle
fn criteria_callback<T, F>(store: &Rc<RefCell<SearchState>>, update: &UseForceUpdateHandle, transition: F) -> Callback<T>
where
    T: 'static,
    F: Fn(&mut SearchState, T) -> Option<CycleRequest> + 'static,
{
    let store = store.clone();
    let update = update.clone();
    Callback::from(move |value: T| {
        let request = transition(&mut store.borrow_mut(), value);
        match request {
            Some(request) => spawn_cycle(store.clone(), update.clone(), request),
            None => update.force_update(),
        }
    })
}

#[hook]
pub fn use_dog_search() -> UseDogSearchHandle {
    let store = use_mut_ref(SearchState::new);
    let update = use_force_update();

    // First load on mount
    {
        let store = store.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            let request = store.borrow_mut().refresh();
            spawn_cycle(store, update, request);
            || ()
        });
    }

    let set_breed = criteria_callback(&store, &update, |state, breed: String| state.set_breed_filter(breed));
    let set_zip = criteria_callback(&store, &update, |state, zip: String| state.set_zip_code(zip));
    let set_radius = criteria_callback(&store, &update, |state, radius: u32| state.set_radius(radius));
    let toggle_sort = criteria_callback(&store, &update, |state, _: ()| Some(state.toggle_sort()));
    let next_page = criteria_callback(&store, &update, |state, _: ()| state.next_page());
    let refresh = criteria_callback(&store, &update, |state, _: ()| Some(state.refresh()));

    let prev_page = {
        let store = store.clone();
        let update = update.clone();
        Callback::from(move |_| {
            let moved = store.borrow_mut().prev_page();
            if moved {
                update.force_update();
            }
        })
    };

    let state = store.borrow().clone();

    UseDogSearchHandle {
        state,
        set_breed,
        set_zip,
        set_radius,
        toggle_sort,
        next_page,
        prev_page,
        refresh,
    }
}
