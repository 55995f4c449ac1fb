use yew::prelude::*;

use super::{DogTable, Pagination, SearchToolbar};
use crate::hooks::{use_dog_search, use_session};
use crate::utils::routing::Route;

#[derive(Properties, PartialEq)]
pub struct SearchPageProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(SearchPage)]
pub fn search_page(props: &SearchPageProps) -> Html {
    let session = use_session();
    let search = use_dog_search();
    let state = &search.state;
    let criteria = state.criteria();

    let on_logout = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(session) = session.as_ref() {
                session.logout.emit(());
            }
            on_navigate.emit(Route::Login);
        })
    };

    html! {
        <div class="search-page">
            <header class="search-header">
                <h2>{"Dog Directory 🐕"}</h2>
                <button class="btn-secondary" onclick={on_logout}>{"Logout"}</button>
            </header>

            <SearchToolbar
                loading={state.is_loading()}
                sort={criteria.sort}
                breed={criteria.breed.clone()}
                zip_code={criteria.zip_code.clone()}
                radius_miles={criteria.radius_miles}
                on_toggle_sort={search.toggle_sort.clone()}
                on_breed_change={search.set_breed.clone()}
                on_zip_change={search.set_zip.clone()}
                on_radius_change={search.set_radius.clone()}
            />

            if let Some(error) = state.last_error() {
                <p class="search-error">
                    {format!("⚠️ {} ", error)}
                    <button class="btn-secondary" onclick={search.refresh.reform(|_| ())}>{"Retry"}</button>
                </p>
            }

            <DogTable
                dogs={state.displayed().to_vec()}
                show_empty_row={state.shows_empty_row()}
            />

            <Pagination
                page={state.page()}
                loaded_pages={state.loaded_pages()}
                total={state.total()}
                can_prev={state.can_go_prev()}
                can_next={state.can_go_next()}
                on_prev={search.prev_page.clone()}
                on_next={search.next_page.clone()}
            />
        </div>
    }
}
