use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::SortOrder;
use crate::utils::constants::RADIUS_OPTIONS_MILES;

#[derive(Properties, PartialEq)]
pub struct SearchToolbarProps {
    pub loading: bool,
    pub sort: SortOrder,
    pub breed: String,
    pub zip_code: String,
    pub radius_miles: u32,
    pub on_toggle_sort: Callback<()>,
    pub on_breed_change: Callback<String>,
    pub on_zip_change: Callback<String>,
    pub on_radius_change: Callback<u32>,
}

#[function_component(SearchToolbar)]
pub fn search_toolbar(props: &SearchToolbarProps) -> Html {
    let on_breed_input = props.on_breed_change.reform(|e: InputEvent| {
        e.target_unchecked_into::<HtmlInputElement>().value()
    });

    // ZIP searches on commit (enter / blur), not per keystroke
    let on_zip_change = props.on_zip_change.reform(|e: Event| {
        e.target_unchecked_into::<HtmlInputElement>().value()
    });

    let on_radius_change = props.on_radius_change.reform(|e: Event| {
        e.target_unchecked_into::<HtmlSelectElement>()
            .value()
            .parse::<u32>()
            .unwrap_or(0)
    });

    html! {
        <div class="search-toolbar">
            <div class="loading-slot">
                if props.loading {
                    <div class="spinner spinner-small" aria-label="Loading"></div>
                }
            </div>
            <button class="btn-primary" onclick={props.on_toggle_sort.reform(|_| ())}>
                {format!("⇅ Sort by Breed ({})", props.sort.label())}
            </button>
            <input
                type="text"
                class="filter-input"
                placeholder="Filter by Breed"
                value={props.breed.clone()}
                oninput={on_breed_input}
            />
            <input
                type="text"
                class="filter-input zip-input"
                placeholder="ZIP Code"
                inputmode="numeric"
                maxlength="5"
                value={props.zip_code.clone()}
                onchange={on_zip_change}
            />
            <select class="radius-select" onchange={on_radius_change}>
                <option value="0" selected={props.radius_miles == 0}>{"Exact ZIP"}</option>
                { for RADIUS_OPTIONS_MILES.iter().map(|miles| html! {
                    <option value={miles.to_string()} selected={props.radius_miles == *miles}>
                        {format!("{} miles", miles)}
                    </option>
                }) }
            </select>
        </div>
    }
}
