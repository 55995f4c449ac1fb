use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: usize,
    pub loaded_pages: usize,
    /// Matches reported by the service, when known
    #[prop_or_default]
    pub total: Option<u64>,
    pub can_prev: bool,
    pub can_next: bool,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    html! {
        <div class="pagination">
            <button
                class="btn-primary"
                onclick={props.on_prev.reform(|_| ())}
                disabled={!props.can_prev}
            >
                {"Prev"}
            </button>
            <span class="page-indicator">
                {format!("Page {} / {}", props.page + 1, props.loaded_pages.max(props.page + 1))}
            </span>
            if let Some(total) = props.total {
                <span class="result-total">{format!("{} dogs", total)}</span>
            }
            <button
                class="btn-primary"
                onclick={props.on_next.reform(|_| ())}
                disabled={!props.can_next}
            >
                {"Next"}
            </button>
        </div>
    }
}
