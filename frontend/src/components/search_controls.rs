use archive_shared::SortKey;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchControlsProps {
    /// Raw input text on every keystroke; debouncing is the caller's job.
    pub on_query: Callback<String>,
    pub on_sort: Callback<String>,
}

#[function_component(SearchControls)]
pub fn search_controls(props: &SearchControlsProps) -> Html {
    let on_input = {
        let on_query = props.on_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_query.emit(input.value());
        })
    };

    let on_change = {
        let on_sort = props.on_sort.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_sort.emit(select.value());
        })
    };

    html! {
        <div class="search-controls">
            <div class="search-box">
                <i class="fas fa-search"></i>
                <input
                    type="text"
                    placeholder="Search contests, teams, members or coaches..."
                    oninput={on_input}
                />
            </div>
            <select class="sort-select" onchange={on_change}>
                { for SortKey::ALL.iter().map(|key| html! {
                    <option value={key.as_str()} selected={*key == SortKey::YearDesc}>{ key.label() }</option>
                }) }
            </select>
        </div>
    }
}
