use crate::api::contests::fetch_dataset;
use crate::components::contest_card::ContestCard;
use crate::components::search_controls::SearchControls;
use crate::components::status_panels::{EmptyState, ErrorState, LoadingState};
use crate::components::theme_toggle::ThemeToggle;
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::store::{SessionAction, SessionStore};
use archive_shared::ViewState;
use log::error;
use std::sync::Arc;
use yew::prelude::*;

#[function_component(ArchivePage)]
pub fn archive_page() -> Html {
    let store = use_reducer(SessionStore::default);
    let debouncer = use_mut_ref(|| Debouncer::new(Config::SEARCH_DEBOUNCE_MS));

    // Load the archive exactly once
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_dataset().await;
                if let Err(e) = &result {
                    error!("Failed to load contests: {}", e);
                }
                store.dispatch(SessionAction::Loaded(result));
            });
            || ()
        });
    }

    let on_query = {
        let store = store.clone();
        let debouncer = debouncer.clone();
        Callback::from(move |query: String| {
            let store = store.clone();
            debouncer
                .borrow_mut()
                .schedule(move || store.dispatch(SessionAction::Query(query)));
        })
    };

    let on_sort = {
        let store = store.clone();
        Callback::from(move |key: String| store.dispatch(SessionAction::Sort(key)))
    };

    let session = &store.session;
    let body = match session.view_state() {
        ViewState::Loading => html! { <LoadingState /> },
        ViewState::Failed(message) => html! { <ErrorState message={message} /> },
        ViewState::NoData => html! { <EmptyState /> },
        ViewState::NoResults => html! { <EmptyState filtered={true} /> },
        ViewState::Ready(_) => html! {
            <>{ for session.view().iter().enumerate().map(|(index, contest)| html! {
                // Keyed by record identity so expansion follows the contest across re-sorts
                <ContestCard key={(Arc::as_ptr(contest) as usize).to_string()} contest={contest.clone()} index={index} />
            }) }</>
        },
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <div class="header-top">
                    <h1>{"UIU Contest Archive"}</h1>
                    <ThemeToggle />
                </div>
                <SearchControls on_query={on_query} on_sort={on_sort} />
                <div class="contest-stats">
                    {"Showing "}<span class="total-contests">{ session.count().to_string() }</span>{" contests"}
                </div>
            </header>
            <main class="contest-list">
                { body }
            </main>
        </div>
    }
}
