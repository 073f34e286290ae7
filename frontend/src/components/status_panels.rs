use yew::prelude::*;

#[function_component(LoadingState)]
pub fn loading_state() -> Html {
    html! { <div class="loading"></div> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorStateProps {
    pub message: AttrValue,
}

/// Shown for the rest of the session after a failed load.
#[function_component(ErrorState)]
pub fn error_state(props: &ErrorStateProps) -> Html {
    html! {
        <div class="error-state">
            <i class="fas fa-exclamation-triangle"></i>
            <h3>{"Error Loading Data"}</h3>
            <p>{ props.message.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct EmptyStateProps {
    /// True when contests exist but the search excluded all of them.
    #[prop_or_default]
    pub filtered: bool,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    let hint = if props.filtered {
        "Try adjusting your search terms or filters."
    } else {
        "The archive does not contain any contests yet."
    };
    html! {
        <div class="empty-state">
            <i class="fas fa-search"></i>
            <h3>{"No Contests Found"}</h3>
            <p>{ hint }</p>
        </div>
    }
}
