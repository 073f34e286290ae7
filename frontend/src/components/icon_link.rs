use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IconLinkProps {
    pub url: Option<String>,
    pub icon: &'static str,
    pub title: &'static str,
    /// `"icon-link"` on contest cards, `"team-link"` on team cards.
    pub class: &'static str,
}

/// External link rendered as an icon, greyed out when the record has no URL.
#[function_component(IconLink)]
pub fn icon_link(props: &IconLinkProps) -> Html {
    match &props.url {
        Some(url) => html! {
            <a href={url.clone()} class={props.class} title={props.title} target="_blank" rel="noopener noreferrer">
                <i class={props.icon}></i>
            </a>
        },
        None => html! {
            <span class={classes!(props.class, "disabled")} title={unavailable_title(props.title)}>
                <i class={props.icon}></i>
            </span>
        },
    }
}

pub fn unavailable_title(title: &str) -> String {
    format!("No {} available", title)
}
