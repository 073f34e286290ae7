use crate::theme::{apply_theme, load_theme, save_theme, toggle_icon};
use yew::prelude::*;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(load_theme);

    {
        use_effect_with(*theme, move |theme| {
            apply_theme(*theme);
            || ()
        });
    }

    let on_click = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            save_theme(next);
            theme.set(next);
        })
    };

    html! {
        <button class="theme-toggle" onclick={on_click} title="Toggle theme">
            <i class={toggle_icon(*theme)}></i>
        </button>
    }
}
