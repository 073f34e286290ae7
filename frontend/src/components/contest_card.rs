use crate::components::icon_link::IconLink;
use crate::components::team_card::TeamCard;
use archive_shared::Contest;
use std::sync::Arc;
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ContestCardProps {
    pub contest: Arc<Contest>,
    /// Position in the current view; staggers the fade-in animation.
    pub index: usize,
}

#[function_component(ContestCard)]
pub fn contest_card(props: &ContestCardProps) -> Html {
    let expanded = use_state(|| false);
    let contest = &props.contest;

    let on_header_click = {
        let expanded = expanded.clone();
        Callback::from(move |e: MouseEvent| {
            // Links inside the header open their target without toggling
            let on_link = e
                .target_dyn_into::<Element>()
                .and_then(|target| target.closest("a").ok().flatten())
                .is_some();
            if !on_link {
                expanded.set(!*expanded);
            }
        })
    };

    let teams: Vec<Html> = contest
        .displayable_teams()
        .map(|team| html! { <TeamCard team={team.clone()} /> })
        .collect();

    html! {
        <div class="contest-card fade-in" style={animation_delay(props.index)}>
            <div class="contest-header" onclick={on_header_click}>
                <div class="contest-info">
                    <h3>{ contest.contest_name.clone() }</h3>
                    <div class="contest-meta">
                        <span class="contest-type">{ contest.type_label().to_string() }</span>
                        if let Some(year) = contest.year {
                            <span><i class="fas fa-calendar"></i>{" "}{ year.to_string() }</span>
                        }
                        if let Some(date) = &contest.date {
                            <span><i class="fas fa-clock"></i>{" "}{ date.clone() }</span>
                        }
                        if let Some(count) = contest.team_count() {
                            <span><i class="fas fa-users"></i>{ format!(" {} teams", count) }</span>
                        }
                    </div>
                </div>
                <div class="contest-actions">
                    <div class="contest-links">
                        <IconLink url={contest.contest_link.clone()} icon="fas fa-link" title="Contest Link" class="icon-link" />
                        <IconLink url={contest.ranking_link.clone()} icon="fas fa-trophy" title="Rankings" class="icon-link" />
                    </div>
                    <i class={classes!("fas", "fa-chevron-down", "expand-icon", (*expanded).then_some("rotated"))}></i>
                </div>
            </div>
            <div class={classes!("teams-section", (*expanded).then_some("expanded"))}>
                if teams.is_empty() {
                    <div class="no-teams">{"No team information available"}</div>
                } else {
                    <div class="teams-grid">{ for teams }</div>
                }
            </div>
        </div>
    }
}

pub fn animation_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s", index as f64 * 0.1)
}
