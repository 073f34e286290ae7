use crate::components::icon_link::IconLink;
use archive_shared::Team;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TeamCardProps {
    pub team: Team,
}

#[function_component(TeamCard)]
pub fn team_card(props: &TeamCardProps) -> Html {
    let team = &props.team;
    let members: Vec<&str> = team.display_members().collect();

    html! {
        <div class="team-card">
            <div class="team-header">
                <h4 class="team-name">{ team.team_name.clone().unwrap_or_default() }</h4>
                if let Some(position) = &team.position {
                    <span class="position-badge">{ format!("Rank {}", position) }</span>
                }
            </div>

            if let Some(coach) = &team.team_coach {
                <div class="team-coach">
                    <strong>{"Coach:"}</strong>{" "}{ coach.clone() }
                </div>
            }

            if !members.is_empty() {
                <div class="team-members">
                    <strong>{"Team Members:"}</strong>
                    <ul>
                        { for members.iter().map(|member| html! { <li>{ member.to_string() }</li> }) }
                    </ul>
                </div>
            }

            <div class="team-footer">
                <div class="team-links">
                    <IconLink url={team.team_picture.clone()} icon="fas fa-image" title="Team Picture" class="team-link" />
                    <IconLink url={team.team_info_link.clone()} icon="fas fa-info-circle" title="Team Info" class="team-link" />
                </div>
                if let Some(remarks) = &team.remarks {
                    <div class="remarks">{ remarks.clone() }</div>
                }
            </div>
        </div>
    }
}
