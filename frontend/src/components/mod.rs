pub mod contest_card;
pub mod icon_link;
pub mod search_controls;
pub mod status_panels;
pub mod team_card;
pub mod theme_toggle;
