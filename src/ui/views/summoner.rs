use crate::{
    impl_text_view, styled_line,
    ui::{Controller, TextCreationResult},
};

// ============================================================================
// Summoner Info View
// ============================================================================

fn summoner_info_view(ctrl: &Controller) -> TextCreationResult {
    let summoner = ctrl.manager.get_summoner()?;
    Ok(vec![
        styled_line!(),
        styled_line!("Name:          {}", summoner.name),
        styled_line!("Level:         {}", summoner.level),
        styled_line!("Profile Icon:  {}", summoner.profile_icon_id),
        styled_line!(),
        styled_line!("Account ID:    {}", summoner.account_id),
        styled_line!("PUUID:         {}", summoner.puuid),
    ])
}

impl_text_view!(SummonerInfoView, summoner_info_view, "Summoner Info");

#[cfg(test)]
mod tests {
    use crate::{
        service::{data_manager::DataManager, riotapi::client::ApiClient},
        ui::{views::RenderableView, Controller},
    };

    use super::*;

    #[test]
    fn view_reports_missing_summoner_instead_of_panicking() {
        let manager = DataManager::new(ApiClient::new("euw1", "test-key").unwrap());
        let ctrl = Controller { manager: &manager };

        let view = SummonerInfoView::new(&ctrl);
        assert_eq!(view.title(), "Summoner Info");
        assert!(view.error.is_some());
    }
}
