use super::ids::AccountId;

#[derive(Debug, Clone)]
pub struct Summoner {
    pub account_id: AccountId,
    pub puuid: String,
    pub name: String,
    pub level: u16,
    pub profile_icon_id: i32,
}
