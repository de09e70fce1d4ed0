use crate::CollectionState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub endpoint: String,
    pub stories: CollectionState,
    pub clock: String,
    pub can_submit: bool,
}
