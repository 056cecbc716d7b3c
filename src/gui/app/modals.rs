use crate::gui::{
    error_modal::ErrorModal,
    settings::ApiSettingsModal,
};

#[derive(Default)]
pub struct Modals {
    pub error: ErrorModal,
    pub settings: ApiSettingsModal,
}
