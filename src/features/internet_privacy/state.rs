use serde::Serialize;

use crate::flow::State;
use crate::modules::InternetPrivacyMode;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InternetPrivacyState {
    pub mode: InternetPrivacyMode,
}

impl State for InternetPrivacyState {}
