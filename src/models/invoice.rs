use serde::{Deserialize, Serialize};

use super::Location;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub user_email: String,
    pub service_name: String,
    pub total_cost: f64,
    pub duration: f64,
    #[serde(default)]
    pub location: Location,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}
