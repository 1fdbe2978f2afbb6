use serde::Serialize;


pub const ALERT_SENT: &str = "Alert sent";

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertResponse {
    pub status_code: u16,
    pub body: String,
}

impl AlertResponse {
    pub fn sent() -> Self {
        AlertResponse {
            status_code: 200,
            body: ALERT_SENT.to_string(),
        }
    }
}
