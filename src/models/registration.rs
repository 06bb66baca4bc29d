use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Registration {
    pub nid: String,
    pub name: String,
    pub email: String,
    pub contact: String,
    pub password: String,
}
