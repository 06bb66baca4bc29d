use serde::Serialize;

/// An entry of the bookable service catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CareService {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub charge_per_hour: f64,
}
