use serde::Serialize;

/// A business that owns jobs. Only lives in memory during a seed run;
/// its display fields are copied onto each job it owns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub logo_url: String,
}
