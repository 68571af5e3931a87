use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement body returned by DELETE endpoints: `{"Ok": true}`
#[derive(Debug, Serialize, ToSchema)]
pub struct Acknowledgement {
    #[serde(rename = "Ok")]
    #[schema(example = true)]
    pub ok: bool,
}

impl Acknowledgement {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
