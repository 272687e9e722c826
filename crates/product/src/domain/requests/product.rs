use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body accepted by create and update.
///
/// Omitted fields decode to their zero value, so an update that leaves a
/// field out resets it. Unknown fields, including `id`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductRequest {
    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = 10)]
    pub quantity: i32,

    #[schema(example = 10.0)]
    pub price: f64,
}
