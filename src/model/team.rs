use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub institution_id: i32,
    /// Name of the owning institution, absent if the institution row could not be joined
    pub institution_name: Option<String>,
    pub name: String,
    /// Team image as a `data:image/png;base64,` URI
    pub image: Option<String>,
    pub active: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTeamDto {
    pub institution_id: Option<i32>,
    pub name: Option<String>,
    /// `data:image/...;base64,` URI, an empty string means no image
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTeamDto {
    pub institution_id: Option<i32>,
    pub name: Option<String>,
    /// `data:image/...;base64,` URI, an empty string removes the current image
    pub image: Option<String>,
}
