use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponseDto {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponseDto {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponseDto {
    pub detail: String,
}
