use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PhysicsError {
    #[error("invalid player dimensions: radius={radius}, height={height}")]
    InvalidDimensions { radius: f32, height: f32 },
}
