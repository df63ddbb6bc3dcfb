use skyframe_coords::CoordError;
use skyframe_core::AngleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Angle(#[from] AngleError),

    #[error(transparent)]
    Coord(#[from] CoordError),

    #[error(transparent)]
    Stellar(#[from] skyframe_stellar::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
