//! Wire contracts shared between the review frontend and the review backend.

pub mod usecases;
