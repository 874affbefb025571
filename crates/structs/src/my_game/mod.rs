//! Structs of the `MyGame` schema namespace.

mod polar_point;
mod transformation;

pub use polar_point::{create_polar_point, PolarPoint, PolarPointMut, PolarPointT};
pub use transformation::{
    create_transformation, Transformation, TransformationMut, TransformationT,
};
