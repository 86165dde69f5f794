use crate::host::{Basis, ValueType, Vec3};
use crate::math::Real;
use crate::native::NativeShapeError;
use crate::shape::ShapeType;
use alloc::string::String;

/// Error raised while describing, building or composing a shape.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// The value passed to `set_data` doesn't have the type expected by the shape.
    #[error("Failed to set shape data for {shape} shape: expected a value of type {expected}, got {found}.")]
    InvalidDataType {
        /// The shape receiving the data.
        shape: ShapeType,
        /// The type expected by the shape.
        expected: ValueType,
        /// The type received.
        found: ValueType,
    },
    /// A field required by the shape is missing from the data record.
    #[error("Failed to set shape data for {shape} shape: missing field '{field}'.")]
    MissingField {
        /// The shape receiving the data.
        shape: ShapeType,
        /// The missing field.
        field: &'static str,
    },
    /// A field of the data record doesn't have the type expected by the shape.
    #[error("Failed to set shape data for {shape} shape: field '{field}' must be of type {expected}, got {found}.")]
    InvalidFieldType {
        /// The shape receiving the data.
        shape: ShapeType,
        /// The offending field.
        field: &'static str,
        /// The type expected for this field.
        expected: ValueType,
        /// The type received.
        found: ValueType,
    },
    /// The capsule is shorter than its two caps.
    #[error("Failed to set shape data for capsule shape with height '{height}' and radius '{radius}'. Half height must be equal to or greater than radius.")]
    CapsuleTooShort {
        /// The full height of the capsule.
        height: Real,
        /// The radius of the capsule.
        radius: Real,
    },
    /// The number of vertices of a concave polygon isn't a multiple of three.
    #[error("Failed to set shape data for concave polygon shape with vertex count '{vertex_count}'. Expected a vertex count divisible by 3.")]
    InvalidFaceVertexCount {
        /// The number of vertices received.
        vertex_count: usize,
    },
    /// The number of heights of a height map doesn't match its dimensions.
    #[error("Failed to set shape data for height map shape with width '{width}', depth '{depth}' and height count '{height_count}'. Height count must be equal to width multiplied by depth.")]
    HeightCountMismatch {
        /// The number of samples along `x`.
        width: i64,
        /// The number of samples along `z`.
        depth: i64,
        /// The number of samples received.
        height_count: usize,
    },
    /// The height map isn't square.
    #[error("Failed to set shape data for height map shape with width '{width}', depth '{depth}' and height count '{height_count}'. Height maps with differing width and depth are not supported.")]
    NonSquareHeightMap {
        /// The number of samples along `x`.
        width: i64,
        /// The number of samples along `z`.
        depth: i64,
        /// The number of samples received.
        height_count: usize,
    },
    /// The side of the height map isn't a power of two.
    #[error("Failed to set shape data for height map shape with width '{width}', depth '{depth}' and height count '{height_count}'. Height maps with a width/depth that is not a power of two are not supported.")]
    HeightMapNotPowerOfTwo {
        /// The number of samples along `x`.
        width: i64,
        /// The number of samples along `z`.
        depth: i64,
        /// The number of samples received.
        height_count: usize,
    },
    /// A native shape was requested out of degenerate or unset parameters.
    #[error("Failed to build {0} shape: its parameters are unset or degenerate.")]
    Invalid(ShapeType),
    /// The operation is not supported for this shape.
    #[error("{0}")]
    Unsupported(&'static str),
    /// The native engine rejected the parameters of a shape.
    #[error("Failed to build {shape} shape with {parameters}. It returned the following error: '{source}'.")]
    Build {
        /// The shape being built.
        shape: ShapeType,
        /// A description of the parameters passed to the native engine.
        parameters: String,
        /// The native error.
        source: NativeShapeError,
    },
    /// A native shape could not be scaled.
    #[error("Failed to scale shape with scale '{scale}'. It returned the following error: '{source}'.")]
    Scale {
        /// The rejected scale.
        scale: Vec3,
        /// The native error.
        source: NativeShapeError,
    },
    /// A native shape could not be rotated and translated.
    #[error("Failed to offset shape with basis '{basis}' and origin '{origin}'. It returned the following error: '{source}'.")]
    Offset {
        /// The rejected rotation.
        basis: Basis,
        /// The rejected translation.
        origin: Vec3,
        /// The native error.
        source: NativeShapeError,
    },
    /// The center of mass of a native shape could not be moved.
    #[error("Failed to offset center of mass with offset '{offset}'. It returned the following error: '{source}'.")]
    CenterOfMassOffset {
        /// The rejected offset.
        offset: Vec3,
        /// The native error.
        source: NativeShapeError,
    },
    /// A native shape could not be tagged.
    #[error("Failed to override user data. It returned the following error: '{source}'.")]
    UserData {
        /// The native error.
        source: NativeShapeError,
    },
    /// The native shape was read before being built.
    #[error("The shape has not been built yet. Call `try_build` before reading its center of mass.")]
    NotBuilt,
}

/// Sends `err` to the error log and hands it back.
pub(crate) fn reported(err: ShapeError) -> ShapeError {
    log::error!("{err}");
    err
}
