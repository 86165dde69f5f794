use crate::math::{Real, Vector};
use parry3d::shape::TriMeshBuilderError;

/// Error returned when the native engine rejects the parameters of a shape.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum NativeShapeError {
    /// A radius was zero, negative or not finite.
    #[error("Invalid radius: {0}.")]
    InvalidRadius(Real),
    /// A half height was zero, negative or not finite.
    #[error("Invalid half height: {0}.")]
    InvalidHalfHeight(Real),
    /// A convex radius was negative or not finite.
    #[error("Invalid convex radius: {0}.")]
    InvalidConvexRadius(Real),
    /// At least one half extent is smaller than the convex radius.
    #[error("Invalid half extents {half_extents:?}: they must all be at least as large as the convex radius {convex_radius}.")]
    InvalidHalfExtents {
        /// The rejected half extents.
        half_extents: Vector<Real>,
        /// The convex radius the half extents were compared to.
        convex_radius: Real,
    },
    /// A convex hull needs at least three points.
    #[error("Too few points to build a convex hull: {0}.")]
    TooFewPoints(usize),
    /// The convex hull of the given points has no volume or could not be computed.
    #[error("Failed to compute a non-degenerate convex hull out of {0} points.")]
    DegenerateHull(usize),
    /// The triangle mesh could not be built.
    #[error("Failed to build triangle mesh: {0}")]
    Mesh(#[from] TriMeshBuilderError),
    /// The number of height samples does not match `sample_count * sample_count`.
    #[error("Expected {expected} height samples for a sample count of {sample_count}, got {actual}.")]
    HeightFieldSampleCount {
        /// The number of samples along each side.
        sample_count: u32,
        /// `sample_count * sample_count`.
        expected: usize,
        /// The number of samples provided.
        actual: usize,
    },
    /// A height field needs at least two samples along each side.
    #[error("A height field needs at least 2 samples along each side, got {0}.")]
    HeightFieldTooSmall(u32),
    /// The spacing between height samples is zero, negative or not finite.
    #[error("Invalid height field sample spacing: {0:?}.")]
    InvalidSampleSpacing(Vector<Real>),
    /// A length was zero or not finite.
    #[error("Invalid length: {0}.")]
    InvalidLength(Real),
    /// The scale can't be applied to the shape.
    #[error("Invalid scale {scale:?}: {reason}.")]
    InvalidScale {
        /// The rejected scale.
        scale: Vector<Real>,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// A rotation or translation contains a non-finite component.
    #[error("The rotation and translation must be finite.")]
    NonFiniteTransform,
    /// A center of mass offset contains a non-finite component.
    #[error("Invalid center of mass offset: {0:?}.")]
    NonFiniteOffset(Vector<Real>),
}
