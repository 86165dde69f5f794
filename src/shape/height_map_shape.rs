use crate::host::Value;
use crate::math::{Real, Vector};
use crate::native::{NativeShape, NativeShapeSettings};
use crate::shape::data::Fields;
use crate::shape::{Shape, ShapeError, ShapeType};
use alloc::format;
use alloc::vec::Vec;

/// A square grid of heights in the `xz` plane, centered on the origin.
///
/// Samples are one unit apart. The side of the grid must be a power of two.
#[derive(Clone, Debug, Default)]
pub struct HeightMapShape {
    heights: Vec<f32>,
    width: i64,
    depth: i64,
}

impl HeightMapShape {
    /// The heights, row by row along `z`, each row along `x`.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// The number of samples along `x`.
    pub fn width(&self) -> i64 {
        self.width
    }

    /// The number of samples along `z`.
    pub fn depth(&self) -> i64 {
        self.depth
    }

    /// The position of the first sample.
    pub fn origin(&self) -> Vector<Real> {
        let half_width_tiles = (self.width - 1) as Real / 2.0;
        let half_depth_tiles = (self.depth - 1) as Real / 2.0;
        Vector::new(-half_width_tiles, 0.0, -half_depth_tiles)
    }
}

impl Shape for HeightMapShape {
    fn shape_type(&self) -> ShapeType {
        ShapeType::HeightMap
    }

    fn data(&self) -> Value {
        Value::dictionary([
            ("width", Value::Int(self.width)),
            ("depth", Value::Int(self.depth)),
            ("heights", Value::Float32Array(self.heights.clone())),
        ])
    }

    fn set_data(&mut self, data: &Value) -> Result<(), ShapeError> {
        *self = HeightMapShape::default();

        let fields = Fields::new(ShapeType::HeightMap, data)?;
        let heights = fields.float32_array("heights")?;
        let width = fields.int("width")?;
        let depth = fields.int("depth")?;
        let height_count = heights.len();

        if height_count == 0 {
            return Ok(());
        }

        // Freshly created height maps are 2x2 until their size is set, stay quiet about those.
        if width <= 2 || depth <= 2 {
            return Ok(());
        }

        if width.checked_mul(depth) != i64::try_from(height_count).ok() {
            return Err(ShapeError::HeightCountMismatch {
                width,
                depth,
                height_count,
            });
        }

        if width != depth {
            return Err(ShapeError::NonSquareHeightMap {
                width,
                depth,
                height_count,
            });
        }

        if !width.unsigned_abs().is_power_of_two() {
            return Err(ShapeError::HeightMapNotPowerOfTwo {
                width,
                depth,
                height_count,
            });
        }

        self.heights = heights.to_vec();
        self.width = width;
        self.depth = depth;
        Ok(())
    }

    fn is_valid(&self) -> bool {
        !self.heights.is_empty()
    }

    fn is_convex(&self) -> bool {
        false
    }

    fn build(&self, extra_margin: Real) -> Result<NativeShape, ShapeError> {
        if extra_margin > 0.0 {
            log::warn!(
                "Height map shapes with extra margin are not supported. Any such value will be ignored."
            );
        }

        NativeShapeSettings::HeightField {
            samples: self.heights.clone(),
            offset: self.origin(),
            scale: Vector::repeat(1.0),
            sample_count: u32::try_from(self.width).unwrap_or(u32::MAX),
        }
        .create()
        .map_err(|source| ShapeError::Build {
            shape: ShapeType::HeightMap,
            parameters: format!(
                "width '{}', depth '{}' and height count '{}'",
                self.width,
                self.depth,
                self.heights.len()
            ),
            source,
        })
    }
}
