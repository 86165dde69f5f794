//! Helpers to read shape parameters out of a [`Value`].

use crate::host::{Dictionary, Plane, Value, ValueType, Vec3};
use crate::shape::{ShapeError, ShapeType};

fn mismatch(shape: ShapeType, expected: ValueType, found: &Value) -> ShapeError {
    ShapeError::InvalidDataType {
        shape,
        expected,
        found: found.value_type(),
    }
}

pub(crate) fn expect_float(shape: ShapeType, data: &Value) -> Result<f64, ShapeError> {
    data.as_float()
        .ok_or_else(|| mismatch(shape, ValueType::Float, data))
}

pub(crate) fn expect_vector3(shape: ShapeType, data: &Value) -> Result<Vec3, ShapeError> {
    data.as_vector3()
        .ok_or_else(|| mismatch(shape, ValueType::Vector3, data))
}

pub(crate) fn expect_plane(shape: ShapeType, data: &Value) -> Result<Plane, ShapeError> {
    data.as_plane()
        .ok_or_else(|| mismatch(shape, ValueType::Plane, data))
}

pub(crate) fn expect_vector3_array(shape: ShapeType, data: &Value) -> Result<&[Vec3], ShapeError> {
    data.as_vector3_array()
        .ok_or_else(|| mismatch(shape, ValueType::Vector3Array, data))
}

/// Typed access to the fields of a dictionary value.
pub(crate) struct Fields<'a> {
    shape: ShapeType,
    dict: &'a Dictionary,
}

impl<'a> Fields<'a> {
    pub fn new(shape: ShapeType, data: &'a Value) -> Result<Self, ShapeError> {
        let dict = data
            .as_dictionary()
            .ok_or_else(|| mismatch(shape, ValueType::Dictionary, data))?;
        Ok(Fields { shape, dict })
    }

    fn get<T>(
        &self,
        field: &'static str,
        expected: ValueType,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T, ShapeError> {
        let value = self.dict.get(field).ok_or(ShapeError::MissingField {
            shape: self.shape,
            field,
        })?;

        extract(value).ok_or_else(|| ShapeError::InvalidFieldType {
            shape: self.shape,
            field,
            expected,
            found: value.value_type(),
        })
    }

    pub fn float(&self, field: &'static str) -> Result<f64, ShapeError> {
        self.get(field, ValueType::Float, Value::as_float)
    }

    pub fn int(&self, field: &'static str) -> Result<i64, ShapeError> {
        self.get(field, ValueType::Int, Value::as_int)
    }

    pub fn bool(&self, field: &'static str) -> Result<bool, ShapeError> {
        self.get(field, ValueType::Bool, Value::as_bool)
    }

    pub fn vector3_array(&self, field: &'static str) -> Result<&'a [Vec3], ShapeError> {
        self.get(field, ValueType::Vector3Array, Value::as_vector3_array)
    }

    pub fn float32_array(&self, field: &'static str) -> Result<&'a [f32], ShapeError> {
        self.get(field, ValueType::Float32Array, Value::as_float32_array)
    }
}
