use super::{Plane, Vec3};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A string-keyed record of values.
pub type Dictionary = BTreeMap<String, Value>;

/// A dynamically typed value, used to describe the parameters of a shape.
///
/// This is the host-neutral representation exchanged through
/// [`CollisionShape::data`](crate::shape::CollisionShape::data) and
/// [`CollisionShape::set_data`](crate::shape::CollisionShape::set_data). Save formats storing
/// shape parameters must preserve the exact variant of every field.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A 3D vector.
    Vector3(Vec3),
    /// A plane.
    Plane(Plane),
    /// A packed array of 3D vectors.
    Vector3Array(Vec<Vec3>),
    /// A packed array of 32-bit floats.
    Float32Array(Vec<f32>),
    /// A string-keyed record.
    Dictionary(Dictionary),
}

/// The type tag of a [`Value`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// See [`Value::Nil`].
    Nil,
    /// See [`Value::Bool`].
    Bool,
    /// See [`Value::Int`].
    Int,
    /// See [`Value::Float`].
    Float,
    /// See [`Value::Vector3`].
    Vector3,
    /// See [`Value::Plane`].
    Plane,
    /// See [`Value::Vector3Array`].
    Vector3Array,
    /// See [`Value::Float32Array`].
    Float32Array,
    /// See [`Value::Dictionary`].
    Dictionary,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Nil => "Nil",
            ValueType::Bool => "Bool",
            ValueType::Int => "Int",
            ValueType::Float => "Float",
            ValueType::Vector3 => "Vector3",
            ValueType::Plane => "Plane",
            ValueType::Vector3Array => "Vector3Array",
            ValueType::Float32Array => "Float32Array",
            ValueType::Dictionary => "Dictionary",
        };
        f.pad(name)
    }
}

impl Value {
    /// The type tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Nil => ValueType::Nil,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Vector3(_) => ValueType::Vector3,
            Value::Plane(_) => ValueType::Plane,
            Value::Vector3Array(_) => ValueType::Vector3Array,
            Value::Float32Array(_) => ValueType::Float32Array,
            Value::Dictionary(_) => ValueType::Dictionary,
        }
    }

    /// Builds a dictionary value out of `(key, value)` pairs.
    pub fn dictionary<'a>(entries: impl IntoIterator<Item = (&'a str, Value)>) -> Self {
        Value::Dictionary(
            entries
                .into_iter()
                .map(|(key, value)| (String::from(key), value))
                .collect(),
        )
    }

    /// The boolean held by this value, if it is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer held by this value, if it is a [`Value::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The float held by this value, if it is a [`Value::Float`].
    ///
    /// Integers are not converted.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// The vector held by this value, if it is a [`Value::Vector3`].
    pub fn as_vector3(&self) -> Option<Vec3> {
        match self {
            Value::Vector3(v) => Some(*v),
            _ => None,
        }
    }

    /// The plane held by this value, if it is a [`Value::Plane`].
    pub fn as_plane(&self) -> Option<Plane> {
        match self {
            Value::Plane(p) => Some(*p),
            _ => None,
        }
    }

    /// The vectors held by this value, if it is a [`Value::Vector3Array`].
    pub fn as_vector3_array(&self) -> Option<&[Vec3]> {
        match self {
            Value::Vector3Array(v) => Some(v),
            _ => None,
        }
    }

    /// The floats held by this value, if it is a [`Value::Float32Array`].
    pub fn as_float32_array(&self) -> Option<&[f32]> {
        match self {
            Value::Float32Array(v) => Some(v),
            _ => None,
        }
    }

    /// The record held by this value, if it is a [`Value::Dictionary`].
    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            Value::Dictionary(d) => Some(d),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x as f64)
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Value::Vector3(v)
    }
}

impl From<Plane> for Value {
    fn from(p: Plane) -> Self {
        Value::Plane(p)
    }
}

impl From<Vec<Vec3>> for Value {
    fn from(v: Vec<Vec3>) -> Self {
        Value::Vector3Array(v)
    }
}

impl From<Vec<f32>> for Value {
    fn from(v: Vec<f32>) -> Self {
        Value::Float32Array(v)
    }
}

impl From<Dictionary> for Value {
    fn from(d: Dictionary) -> Self {
        Value::Dictionary(d)
    }
}
