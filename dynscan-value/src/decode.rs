//! Decode a [`Value`] into any type implementing [`Scan`].
//!
//! The decoder walks the value tree and the destination's shape in lock-step.
//! Every step goes through [`Decoder::value_into`], which first strips
//! indirection layers (`Option`, `Box`) and then hands the concrete location
//! to the decoder for its kind.
//!
//! ```
//! use dynscan::Scan;
//! use dynscan_value::{from_value, value};
//!
//! #[derive(Scan)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let point: Point = from_value(&value!({"x": 10, "y": 20})).unwrap();
//! assert_eq!((point.x, point.y), (10, 20));
//! ```

use alloc::format;
use alloc::string::String;

use dynscan_core::{
    Def, Field, Poke, PokeArray, PokeList, PokeMap, PokeScalar, PokeStruct, ReflectError,
    ScalarType, Scan, Shape,
};
use tracing::{trace, warn};

use crate::{DecodeError, DecodeErrorKind, Object, PathSegment, Value};

/// Result type for decoding.
pub type Result<T> = core::result::Result<T, DecodeError>;

/// Configurable entry point for decoding.
///
/// The default decoder narrows numbers with `as` semantics: saturating at the
/// bounds of the target type, truncating toward zero, `NaN` becoming zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decoder {
    strict_numbers: bool,
}

impl Decoder {
    /// A decoder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse numbers that do not fit their destination instead of narrowing
    /// them.
    ///
    /// Integer destinations then reject fractional, non-finite and
    /// out-of-range numbers; `f32` destinations reject finite numbers beyond
    /// `f32::MAX` in magnitude.
    pub fn strict_numbers(mut self, strict: bool) -> Self {
        self.strict_numbers = strict;
        self
    }

    /// Decode `value` into the location behind `poke`.
    ///
    /// The destination's type graph is checked for unsupported shapes before
    /// anything is written.
    pub fn decode_into(&self, value: &Value, poke: Poke<'_>) -> Result<()> {
        let shape = poke.shape();
        if let Some(found) = shape.find_undefined() {
            return Err(DecodeError::new(DecodeErrorKind::UnsupportedDestination {
                path: found.path,
                shape: found.shape,
            })
            .with_shape(shape));
        }

        self.value_into(value, poke)
            .map_err(|err| err.with_shape(shape))
    }

    /// Decode `value` into an existing destination.
    ///
    /// Fields with no matching key keep their current values.
    pub fn decode<T: Scan>(&self, value: &Value, destination: &mut T) -> Result<()> {
        self.decode_into(value, destination.poke())
    }

    /// Decode `value` into a fresh, zeroed `T`.
    pub fn from_value<T: Scan>(&self, value: &Value) -> Result<T> {
        let mut out = T::zero();
        self.decode(value, &mut out)?;
        Ok(out)
    }

    fn value_into(&self, value: &Value, poke: Poke<'_>) -> Result<()> {
        trace!(shape = %poke.shape(), kind = %value.kind(), "decoding");

        let Some(poke) = indirect(value, poke) else {
            return Ok(());
        };

        match poke {
            Poke::Scalar(scalar) => self.decode_scalar(value, scalar),
            Poke::Struct(ps) => self.decode_struct(value, ps),
            Poke::Map(pm) => self.decode_map(value, pm),
            Poke::List(pl) => self.decode_list(value, pl),
            Poke::Array(pa) => self.decode_array(value, pa),
            Poke::Opaque(shape) => Err(DecodeError::new(
                DecodeErrorKind::UnsupportedDestination {
                    path: String::new(),
                    shape,
                },
            )),
            // `indirect` never returns a pointer layer
            Poke::Pointer(pp) => Err(ReflectError::WasNotA {
                expected: "concrete",
                actual: pp.shape(),
            }
            .into()),
        }
    }

    fn decode_scalar(&self, value: &Value, scalar: PokeScalar<'_>) -> Result<()> {
        let shape = scalar.shape();
        match (scalar, value) {
            (PokeScalar::Bool(slot), Value::Bool(b)) => *slot = *b,
            (PokeScalar::String(slot), Value::String(s)) => s.clone_into(slot),
            (scalar, &Value::Number(n)) if scalar.scalar_type().is_numeric() => {
                if self.strict_numbers {
                    check_number(n, scalar.scalar_type()).map_err(|message| {
                        DecodeError::new(DecodeErrorKind::NumberOutOfRange { message })
                    })?;
                }
                write_number(scalar, n);
            }
            _ => return Err(mismatch(shape, value)),
        }
        Ok(())
    }

    fn decode_struct(&self, value: &Value, ps: &mut dyn PokeStruct) -> Result<()> {
        let shape = ps.shape();
        let Value::Object(object) = value else {
            return Err(mismatch(shape, value));
        };
        let Def::Struct(sd) = shape.def else {
            return Err(ReflectError::WasNotA {
                expected: "struct",
                actual: shape,
            }
            .into());
        };

        for (index, field) in sd.fields.iter().enumerate() {
            if field.is_skipped() {
                trace!(field = field.name, "skipping field tagged \"-\"");
                continue;
            }
            let Some((key, item)) = lookup(object, field) else {
                trace!(field = field.name, "no value for field");
                continue;
            };

            let poke = ps
                .field(index)
                .ok_or(ReflectError::NoSuchField { shape, index })?;
            self.value_into(item, poke)
                .map_err(|err| err.with_path(PathSegment::Field(key.clone())))?;
        }
        Ok(())
    }

    fn decode_map(&self, value: &Value, pm: &mut dyn PokeMap) -> Result<()> {
        let shape = pm.shape();
        let Value::Object(object) = value else {
            return Err(mismatch(shape, value));
        };
        let Def::Map(md) = shape.def else {
            return Err(ReflectError::WasNotA {
                expected: "map",
                actual: shape,
            }
            .into());
        };
        if !matches!(md.k.def, Def::Scalar(ScalarType::String)) {
            return Err(DecodeError::new(DecodeErrorKind::InvalidMapKeyType {
                map_shape: shape,
                key_shape: md.k,
            }));
        }

        for (key, item) in object {
            let mut entry = pm.begin_entry();
            self.value_into(item, entry.value())
                .map_err(|err| err.with_path(PathSegment::Field(key.clone())))?;
            entry.insert(key)?;
        }
        Ok(())
    }

    fn decode_list(&self, value: &Value, pl: &mut dyn PokeList) -> Result<()> {
        let shape = pl.shape();
        let Value::Array(items) = value else {
            return Err(mismatch(shape, value));
        };

        pl.clear();
        for (index, item) in items.iter().enumerate() {
            if index >= pl.capacity() {
                let capacity = grown_capacity(pl.capacity());
                trace!(from = pl.capacity(), to = capacity, "growing list");
                pl.reallocate(capacity);
            }
            pl.push_zero();

            let poke = pl.item(index).ok_or(ReflectError::WasNotA {
                expected: "list with the item just pushed",
                actual: shape,
            })?;
            self.value_into(item, poke)
                .map_err(|err| err.with_path(PathSegment::Index(index)))?;
        }
        Ok(())
    }

    fn decode_array(&self, value: &Value, pa: &mut dyn PokeArray) -> Result<()> {
        let shape = pa.shape();
        let Value::Array(items) = value else {
            return Err(mismatch(shape, value));
        };

        let len = pa.len();
        if items.len() > len {
            warn!(
                shape = %shape,
                capacity = len,
                got = items.len(),
                "array length oversized, discarding extra items"
            );
        }

        for (index, item) in items.iter().take(len).enumerate() {
            let poke = pa.begin_item(index).ok_or_else(|| {
                DecodeError::new(DecodeErrorKind::NotImplemented {
                    shape,
                    operation: "handing out item handles",
                })
            })?;
            self.value_into(item, poke)
                .map_err(|err| err.with_path(PathSegment::Index(index)))?;
        }
        Ok(())
    }
}

/// Strips `Option` and `Box` layers until a concrete location is reached.
///
/// Empty options are filled with a zero value on the way. A null value
/// meeting an option empties it instead, and there is nothing left to decode.
fn indirect<'mem>(value: &Value, mut poke: Poke<'mem>) -> Option<Poke<'mem>> {
    loop {
        let pp = match poke {
            Poke::Pointer(pp) => pp,
            concrete => return Some(concrete),
        };

        if pp.is_nullable() && value.is_null() {
            trace!(shape = %pp.shape(), "null into nullable layer");
            pp.set_null();
            return None;
        }
        if pp.is_null() {
            trace!(shape = %pp.shape(), "allocating");
            pp.allocate();
        }
        poke = pp.pointee();
    }
}

/// Finds the value for a field: by tag, else by name, else by lowercased name.
///
/// Untagged fields treat `null` like a missing key, unless the field is an
/// `Option`, which `null` resets.
fn lookup<'v>(object: &'v Object, field: &Field) -> Option<(&'v String, &'v Value)> {
    let key = field.effective_key()?;
    if field.is_tagged() {
        return object.get_key_value(key);
    }

    let nullable = matches!(field.shape().def, Def::Option(_));
    let present = |(key, item): (&'v String, &'v Value)| {
        (nullable || !item.is_null()).then_some((key, item))
    };
    object.get_key_value(key).and_then(present).or_else(|| {
        let fallback = field.fallback_key()?;
        object.get_key_value(fallback.as_str()).and_then(present)
    })
}

/// Capacity after growing a list that is full at `capacity`.
pub(crate) fn grown_capacity(capacity: usize) -> usize {
    (capacity + capacity / 2).max(4)
}

fn mismatch(expected: &'static Shape, value: &Value) -> DecodeError {
    DecodeError::new(DecodeErrorKind::ShapeMismatch {
        expected,
        got: value.kind(),
        value: value.clone(),
    })
}

fn write_number(scalar: PokeScalar<'_>, n: f64) {
    match scalar {
        PokeScalar::I8(slot) => *slot = n as i8,
        PokeScalar::I16(slot) => *slot = n as i16,
        PokeScalar::I32(slot) => *slot = n as i32,
        PokeScalar::I64(slot) => *slot = n as i64,
        PokeScalar::I128(slot) => *slot = n as i128,
        PokeScalar::ISize(slot) => *slot = n as isize,
        PokeScalar::U8(slot) => *slot = n as u8,
        PokeScalar::U16(slot) => *slot = n as u16,
        PokeScalar::U32(slot) => *slot = n as u32,
        PokeScalar::U64(slot) => *slot = n as u64,
        PokeScalar::U128(slot) => *slot = n as u128,
        PokeScalar::USize(slot) => *slot = n as usize,
        PokeScalar::F32(slot) => *slot = n as f32,
        PokeScalar::F64(slot) => *slot = n,
        PokeScalar::Bool(_) | PokeScalar::String(_) => {}
    }
}

/// Checks that `n` fits `target` exactly, for strict mode.
fn check_number(n: f64, target: ScalarType) -> core::result::Result<(), String> {
    let (signed, bits) = match target {
        ScalarType::I8 => (true, 8),
        ScalarType::I16 => (true, 16),
        ScalarType::I32 => (true, 32),
        ScalarType::I64 => (true, 64),
        ScalarType::I128 => (true, 128),
        ScalarType::ISize => (true, isize::BITS as i32),
        ScalarType::U8 => (false, 8),
        ScalarType::U16 => (false, 16),
        ScalarType::U32 => (false, 32),
        ScalarType::U64 => (false, 64),
        ScalarType::U128 => (false, 128),
        ScalarType::USize => (false, usize::BITS as i32),
        ScalarType::F32 => {
            if n.is_finite() && n.abs() > f64::from(f32::MAX) {
                return Err(format!("{n} is out of range for f32"));
            }
            return Ok(());
        }
        ScalarType::F64 | ScalarType::Bool | ScalarType::String => return Ok(()),
    };

    if !n.is_finite() {
        return Err(format!("{n} cannot be stored in {target}"));
    }
    if n.fract() != 0.0 {
        return Err(format!("{n} is not an integer, cannot be stored in {target}"));
    }

    // Both bounds are powers of two, so they are exact as f64.
    let (min, end) = if signed {
        (-(2f64.powi(bits - 1)), 2f64.powi(bits - 1))
    } else {
        (0.0, 2f64.powi(bits))
    };
    if n < min || n >= end {
        return Err(format!("{n} is out of range for {target}"));
    }
    Ok(())
}

/// Decode `value` into the location behind `poke` with a default [`Decoder`].
pub fn decode_into(value: &Value, poke: Poke<'_>) -> Result<()> {
    Decoder::new().decode_into(value, poke)
}

/// Decode `value` into an existing destination with a default [`Decoder`].
pub fn decode<T: Scan>(value: &Value, destination: &mut T) -> Result<()> {
    Decoder::new().decode(value, destination)
}

/// Decode `value` into a fresh, zeroed `T` with a default [`Decoder`].
pub fn from_value<T: Scan>(value: &Value) -> Result<T> {
    Decoder::new().from_value(value)
}
