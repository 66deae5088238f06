use alloc::string::String;

use crate::Shape;

/// Tag value that excludes a field from decoding.
pub const SKIP_TAG: &str = "-";

/// A named field of a struct.
///
/// The field's shape is behind a function pointer so that self-referential
/// types can name themselves.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    /// Name as declared in the struct, without any `r#` prefix.
    pub name: &'static str,

    /// Shape of the field's type.
    pub shape: fn() -> &'static Shape,

    /// Explicit tag from `#[scan(tag = "...")]`, if any.
    ///
    /// `Some("-")` excludes the field; `Some("")` is the same as no tag.
    pub tag: Option<&'static str>,
}

impl Field {
    /// Const ctor for an untagged field.
    pub const fn new(name: &'static str, shape: fn() -> &'static Shape) -> Self {
        Self {
            name,
            shape,
            tag: None,
        }
    }

    /// Sets the explicit tag.
    pub const fn tag(self, tag: &'static str) -> Self {
        Self {
            tag: Some(tag),
            ..self
        }
    }

    /// Shape of the field's type.
    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }

    /// Whether the field is tagged `"-"` and must never be written.
    pub fn is_skipped(&self) -> bool {
        self.tag == Some(SKIP_TAG)
    }

    /// Whether the field has a non-empty tag other than `"-"`, making the tag
    /// the only key it is looked up under.
    pub fn is_tagged(&self) -> bool {
        matches!(self.tag, Some(tag) if !tag.is_empty() && tag != SKIP_TAG)
    }

    /// The key this field is looked up under first: the tag when one is
    /// given, otherwise the declared name. `None` for skipped fields.
    pub fn effective_key(&self) -> Option<&'static str> {
        match self.tag {
            Some(SKIP_TAG) => None,
            Some(tag) if !tag.is_empty() => Some(tag),
            _ => Some(self.name),
        }
    }

    /// The key tried when [`Field::effective_key`] finds nothing.
    ///
    /// Only untagged fields have one: their name, lowercased. Returns `None`
    /// when lowercasing changes nothing, since that key was already tried.
    pub fn fallback_key(&self) -> Option<String> {
        match self.tag {
            Some(tag) if !tag.is_empty() => None,
            _ => {
                let lower = self.name.to_lowercase();
                (lower != self.name).then_some(lower)
            }
        }
    }
}
