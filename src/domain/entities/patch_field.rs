use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::{Validate, ValidateLength, ValidationErrors};

/// Tri-state field for PATCH requests targeting nullable columns.
///
/// - `Unchanged` → field absent from the payload
/// - `SetToNull` → field present as JSON `null`
/// - `SetToValue` → field present with a value
///
/// Containers must carry `#[serde(default)]` so that an absent field
/// falls back to `Unchanged` instead of hitting the deserializer.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchField<T> {
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for PatchField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(v) => PatchField::SetToValue(v),
            None => PatchField::SetToNull,
        })
    }
}

impl<T> Serialize for PatchField<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PatchField::SetToValue(v) => v.serialize(serializer),
            _ => serializer.serialize_none(),
        }
    }
}

// ---------------------- Validation support ----------------------

impl<T> ValidateLength<u64> for PatchField<T>
where
    T: ValidateLength<u64>,
{
    fn length(&self) -> Option<u64> {
        match self {
            PatchField::SetToValue(value) => value.length(),
            _ => None,
        }
    }
    fn validate_length(&self, min: Option<u64>, max: Option<u64>, equal: Option<u64>) -> bool {
        match self {
            PatchField::SetToValue(value) => value.validate_length(min, max, equal),
            _ => true,
        }
    }
}

impl<T: Validate> Validate for PatchField<T> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            PatchField::SetToValue(value) => value.validate(),
            _ => Ok(()),
        }
    }
}

// ---------------------- Helpers ----------------------

impl<T> PatchField<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    pub fn is_set_to_null(&self) -> bool {
        matches!(self, Self::SetToNull)
    }

    /// If `SetToValue`, returns a reference to the inner value.
    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Nested option view:
    /// - `None` → unchanged
    /// - `Some(None)` → set null
    /// - `Some(Some(&T))` → set to value
    pub fn as_update(&self) -> Option<Option<&T>> {
        match self {
            Self::Unchanged => None,
            Self::SetToNull => Some(None),
            Self::SetToValue(v) => Some(Some(v)),
        }
    }

    /// Transform the inner value if `SetToValue`.
    pub fn map_value<U, F: FnOnce(T) -> U>(self, f: F) -> PatchField<U> {
        match self {
            Self::Unchanged => PatchField::Unchanged,
            Self::SetToNull => PatchField::SetToNull,
            Self::SetToValue(v) => PatchField::SetToValue(f(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Default)]
    #[serde(default)]
    struct Patch {
        photo: PatchField<String>,
    }

    #[test]
    fn an_absent_field_is_unchanged() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.photo, PatchField::Unchanged);
    }

    #[test]
    fn an_explicit_null_clears_the_field() {
        let patch: Patch = serde_json::from_str(r#"{"photo": null}"#).unwrap();
        assert_eq!(patch.photo, PatchField::SetToNull);
    }

    #[test]
    fn a_value_sets_the_field() {
        let patch: Patch = serde_json::from_str(r#"{"photo": "team.jpg"}"#).unwrap();
        assert_eq!(patch.photo, PatchField::SetToValue("team.jpg".to_string()));
    }

    #[test]
    fn as_update_exposes_the_three_states() {
        assert_eq!(PatchField::<i32>::Unchanged.as_update(), None);
        assert_eq!(PatchField::<i32>::SetToNull.as_update(), Some(None));
        assert_eq!(PatchField::SetToValue(7).as_update(), Some(Some(&7)));
    }
}
