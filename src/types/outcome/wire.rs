//! Serde representation of [`Outcome`].
//!
//! Fields are written as `warnings`, `errorObj`, `isSuccess`, `data`, in that
//! order. `isSuccess` is derived from `errorObj` and checked on input.
//! Incoming warnings are deduplicated and an empty list reads as absent.
use serde::de::{Error as _, IntoDeserializer};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Outcome, State};
use crate::types::{Error, WarningVec};

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 4)?;
        state.serialize_field("warnings", &self.warnings)?;
        state.serialize_field("errorObj", &self.error_obj())?;
        state.serialize_field("isSuccess", &self.is_success())?;
        state.serialize_field("data", &self.data())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireOutcome<T> {
    warnings: Option<WarningVec>,
    error_obj: Option<Error>,
    is_success: Option<bool>,
    data: Option<T>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireOutcome::<T>::deserialize(deserializer)?;

        if let Some(is_success) = wire.is_success {
            if is_success != wire.error_obj.is_none() {
                return Err(D::Error::custom("`isSuccess` contradicts `errorObj`"));
            }
        }

        let state = match (wire.error_obj, wire.data) {
            (Some(error), _) => State::Failure(error),
            (None, Some(data)) => State::Success(data),
            // `()` and `Option<_>` payloads accept a missing or null `data`.
            (None, None) => State::Success(T::deserialize(
                IntoDeserializer::<'de, D::Error>::into_deserializer(()),
            )?),
        };

        // Decoded warnings go through the same union as `add_warnings`.
        Ok(Outcome::from_state(state).with_warnings(wire.warnings.into_iter().flatten()))
    }
}
