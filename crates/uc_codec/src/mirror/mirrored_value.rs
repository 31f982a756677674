use serde_core::ser::{Error, Serialize, Serializer};

use crate::Reflect;
use crate::mirror::mirror;

/// Serializes the wrapped value in its [`mirror`] form.
///
/// # Examples
///
/// ```
/// use uc_codec::{derive::Uncodable, mirror::MirroredValue};
///
/// #[derive(Uncodable)]
/// struct Point(i32, i32);
///
/// let json = serde_json::to_string(&MirroredValue(&Point(1, -2))).unwrap();
/// assert_eq!(json, "[1,-2]");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MirroredValue<'a>(pub &'a dyn Reflect);

impl Serialize for MirroredValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        mirror(self.0).map_err(S::Error::custom)?.serialize(serializer)
    }
}
