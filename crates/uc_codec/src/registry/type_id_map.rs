use core::any::TypeId;

use foldhash::fast::FixedState;
use hashbrown::HashMap;

/// Fixed-seed state, so maps can be built in `const` contexts.
pub(crate) const TYPE_ID_HASH_STATE: FixedState = FixedState::with_seed(0x5EED_C0DE);

/// A map keyed by [`TypeId`].
pub(crate) type TypeIdMap<V> = HashMap<TypeId, V, FixedState>;

/// A map keyed by field or case names.
pub(crate) type NameMap<V> = HashMap<&'static str, V, FixedState>;
