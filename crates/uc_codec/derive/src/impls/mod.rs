// -----------------------------------------------------------------------------
// Modules

mod match_codec;

mod enum_kind;
mod native_kind;
mod struct_kind;

mod trait_decode;
mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_codec::match_codec_impls;

use enum_kind::impl_enum;
use native_kind::impl_native;
use struct_kind::impl_struct;
use trait_decode::impl_trait_decode;
use trait_reflect::impl_trait_reflect;
use trait_typed::impl_trait_typed;
