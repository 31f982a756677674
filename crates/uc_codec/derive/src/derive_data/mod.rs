//! Provide some tools for parsing the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod codec_derive;
mod codec_enum;
mod codec_field;
mod codec_meta;
mod codec_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};

pub(crate) use codec_derive::CodecDerive;
pub(crate) use codec_enum::{CodecEnum, CodecVariant};
pub(crate) use codec_field::{CodecField, FieldsKind};
pub(crate) use codec_meta::{CodecMeta, FieldBound};
pub(crate) use codec_struct::CodecStruct;
