use crate::build::FieldSource;
use crate::codec::{Decode, Decoder};
use crate::info::{FieldInfo, TypeInfo};
use crate::registry::TypeRegistry;
use crate::wire::WireNode;
use crate::{CodecError, PathSegment};

/// A [`FieldSource`] that decodes the node a provider returns for each field.
///
/// See [`build`](crate::build::build).
pub struct NodeSource<'a, P> {
    registry: &'a TypeRegistry,
    provider: P,
}

impl<'a, P> NodeSource<'a, P>
where
    P: FnMut(&FieldInfo) -> Option<WireNode>,
{
    #[inline]
    pub fn new(registry: &'a TypeRegistry, provider: P) -> Self {
        Self { registry, provider }
    }
}

impl<P> FieldSource for NodeSource<'_, P>
where
    P: FnMut(&FieldInfo) -> Option<WireNode>,
{
    fn field<F: Decode>(&mut self, info: &FieldInfo) -> Result<F, CodecError> {
        let segment = match info.name() {
            Some(name) => PathSegment::Key(name.into()),
            None => PathSegment::Index(info.index()),
        };

        let node = match (self.provider)(info) {
            Some(node) => node,
            None if matches!(info.type_info(), TypeInfo::Optional(_)) => WireNode::NULL,
            None => return Err(CodecError::missing_field(info.key())),
        };

        F::decode(Decoder::new(node, self.registry)).map_err(|err| err.within(segment))
    }
}
