use alloc::boxed::Box;
use core::any::TypeId;
use core::slice::Iter;

use crate::info::{CaseInfo, Typed};
use crate::registry::{Customization, NameMap};

/// A container for compile-time sum (enum) info.
#[derive(Debug)]
pub struct SumInfo {
    type_path: &'static str,
    type_id: TypeId,
    cases: Box<[CaseInfo]>,
    case_indices: NameMap<usize>,
    customization: Option<Customization>,
}

impl SumInfo {
    /// Create a new [`SumInfo`]. `cases` must be in declaration order so
    /// that a case's position equals its tag.
    pub fn new<T: Typed>(cases: &[CaseInfo]) -> Self {
        debug_assert!(
            cases.iter().enumerate().all(|(index, case)| case.tag() == index),
            "case tags must equal their declaration index"
        );

        let case_indices = cases
            .iter()
            .enumerate()
            .map(|(index, case)| (case.name(), index))
            .collect();

        Self {
            type_path: core::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
            cases: cases.to_vec().into_boxed_slice(),
            case_indices,
            customization: None,
        }
    }

    /// Attach the customization the type declares for itself.
    #[inline]
    pub fn with_customization(self, customization: Customization) -> Self {
        Self {
            customization: Some(customization),
            ..self
        }
    }

    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the case with the given name.
    pub fn case(&self, name: &str) -> Option<&CaseInfo> {
        self.case_indices.get(name).map(|&index| &self.cases[index])
    }

    /// Returns the case with the given tag.
    #[inline]
    pub fn case_at(&self, tag: usize) -> Option<&CaseInfo> {
        self.cases.get(tag)
    }

    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.case_indices.get(name).copied()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, CaseInfo> {
        self.cases.iter()
    }

    #[inline]
    pub fn case_len(&self) -> usize {
        self.cases.len()
    }

    #[inline]
    pub fn customization(&self) -> Option<&Customization> {
        self.customization.as_ref()
    }
}
