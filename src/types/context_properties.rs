//! Context property lists.

use crate::ffi::cl_context_properties;
use crate::error::{ApiWrapperError, Result};
use crate::types::abs::{ComputePlatform, ContextProperty};
use crate::types::enums::ContextPropertyKey;

/// A list of context properties as passed to `clCreateContext`.
///
/// Each key appears at most once; setting a key again replaces the earlier
/// value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContextProperties(Vec<ContextProperty>);

impl ContextProperties {
    /// Returns an empty new list of context properties.
    pub fn new() -> ContextProperties {
        ContextProperties(Vec::with_capacity(4))
    }

    /// Specifies a platform (builder-style).
    pub fn platform(mut self, platform: ComputePlatform) -> ContextProperties {
        self.set(ContextProperty::platform(platform));
        self
    }

    /// Specifies whether the user is responsible for synchronization between
    /// OpenCL and other APIs (builder-style).
    pub fn interop_user_sync(mut self, sync: bool) -> ContextProperties {
        self.set(ContextProperty::interop_user_sync(sync));
        self
    }

    /// Adds an arbitrary property (builder-style).
    pub fn property(mut self, prop: ContextProperty) -> ContextProperties {
        self.set(prop);
        self
    }

    /// Adds or replaces `prop`. Terminator entries are ignored.
    pub fn set(&mut self, prop: ContextProperty) {
        if prop.is_terminator() {
            return;
        }
        match self.0.iter_mut().find(|p| p.key() == prop.key()) {
            Some(existing) => *existing = prop,
            None => self.0.push(prop),
        }
    }

    /// Returns a platform id or none.
    pub fn get_platform(&self) -> Option<ComputePlatform> {
        self.get(ContextPropertyKey::Platform as cl_context_properties)
            .map(|p| ComputePlatform::from_value(p.value() as usize))
    }

    /// Returns the property stored under `key`, if any.
    pub fn get(&self, key: cl_context_properties) -> Option<ContextProperty> {
        self.0.iter().find(|p| p.key() == key).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<ContextProperty> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts this list into the packed-word representation expected by
    /// `clCreateContext`: `[key, value, key, value, ..., 0]`.
    pub fn to_raw(&self) -> Vec<cl_context_properties> {
        let mut props_raw = Vec::with_capacity(self.0.len() * 2 + 1);

        for prop in self.0.iter() {
            props_raw.push(prop.key());
            props_raw.push(prop.value());
        }

        // Add a terminating 0:
        props_raw.push(0);
        props_raw
    }

    /// Parses a packed-word list, such as the result of a
    /// `CL_CONTEXT_PROPERTIES` query, stopping at the first zero key.
    ///
    /// A missing terminator is accepted. A key with no value is not.
    pub fn from_raw(raw: &[cl_context_properties]) -> Result<ContextProperties> {
        let mut props = ContextProperties::new();
        let mut words = raw.iter();

        while let Some(&key) = words.next() {
            if key == 0 {
                break;
            }
            let value = words.next()
                .ok_or(ApiWrapperError::MalformedContextProperties("property key without a value"))?;
            props.set(ContextProperty::new(key, *value));
        }

        Ok(props)
    }
}

impl From<Vec<ContextProperty>> for ContextProperties {
    fn from(props: Vec<ContextProperty>) -> ContextProperties {
        let mut list = ContextProperties::new();
        for prop in props {
            list.set(prop);
        }
        list
    }
}

impl<'a> IntoIterator for &'a ContextProperties {
    type Item = &'a ContextProperty;
    type IntoIter = std::slice::Iter<'a, ContextProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
