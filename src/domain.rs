//! Attribute domains and one-hot encoding.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Selector,
    error::{Error, Result}
};

/// # Overview
///
/// Ordered value lists for every attribute.
///
/// The position of a value inside its domain is the bit index used by all
/// encoded vectors and selectors, so the lists are fixed at construction
/// and never reordered.
///
/// # Examples
///
/// ```
/// use aq_rs::DomainRegistry;
///
/// let registry = DomainRegistry::new(vec![
///     vec!["sunny", "overcast", "rain"],
///     vec!["hot", "mild", "cool"],
/// ])
/// .unwrap();
///
/// let encoded = registry.encode(&"mild", 1).unwrap();
/// assert!(encoded.bit(1));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DomainRegistry<V> {
    domains: Vec<Vec<V>>
}

impl<V: PartialEq> DomainRegistry<V> {
    /// # Overview
    ///
    /// Creates a registry from per-attribute value lists.
    ///
    /// # Errors
    ///
    /// [`Error::NoDomains`] when `domains` is empty, [`Error::EmptyDomain`]
    /// when any value list is empty.
    pub fn new(domains: Vec<Vec<V>>) -> Result<Self> {
        if domains.is_empty() {
            return Err(Error::NoDomains);
        }
        for (attribute, domain) in domains.iter().enumerate() {
            if domain.is_empty() {
                return Err(Error::EmptyDomain {
                    attribute
                });
            }
        }
        Ok(Self {
            domains
        })
    }

    #[inline]
    #[must_use]
    pub fn n_attributes(&self) -> usize {
        self.domains.len()
    }

    /// # Overview
    ///
    /// Domain size of one attribute, i.e. the width of its selectors.
    #[inline]
    #[must_use]
    pub fn width(&self, attribute: usize) -> usize {
        self.domains[attribute].len()
    }

    /// # Overview
    ///
    /// Widths of all attribute domains in order.
    pub fn widths(&self) -> impl Iterator<Item = usize> + '_ {
        self.domains.iter().map(Vec::len)
    }

    /// # Overview
    ///
    /// Encodes one attribute value as a one-hot selector.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownValue`] when the value is absent from the attribute's
    /// domain. Unknown values are never mapped to an empty bit pattern; that
    /// would make the covering test accept them vacuously.
    pub fn encode(&self, value: &V, attribute: usize) -> Result<Selector> {
        let domain = &self.domains[attribute];
        let position = domain.iter().position(|v| v == value).ok_or(Error::UnknownValue {
            attribute
        })?;
        Ok(Selector::one_hot(domain.len(), position))
    }

    /// # Overview
    ///
    /// Encodes a full attribute row, checking arity first.
    pub fn encode_row(&self, row: &[V]) -> Result<Vec<Selector>> {
        if row.len() != self.domains.len() {
            return Err(Error::ArityMismatch {
                expected: self.domains.len(),
                got:      row.len()
            });
        }
        row.iter().enumerate().map(|(i, value)| self.encode(value, i)).collect()
    }

    /// # Overview
    ///
    /// Looks up the value at a bit position, for rendering rules.
    #[must_use]
    pub fn value(&self, attribute: usize, bit: usize) -> Option<&V> {
        self.domains.get(attribute).and_then(|domain| domain.get(bit))
    }
}
