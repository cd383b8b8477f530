//! Group address to datapoint type lookup.
//!
//! Group telegrams do not say how their payload is encoded. The parser asks a
//! [`DptLookup`] for the type of each destination and only falls back to the
//! length heuristic of [`dpt::decode`](crate::dpt::decode) when the lookup
//! has no entry.
//!
//! [`DptStore`] is the default lookup. With the `serde` feature it loads and
//! saves itself as a JSON object mapping addresses to type names:
//!
//! ```json
//! { "1/2/3": "DPT9", "1/2/4": "DPT1" }
//! ```

use std::collections::{btree_map, BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::addressing::GroupAddress;
use crate::dpt::DatapointType;
#[cfg(feature = "serde")]
use crate::error::{KnxError, Result};

/// Source of datapoint types for group addresses
pub trait DptLookup {
    /// Configured type of `address`, if any
    fn get(&self, address: GroupAddress) -> Option<DatapointType>;
}

impl<T: DptLookup + ?Sized> DptLookup for &T {
    fn get(&self, address: GroupAddress) -> Option<DatapointType> {
        (**self).get(address)
    }
}

impl<S: BuildHasher> DptLookup for HashMap<GroupAddress, DatapointType, S> {
    fn get(&self, address: GroupAddress) -> Option<DatapointType> {
        HashMap::get(self, &address).copied()
    }
}

impl DptLookup for BTreeMap<GroupAddress, DatapointType> {
    fn get(&self, address: GroupAddress) -> Option<DatapointType> {
        BTreeMap::get(self, &address).copied()
    }
}

/// Ordered table of group address types.
///
/// # Examples
///
/// ```rust
/// use knx_groupsocket::{ga, DatapointType, DptStore};
///
/// let mut store = DptStore::new();
/// store.set(ga!(1/2/3), DatapointType::Dpt9);
/// assert_eq!(store.get(ga!(1/2/3)), Some(DatapointType::Dpt9));
/// assert_eq!(store.get(ga!(1/2/4)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DptStore {
    entries: BTreeMap<GroupAddress, DatapointType>,
}

impl DptStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Configured type of `address`
    pub fn get(&self, address: GroupAddress) -> Option<DatapointType> {
        self.entries.get(&address).copied()
    }

    /// Set the type of `address`, returning the previous one
    pub fn set(&mut self, address: GroupAddress, dpt: DatapointType) -> Option<DatapointType> {
        self.entries.insert(address, dpt)
    }

    /// Forget the type of `address`, returning it
    pub fn remove(&mut self, address: GroupAddress) -> Option<DatapointType> {
        self.entries.remove(&address)
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of configured addresses
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no address is configured
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending address order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Load the table from a JSON object such as `{"1/2/3": "DPT9"}`.
    ///
    /// The loaded entries replace the whole table. Returns the number of
    /// entries now configured. On error the table is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a store parse error for malformed JSON or unknown type names,
    /// and an addressing error for keys that are not group addresses.
    #[cfg(feature = "serde")]
    pub fn fill(&mut self, json: &str) -> Result<usize> {
        let raw: BTreeMap<String, DatapointType> =
            serde_json::from_str(json).map_err(|_json| KnxError::store_parse())?;

        self.entries = raw
            .into_iter()
            .map(|(address, dpt)| Ok((address.parse::<GroupAddress>()?, dpt)))
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(self.entries.len())
    }

    /// Serialize the table as a JSON object keyed by 3-level addresses.
    ///
    /// # Errors
    ///
    /// Returns a store serialize error if JSON encoding fails.
    #[cfg(feature = "serde")]
    pub fn dump(&self) -> Result<String> {
        let raw: BTreeMap<String, DatapointType> = self
            .entries
            .iter()
            .map(|(address, dpt)| (address.to_string(), *dpt))
            .collect();

        serde_json::to_string(&raw).map_err(|_json| KnxError::store_serialize())
    }
}

impl DptLookup for DptStore {
    fn get(&self, address: GroupAddress) -> Option<DatapointType> {
        DptStore::get(self, address)
    }
}

impl FromIterator<(GroupAddress, DatapointType)> for DptStore {
    fn from_iter<I: IntoIterator<Item = (GroupAddress, DatapointType)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(GroupAddress, DatapointType)> for DptStore {
    fn extend<I: IntoIterator<Item = (GroupAddress, DatapointType)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

/// Iterator over [`DptStore`] entries
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, GroupAddress, DatapointType>,
}

impl Iterator for Iter<'_> {
    type Item = (GroupAddress, DatapointType);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(address, dpt)| (*address, *dpt))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a DptStore {
    type Item = (GroupAddress, DatapointType);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
