use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A named runtime capability and whether the host supports it.
///
/// Identity is the `(name, supported)` pair: two flags with the same name but
/// different support values are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureFlag {
    pub name: String,
    pub supported: bool,
}

impl FeatureFlag {
    pub fn new(name: impl Into<String>, supported: bool) -> Self {
        Self { name: name.into(), supported }
    }

    pub fn supported(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }
}

/// Insertion-ordered set of [`FeatureFlag`]s, deduplicated by identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    flags: IndexSet<FeatureFlag, FxBuildHasher>,
}

impl FeatureSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a flag, returning `false` if an identical flag was already present.
    pub fn insert(&mut self, flag: FeatureFlag) -> bool {
        self.flags.insert(flag)
    }

    #[must_use]
    pub fn contains(&self, flag: &FeatureFlag) -> bool {
        self.flags.contains(flag)
    }

    /// Returns the flags of `self` followed by the flags of `other` not already in `self`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.extend(other.iter().cloned());
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureFlag> {
        self.flags.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl Extend<FeatureFlag> for FeatureSet {
    fn extend<I: IntoIterator<Item = FeatureFlag>>(&mut self, iter: I) {
        self.flags.extend(iter);
    }
}

impl FromIterator<FeatureFlag> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = FeatureFlag>>(iter: I) -> Self {
        Self { flags: iter.into_iter().collect() }
    }
}

impl<const N: usize> From<[FeatureFlag; N]> for FeatureSet {
    fn from(flags: [FeatureFlag; N]) -> Self {
        flags.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a FeatureSet {
    type Item = &'a FeatureFlag;
    type IntoIter = indexmap::set::Iter<'a, FeatureFlag>;

    fn into_iter(self) -> Self::IntoIter {
        self.flags.iter()
    }
}

impl IntoIterator for FeatureSet {
    type Item = FeatureFlag;
    type IntoIter = indexmap::set::IntoIter<FeatureFlag>;

    fn into_iter(self) -> Self::IntoIter {
        self.flags.into_iter()
    }
}

impl Serialize for FeatureSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.flags)
    }
}

/// Accepts either a list of `{ name, supported }` objects or a `{ name: bool }` map.
#[derive(Deserialize)]
#[serde(untagged)]
enum FeatureSetRepr {
    List(Vec<FeatureFlag>),
    Map(IndexMap<String, bool, FxBuildHasher>),
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match FeatureSetRepr::deserialize(deserializer)? {
            FeatureSetRepr::List(flags) => flags.into_iter().collect(),
            FeatureSetRepr::Map(map) => {
                map.into_iter().map(|(name, supported)| FeatureFlag::new(name, supported)).collect()
            },
        })
    }
}
