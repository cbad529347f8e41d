//! Status API records.
//!
//! Records only declare the fields the API documents; serde ignores anything
//! else. Missing fields and `null` collections decode to empty values.

/// Define a transparent list wrapper around `Vec<$item>`.
///
/// The wrapper derefs to a slice, iterates like the vector, and decodes
/// `null` as an empty list.
macro_rules! record_list {
    ($(#[$meta:meta])* $name:ident, $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name(pub Vec<$item>);

        impl std::ops::Deref for $name {
            type Target = [$item];

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }

        impl FromIterator<$item> for $name {
            fn from_iter<I: IntoIterator<Item = $item>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<$item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                crate::types::serde_helpers::null_as_default(deserializer).map(Self)
            }
        }
    };
}

mod comment;
mod incident;
mod region;
pub(crate) mod serde_helpers;
mod service;

pub use comment::{Comment, Comments};
pub use incident::{Incident, Incidents, Level};
pub use region::{Region, Regions, Zone, Zones};
pub use service::{Service, Services};
