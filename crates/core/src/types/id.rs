//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `generate()`, `as_str()`
/// - `From<&str>`, `From<String>` and `Into<String>` implementations
///
/// IDs are opaque strings: seed content uses readable slugs
/// (`garden-maintenance`), records created at runtime get a UUID v4.
///
/// # Example
///
/// ```rust
/// # use pnm_gardeners_core::define_id;
/// define_id!(QuoteId);
/// define_id!(ContactId);
///
/// let quote_id = QuoteId::new("1");
/// let contact_id = ContactId::new("1");
///
/// // These are different types, so this won't compile:
/// // let _: QuoteId = contact_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh random ID.
            #[must_use]
            pub fn generate() -> Self {
                Self(::uuid::Uuid::new_v4().to_string())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ServiceId);
define_id!(ReviewId);
define_id!(GalleryImageId);
define_id!(PhotoId);
define_id!(QuoteId);
define_id!(ContactId);
define_id!(FaqId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = QuoteId::generate();
        let b = QuoteId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_serializes_transparently() {
        let id = ServiceId::new("garden-maintenance");
        let json = serde_json::to_string(&id).unwrap_or_default();
        assert_eq!(json, "\"garden-maintenance\"");
    }

    #[test]
    fn test_display_matches_inner() {
        let id = ReviewId::from("42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(String::from(id), "42");
    }
}
