//! Identifier types for Stripe resources.
//!
//! Each identifier is an opaque string issued by Stripe. One call in the chain
//! produces it and the next call consumes it; none are persisted.
//!
//! # Macro-based ID Types
//!
//! The `stripe_id_type!` macro keeps the newtypes consistent: transparent
//! serialization, `Display`, `AsRef<str>` and conversions from owned strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a string-backed Stripe identifier type.
///
/// This macro generates a newtype wrapper around `String` with implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `Serialize`, `Deserialize` (as a bare string)
/// - `Display`, `Debug`
/// - `From<String>`, `From<&str>`, `AsRef<str>`
macro_rules! stripe_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the identifier, returning the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

stripe_id_type!(ProductId, "A Stripe product identifier (`prod_...`).");
stripe_id_type!(PriceId, "A Stripe price identifier (`price_...`).\n\nA price references a product and carries currency and amount.");
stripe_id_type!(CustomerId, "A Stripe customer identifier (`cus_...`).");
stripe_id_type!(CheckoutUrl, "URL of a Stripe-hosted checkout session page.\n\nThis is the value handed back to the caller on success.");
