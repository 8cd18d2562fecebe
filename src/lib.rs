//! # packmap
//!
//! Support types for web applications: an ordered container with mixed
//! string-or-integer keys (`Package`), the countable/iterable container
//! contract it satisfies (`Arrayable`), and the mail failure taxonomy of the
//! surrounding system (`MailError`).
//!
//! `Package` unifies positional and named access in a single container.
//! Entries keep insertion order, integer and string keys never collide, and
//! every read is total: an absent key yields `None` or a caller-supplied
//! default rather than an error.
//!
//! ## Key Features
//!
//! - **Ordered**: iteration follows insertion order; overwriting a key keeps
//!   its original position
//! - **Mixed keys**: `1` and `"1"` are two different keys that can coexist
//! - **Positional access**: unkeyed values receive auto-incrementing integer
//!   keys, the way a sequential array assigns them
//! - **Consuming reads**: `unpack` returns a value and removes it in one step,
//!   with an optional default for absent keys
//! - **Contract-based**: any caller that only knows `Arrayable` can count,
//!   enumerate, and flatten the container
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use packmap::Package;
//!
//! let mut pkg = Package::new();
//! pkg.pack("title", "Welcome".to_string());
//! pkg.pack("body", "Hello, world!".to_string());
//!
//! assert_eq!(pkg.item("title").map(String::as_str), Some("Welcome"));
//! assert_eq!(pkg.item("missing"), None);
//! assert_eq!(pkg.len(), 2);
//! ```
//!
//! ### Positional Values and Mixed Keys
//!
//! ```rust
//! use packmap::Package;
//!
//! let mut pkg = Package::from_values(["first", "second"]);
//! pkg.pack("label", "third");
//!
//! // Overwriting keeps the original position
//! pkg.pack(1, "replaced");
//! let keys: Vec<String> = pkg.iter().map(|(k, _)| k.to_string()).collect();
//! assert_eq!(keys, ["0", "1", "label"]);
//!
//! // Integer 1 and string "1" address different entries
//! pkg.pack("1", "named one");
//! assert_eq!(pkg.len(), 4);
//! ```
//!
//! ### Consuming Reads
//!
//! ```rust
//! use packmap::Package;
//!
//! let mut flash = Package::new();
//! flash.pack("notice", "profile saved");
//!
//! // The first read consumes the entry
//! assert_eq!(flash.unpack("notice"), Some("profile saved"));
//! assert_eq!(flash.unpack_or("notice", "nothing to show"), "nothing to show");
//! assert!(flash.is_empty());
//! ```
//!
//! ### The Arrayable Contract
//!
//! ```rust
//! use packmap::{Arrayable, Package};
//!
//! fn render<C>(container: &C) -> Vec<String>
//! where
//!     C: Arrayable,
//!     C::Key: std::fmt::Display,
//!     C::Value: std::fmt::Display,
//! {
//!     container
//!         .to_array()
//!         .into_iter()
//!         .map(|(key, value)| format!("{}={}", key, value))
//!         .collect()
//! }
//!
//! let mut pkg = Package::new();
//! pkg.pack("a", 1);
//! pkg.pack("b", 2);
//!
//! assert_eq!(render(&pkg), ["a=1", "b=2"]);
//! ```
//!
//! ## Serde
//!
//! With the `serde` feature enabled, `Key` serializes untagged (integer or
//! string) and `Package` serializes as a map in iteration order.

mod arrayable;
mod error;
mod key;
mod package;

#[cfg(feature = "serde")]
mod ser;

pub use arrayable::Arrayable;
pub use error::MailError;
pub use key::Key;
pub use package::{Iter, Package};
