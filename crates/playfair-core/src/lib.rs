//! # Playfair Core API
//!
//! A [`Cipher`] is built from a keyword and holds the 5x5 letter grid derived
//! from it. Text is cut into letter pairs, and each pair is moved through the
//! grid:
//! - both letters in one column: one row down (up when decoding)
//! - both letters in one row: one column right (left when decoding)
//! - otherwise: each letter takes the column of the other one
//!
//! This is a classical pen and paper cipher. It does not protect anything.
//!
//! # Usage Examples
//!
//! ## Show the grid of a keyword
//!
//! ```rust
//! let cipher = playfair_core::Cipher::new("playfairexample").expect("valid keyword");
//!
//! assert_eq!(
//!     cipher.render(),
//!     "p l a y f \ni r e x m \nb c d g h \nk n o q s \nt u v w z \n"
//! );
//! ```
//!
//! ## Encode and decode a message
//!
//! ```rust
//! use playfair_core::Cipher;
//!
//! let cipher = Cipher::new("playfairexample").expect("valid keyword");
//!
//! let secret = cipher
//!     .encode("Hide the gold in the tree stump")
//!     .expect("Failed to encode");
//! assert_eq!(secret, "bmodzbxdnabekudmuixmmouvif");
//!
//! let plain = cipher.decode(&secret).expect("Failed to decode");
//! assert_eq!(plain, "hidethegoldinthetrexestump");
//! ```

#![warn(clippy::redundant_else)]

pub mod alphabet;
pub mod cipher;
pub mod commands;
pub mod digraph;
pub mod error;
pub mod grid;
pub mod keyword;

pub use crate::alphabet::Letter;
pub use crate::cipher::Cipher;
pub use crate::digraph::{segment, Digraph};
pub use crate::error::{Operation, PlayfairError, Result};
pub use crate::grid::{Grid, Position};
pub use crate::keyword::Keyword;
