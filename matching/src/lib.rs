//! Cross-validation of extracted document fields against user-entered data.
//!
//! Document number and dates compare by canonicalized exact equality; the
//! full name compares by edit-distance similarity. Fields absent from
//! extraction are not compared — neither a pass nor a fail.

pub mod canonical;
pub mod distance;
pub mod validator;

pub use canonical::canonicalize;
pub use distance::{edit_distance, similarity};
pub use validator::{CrossValidator, FieldMatchResult};
