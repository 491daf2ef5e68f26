//! Profile fields shown on the home page.
//!
//! All fields are free-form display text and always overwritable, including
//! with blank values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFields {
    pub name: String,
    pub location: String,
    pub field_of_study: String,
    pub university: String,
    pub bio: String,
}
