//! Form field definitions.

mod checkbox;
mod nested;
mod select;
mod text;

pub use checkbox::{boolean_field, consent_field};
pub use nested::{array_field, object_field};
pub use select::{choice_field, literal_field};
pub use text::{char_field, date_field, email_field, password_field, text_field};
