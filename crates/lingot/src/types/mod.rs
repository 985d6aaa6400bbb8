mod count_range;
mod direction;
mod gender;
mod language_range;
mod message;
mod specifier;
mod value;

pub use count_range::{CountRange, InvalidCountRange};
pub use direction::{LanguageDirection, language_direction};
pub use gender::{Gender, InvalidGender};
pub use language_range::LanguageRange;
pub use message::{BASIC_ENGINE_ID, TranslationMessage, TranslationTemplate};
pub use specifier::TranslationSpecifier;
pub use value::Value;
