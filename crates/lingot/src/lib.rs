//! Localization messages with language, gender, count and attribute variants.
//!
//! Messages are written one per line as `name#tag[metadata] = template`:
//!
//! ```text
//! # count ranges and genders
//! items#en[0]        = No items
//! items#en[1]        = One item
//! items#en[2..10]    = A few items
//! items#en[11..infinity] = {count} items
//! welcome#ar-SA[F]   = AR SA F {name}
//! # attributes use `-`, `:`, `|` or `=`
//! greeting#en[tone-formal] = Good evening, {name}.
//! ```
//!
//! A [`MessageStore`] indexes parsed messages and answers a
//! [`TranslationSpecifier`] with the best variant, which is then rendered
//! against parameters.
//!
//! ```
//! use lingot::{MessageStore, TranslationSpecifier, params};
//! use lingot::parser::SourceOptions;
//!
//! let mut store = MessageStore::new();
//! store
//!     .load_source(
//!         "items#en[1] = One item\nitems#en[2..infinity] = {count} items",
//!         &SourceOptions::default(),
//!     )
//!     .unwrap();
//!
//! let request = TranslationSpecifier::new("items").with_language("en").with_count(4);
//! let text = store.translate(&request, &params! { "count" => 4 }).unwrap();
//! assert_eq!(text.as_deref(), Some("4 items"));
//! ```

pub mod parser;
pub mod runtime;
pub mod types;

pub use parser::{ParseError, SourceOptions, parse_source};
pub use runtime::{LoadError, MessageStore, RenderError, Segment};
pub use types::{
    BASIC_ENGINE_ID, CountRange, Gender, LanguageDirection, LanguageRange, TranslationMessage,
    TranslationSpecifier, TranslationTemplate, Value, language_direction,
};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats and strings
/// can be passed directly.
///
/// # Example
///
/// ```
/// use lingot::{params, Value};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
