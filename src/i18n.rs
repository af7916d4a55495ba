//! Localization of labels and dates.

pub use smart_lists_i18n::*;
