mod interfaces;
mod phoneformatter;
mod regexp_cache;
mod regex_based_matcher;
pub(crate) mod regex_util;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::PhoneFormatter;
pub use phoneformatter::{
    country_code_descriptor, digits_only, is_valid_mobile_phone_number, is_valid_phone_number,
    parse_country_code, resolve, ChinaFormatter, CountryCode, CountryCodeError, Formatter,
    GenericFormatter, CN,
};
