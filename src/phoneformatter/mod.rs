mod helper_constants;
mod helper_functions;
mod international;
pub mod country_code;
pub mod errors;
pub mod formatters;

pub use country_code::CountryCode;
pub use errors::CountryCodeError;
pub use formatters::{resolve, ChinaFormatter, Formatter, GenericFormatter};
pub use helper_constants::CN;
pub use helper_functions::{
    country_code_descriptor, digits_only, is_valid_mobile_phone_number, is_valid_phone_number,
    parse_country_code,
};
