/// Calling code of mainland China, in canonical form.
pub const CN: &'static str = "+86";
pub const CN_CALLING_CODE: u16 = 86;

pub const PLUS_SIGN: &'static str = "+";

/// The maximum length of the country calling code, without the plus sign.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
/// Width of a country code descriptor, e.g. "0086".
pub const COUNTRY_CODE_DESCRIPTOR_LENGTH: usize = 4;

// Chinese numbers are displayed as 3-4-4 groups: a space goes before the
// digit at each of these positions, the later one first.
pub const CN_FIRST_GROUP_END: usize = 3;
pub const CN_SECOND_GROUP_END: usize = 7;
pub const CN_FORMATTED_MAX_LENGTH: usize = 13;

// Mobile prefixes handed out by the operators. New number segments have to be
// added here when they are released.
pub const CN_MOBILE_PATTERN: &'static str = r"^(13[0-9]|14[57]|15[0-35-9]|18[0-35-9])\d{8}$";

// Landline number with an optional 3-4 digit area code, e.g. 010-12345678.
// The first alternative only accepts an opening parenthesis, the area code
// and a dash ("(010-"); nothing may follow it.
pub const CN_LANDLINE_PATTERN: &'static str = r"^(\(\d{3,4}-)|(\d{3,4}-)?\d{7,8}$";
