// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::LazyLock;

use crate::{
    interfaces::MatcherApi, regex_based_matcher::RegexBasedMatcher, string_util::keep_ascii_digits,
};

use super::helper_constants::{
    CN_LANDLINE_PATTERN, CN_MOBILE_PATTERN, COUNTRY_CODE_DESCRIPTOR_LENGTH, PLUS_SIGN,
};

static MATCHER: LazyLock<RegexBasedMatcher> = LazyLock::new(RegexBasedMatcher::new);

/// Strips every character that is not an ASCII digit. This is the form
/// numbers are stored in.
///
/// ```
/// assert_eq!(rphoneformat::digits_only("(010) 1234-5678"), "01012345678");
/// ```
pub fn digits_only(number: &str) -> String {
    keep_ascii_digits(number).into_owned()
}

/// Returns the four digit descriptor of a country code, left padded with
/// zeros: `"+86"` and `"86"` both give `"0086"`.
///
/// Codes that are already longer than four characters are returned without
/// the plus sign but otherwise untouched.
pub fn country_code_descriptor(code: &str) -> String {
    let code = code.replace(PLUS_SIGN, "");
    format!("{:0>width$}", code, width = COUNTRY_CODE_DESCRIPTOR_LENGTH)
}

/// Parses a country code back out of its descriptor by dropping the leading
/// zeros: `"0086"` gives `"86"`.
pub fn parse_country_code(descriptor: &str) -> String {
    descriptor.trim_start_matches('0').to_owned()
}

/// Checks whether the whole input is an 11 digit mainland China mobile
/// number. Separators are not allowed.
pub fn is_valid_mobile_phone_number(phone: &str) -> bool {
    MATCHER.match_number(phone, CN_MOBILE_PATTERN)
}

/// Checks whether the whole input is a mainland China landline number, with
/// or without a dash separated area code.
pub fn is_valid_phone_number(phone: &str) -> bool {
    MATCHER.match_number(phone, CN_LANDLINE_PATTERN)
}
