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

use log::trace;

use crate::interfaces::PhoneFormatter;

use super::{
    country_code::CountryCode,
    helper_constants::{
        CN_CALLING_CODE, CN_FIRST_GROUP_END, CN_FORMATTED_MAX_LENGTH, CN_SECOND_GROUP_END,
    },
    helper_functions::digits_only,
    international::format_international,
};

static CN_COUNTRY_CODE: LazyLock<CountryCode> =
    LazyLock::new(|| CountryCode::from_calling_code(CN_CALLING_CODE));

/// Picks the formatter for a country calling code. The plus sign may be
/// omitted, so `Some("86")` and `Some("+86")` both give [`Formatter::China`].
///
/// Unknown, empty and missing codes give a [`Formatter::Generic`].
pub fn resolve(country_code: Option<&str>) -> Formatter {
    Formatter::for_country_code(country_code.and_then(CountryCode::normalize))
}

/// Formatting strategy chosen by country code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatter {
    China(ChinaFormatter),
    Generic(GenericFormatter),
}

impl Formatter {
    pub fn for_country_code(country_code: Option<CountryCode>) -> Self {
        match country_code {
            Some(code) if code.is_china() => {
                trace!("Using China formatter for {}", code);
                Formatter::China(ChinaFormatter)
            }
            other => {
                trace!("Using generic formatter for {:?}", other);
                Formatter::Generic(GenericFormatter::new(other))
            }
        }
    }

    pub fn country_code(&self) -> Option<&CountryCode> {
        match self {
            Formatter::China(formatter) => Some(formatter.country_code()),
            Formatter::Generic(formatter) => formatter.country_code(),
        }
    }
}

impl PhoneFormatter for Formatter {
    fn format(&self, phone_number: &str) -> String {
        match self {
            Formatter::China(formatter) => formatter.format(phone_number),
            Formatter::Generic(formatter) => formatter.format(phone_number),
        }
    }
}

/// Groups mainland China numbers as `3 4 4`, e.g. `138 0013 8000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChinaFormatter;

impl ChinaFormatter {
    pub fn country_code(&self) -> &'static CountryCode {
        &CN_COUNTRY_CODE
    }
}

impl PhoneFormatter for ChinaFormatter {
    fn format(&self, phone_number: &str) -> String {
        let mut formatted = digits_only(phone_number);

        // The second break goes in first so the first one does not shift it.
        // The length check for the first break sees the already widened string.
        if formatted.len() > CN_SECOND_GROUP_END {
            formatted.insert(CN_SECOND_GROUP_END, ' ');
        }
        if formatted.len() > CN_FIRST_GROUP_END {
            formatted.insert(CN_FIRST_GROUP_END, ' ');
        }

        let mut formatted = formatted.trim().to_owned();
        // only ASCII left, byte length equals char count
        formatted.truncate(CN_FORMATTED_MAX_LENGTH);
        formatted
    }
}

/// Formats numbers of any other country with libphonenumber and drops the
/// country code from the result. Without a country code it only strips the
/// number down to its digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericFormatter {
    country_code: Option<CountryCode>,
}

impl GenericFormatter {
    pub fn new(country_code: Option<CountryCode>) -> Self {
        Self { country_code }
    }

    pub fn country_code(&self) -> Option<&CountryCode> {
        self.country_code.as_ref()
    }
}

impl PhoneFormatter for GenericFormatter {
    fn format(&self, phone_number: &str) -> String {
        let Some(country_code) = &self.country_code else {
            return digits_only(phone_number);
        };
        let full_number = fast_cat::concat_str!(country_code.as_str(), phone_number);
        // literal removal, the leading '+' is not a pattern
        format_international(&full_number).replace(country_code.as_str(), "")
    }
}
