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

use std::{fmt, str::FromStr};

use crate::string_util::ensure_prefix;

use super::{
    errors::CountryCodeError,
    helper_constants::{CN, MAX_LENGTH_COUNTRY_CODE, PLUS_SIGN},
    helper_functions::{country_code_descriptor, parse_country_code},
};

/// A country calling code in its canonical `+<digits>` form, e.g. `+86`.
///
/// [`CountryCode::normalize`] only makes sure the plus sign is there and
/// accepts anything else, which is what formatter resolution needs. The
/// [`FromStr`] implementation additionally checks that the code is made of
/// one to three digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Prepends the plus sign if it is missing. Returns `None` for an empty
    /// string.
    pub fn normalize(code: &str) -> Option<Self> {
        if code.is_empty() {
            return None;
        }
        Some(Self(ensure_prefix(code, PLUS_SIGN).into_owned()))
    }

    pub fn from_calling_code(calling_code: u16) -> Self {
        let mut buf = itoa::Buffer::new();
        let calling_code_str = buf.format(calling_code);
        Self(fast_cat::concat_str!(PLUS_SIGN, calling_code_str))
    }

    /// Inverse of [`CountryCode::descriptor`]: `"0086"` gives `+86`.
    pub fn from_descriptor(descriptor: &str) -> Result<Self, CountryCodeError> {
        parse_country_code(descriptor).parse()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits of the code without the plus sign.
    pub fn calling_code(&self) -> &str {
        self.0.strip_prefix(PLUS_SIGN).unwrap_or(self.0.as_str())
    }

    /// Four digit zero padded form, e.g. `0086`.
    pub fn descriptor(&self) -> String {
        country_code_descriptor(&self.0)
    }

    pub fn is_china(&self) -> bool {
        self.0 == CN
    }
}

impl FromStr for CountryCode {
    type Err = CountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = Self::normalize(s).ok_or(CountryCodeError::Empty)?;
        let digits = code.calling_code();
        if digits.is_empty() {
            return Err(CountryCodeError::Empty);
        }
        // position is counted in the normalized code, after the plus sign
        if let Some((position, character)) = digits
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(CountryCodeError::InvalidCharacter {
                character,
                position: position + PLUS_SIGN.len(),
            });
        }
        if digits.len() > MAX_LENGTH_COUNTRY_CODE {
            return Err(CountryCodeError::TooLong {
                len: digits.len(),
                max: MAX_LENGTH_COUNTRY_CODE,
            });
        }
        Ok(code)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
