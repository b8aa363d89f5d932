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

use thiserror::Error;

/// Reasons a string is rejected as a country calling code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountryCodeError {
    /// Nothing but (optionally) a plus sign was given.
    #[error("Country code is empty")]
    Empty,
    /// Something other than an ASCII digit follows the plus sign.
    #[error("Invalid character {character:?} at position {position} of country code")]
    InvalidCharacter { character: char, position: usize },
    /// Calling codes have at most three digits.
    #[error("Country code has {len} digits, at most {max} are allowed")]
    TooLong { len: usize, max: usize },
}
