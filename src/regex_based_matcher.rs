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

use log::error;

use crate::{
    interfaces,
    regex_util::full_match_pattern,
    regexp_cache::{InvalidRegexError, RegexCache},
};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(8) }
    }

    fn full_match(&self, phone_number: &str, number_pattern: &str) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_regex(&full_match_pattern(number_pattern))?;
        Ok(regexp.is_match(phone_number))
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_number(&self, number: &str, pattern: &str) -> bool {
        // Empty pattern would accept only the empty string, which is never a
        // phone number.
        if pattern.is_empty() {
            return false;
        }
        match self.full_match(number, pattern) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex! {}: {}", pattern, err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RegexBasedMatcher;
    use crate::interfaces::MatcherApi;

    #[test]
    fn broken_pattern_never_matches() {
        let matcher = RegexBasedMatcher::new();
        assert!(!matcher.match_number("123", r"(\d+"));
        assert!(!matcher.match_number("", ""));
    }

    #[test]
    fn matches_whole_input_only() {
        let matcher = RegexBasedMatcher::new();
        assert!(matcher.match_number("12345", r"\d{5}"));
        assert!(!matcher.match_number("123456", r"\d{5}"));
        assert!(!matcher.match_number("x12345", r"\d{5}"));
    }
}
