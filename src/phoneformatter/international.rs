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

use std::borrow::Cow;

use log::debug;
use phonenumber::Mode;

/// Groups a full international number (`+<country code><number>`) the way
/// it is written in its region, e.g. `+44 20 7946 0958`.
///
/// Input libphonenumber cannot parse is returned as `Cow::Borrowed`.
pub(super) fn format_international(number: &str) -> Cow<'_, str> {
    match phonenumber::parse(None, number) {
        Ok(parsed) => Cow::Owned(phonenumber::format(&parsed).mode(Mode::International).to_string()),
        Err(err) => {
            debug!("Could not parse {:?} for formatting, passing it through: {}", number, err);
            Cow::Borrowed(number)
        }
    }
}
