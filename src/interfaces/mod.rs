/// Internal pattern matching API used to isolate the regex engine behind the
/// validity checks and allow different implementations to be swapped in.
pub(crate) trait MatcherApi {
    /// Returns whether the whole of `number` matches `pattern`. A pattern that
    /// cannot be compiled never matches.
    fn match_number(&self, number: &str, pattern: &str) -> bool;
}

/// A display formatting strategy for phone numbers of one country.
///
/// Formatting never fails: input that a strategy cannot make sense of is
/// degraded (digits only or passed through) rather than rejected.
pub trait PhoneFormatter {
    fn format(&self, phone_number: &str) -> String;
}
