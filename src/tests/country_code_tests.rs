use crate::{CountryCode, CountryCodeError};

#[test]
fn normalize_prepends_plus() {
    assert_eq!(CountryCode::normalize("86").unwrap().as_str(), "+86");
    assert_eq!(CountryCode::normalize("+86").unwrap().as_str(), "+86");
    assert_eq!(CountryCode::normalize(""), None);
    // lenient, no validation
    assert_eq!(CountryCode::normalize("+").unwrap().as_str(), "+");
    assert_eq!(CountryCode::normalize("abc").unwrap().as_str(), "+abc");
}

#[test]
fn parse_accepts_calling_codes() {
    let code: CountryCode = "86".parse().unwrap();
    assert_eq!(code.as_str(), "+86");
    assert_eq!(code.calling_code(), "86");
    assert!(code.is_china());

    let code: CountryCode = "+852".parse().unwrap();
    assert_eq!(code.to_string(), "+852");
    assert!(!code.is_china());
}

#[test]
fn parse_rejects_malformed_codes() {
    assert_eq!("".parse::<CountryCode>(), Err(CountryCodeError::Empty));
    assert_eq!("+".parse::<CountryCode>(), Err(CountryCodeError::Empty));
    assert_eq!(
        "8a".parse::<CountryCode>(),
        Err(CountryCodeError::InvalidCharacter { character: 'a', position: 2 })
    );
    assert_eq!(
        "++86".parse::<CountryCode>(),
        Err(CountryCodeError::InvalidCharacter { character: '+', position: 1 })
    );
    assert_eq!(
        "1234".parse::<CountryCode>(),
        Err(CountryCodeError::TooLong { len: 4, max: 3 })
    );
}

#[test]
fn error_messages() {
    assert_eq!(CountryCodeError::Empty.to_string(), "Country code is empty");
    assert_eq!(
        CountryCodeError::TooLong { len: 4, max: 3 }.to_string(),
        "Country code has 4 digits, at most 3 are allowed"
    );
}

#[test]
fn calling_code_and_descriptor() {
    assert_eq!(CountryCode::from_calling_code(86).as_str(), "+86");
    assert_eq!(CountryCode::from_calling_code(1).descriptor(), "0001");
    assert_eq!(CountryCode::from_calling_code(852).descriptor(), "0852");

    assert_eq!(CountryCode::from_descriptor("0086"), Ok(CountryCode::from_calling_code(86)));
    assert_eq!(CountryCode::from_descriptor("0000"), Err(CountryCodeError::Empty));
}
