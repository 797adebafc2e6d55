//! Tests for the palette and its membership check.

use formbind::{FormValue, ValidatorSet, compose};
use swatch::{PALETTE_MEMBER, Swatch, SwatchError, palette_member};

#[test]
fn test_tokens_round_trip_through_strings() {
    for swatch in Swatch::ALL {
        assert_eq!(swatch.as_str().parse::<Swatch>(), Ok(swatch));
        assert_eq!(swatch.to_string(), swatch.as_str());
    }
}

#[test]
fn test_unknown_token() {
    assert_eq!(
        "purple".parse::<Swatch>(),
        Err(SwatchError::UnknownToken("purple".into()))
    );
    assert!("Red".parse::<Swatch>().is_err());
}

#[test]
fn test_from_value() {
    assert_eq!(Swatch::from_value(&FormValue::from("blue")), Some(Swatch::Blue));
    assert_eq!(Swatch::from_value(&FormValue::from("teal")), None);
    assert_eq!(Swatch::from_value(&FormValue::from(1i64)), None);
    assert_eq!(Swatch::from_value(&FormValue::Null), None);
    assert_eq!(FormValue::from(Swatch::Green), FormValue::from("green"));
}

#[test]
fn test_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Swatch::Red).unwrap(), r#""red""#);
    let parsed: Swatch = serde_json::from_str(r#""blue""#).unwrap();
    assert_eq!(parsed, Swatch::Blue);
}

#[test]
fn test_palette_member_check() {
    let check = palette_member();
    assert!(check.validate(&FormValue::Null).is_none());
    assert!(check.validate(&FormValue::from("")).is_none());
    assert!(check.validate(&FormValue::from("red")).is_none());

    let errors = check.validate(&FormValue::from("pink")).unwrap();
    assert!(errors.contains(PALETTE_MEMBER));
    assert!(check.validate(&FormValue::from(true)).is_some());
}

#[test]
fn test_palette_member_has_one_identity() {
    assert_eq!(palette_member(), palette_member());
    assert_eq!(palette_member().id(), palette_member().id());

    let set = compose(&ValidatorSet::new(), &palette_member());
    let set = compose(&set, &palette_member());
    assert_eq!(set.len(), 1);
}
