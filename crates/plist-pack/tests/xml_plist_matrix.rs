use chrono::TimeZone;
use plist_pack::{PlistValue, XmlError, XmlPlistDecoder, XmlPlistEncoder};

fn decode(text: &str) -> Result<PlistValue, XmlError> {
    XmlPlistDecoder::new().decode(text)
}

fn dict(fields: &[(&str, PlistValue)]) -> PlistValue {
    PlistValue::Dict(
        fields
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect(),
    )
}

#[test]
fn decodes_one_entry_dict_document() {
    let doc = r#"<plist version="1.0"><dict><key>n</key><integer>42</integer></dict></plist>"#;
    assert_eq!(
        decode(doc).unwrap(),
        dict(&[("n", PlistValue::Integer(42))])
    );
}

#[test]
fn decodes_full_document_with_declaration_and_doctype() {
    let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple Computer//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
  <dict>
    <key>name</key>
    <string>demo</string>
    <key>items</key>
    <array>
      <integer>1</integer>
      <real>2.5</real>
      <true/>
    </array>
  </dict>
</plist>"#;
    assert_eq!(
        decode(doc).unwrap(),
        dict(&[
            ("name", PlistValue::String("demo".into())),
            (
                "items",
                PlistValue::Array(vec![
                    PlistValue::Integer(1),
                    PlistValue::Real(2.5),
                    PlistValue::Bool(true),
                ])
            ),
        ])
    );
}

#[test]
fn scalar_leaf_matrix() {
    assert_eq!(
        decode("<plist><string>hello</string></plist>").unwrap(),
        PlistValue::String("hello".into())
    );
    assert_eq!(
        decode("<plist><string/></plist>").unwrap(),
        PlistValue::String(String::new())
    );
    assert_eq!(
        decode("<plist><integer>-7</integer></plist>").unwrap(),
        PlistValue::Integer(-7)
    );
    assert_eq!(
        decode("<plist><real>1.5</real></plist>").unwrap(),
        PlistValue::Real(1.5)
    );
    assert_eq!(
        decode("<plist><true/></plist>").unwrap(),
        PlistValue::Bool(true)
    );
    assert_eq!(
        decode("<plist><false></false></plist>").unwrap(),
        PlistValue::Bool(false)
    );
    assert_eq!(decode("<plist><null/></plist>").unwrap(), PlistValue::Null);
    assert_eq!(
        decode("<plist><data>3q2+7w==</data></plist>").unwrap(),
        PlistValue::Bytes(vec![0xDE, 0xAD, 0xBE, 0xEF])
    );
}

#[test]
fn date_parsing_normalizes_to_utc() {
    let utc = chrono::Utc.with_ymd_and_hms(2004, 6, 4, 10, 0, 0).unwrap();
    assert_eq!(
        decode("<plist><date>2004-06-04T10:00:00Z</date></plist>").unwrap(),
        PlistValue::Date(utc)
    );
    assert_eq!(
        decode("<plist><date>2004-06-04T12:00:00+02:00</date></plist>").unwrap(),
        PlistValue::Date(utc)
    );
    assert_eq!(
        decode("<plist><date>2004-06-04T10:00:00</date></plist>").unwrap(),
        PlistValue::Date(utc)
    );
}

#[test]
fn data_payload_may_be_wrapped() {
    let doc = "<plist><data>\n  3q2+\n  7w==\n</data></plist>";
    assert_eq!(
        decode(doc).unwrap(),
        PlistValue::Bytes(vec![0xDE, 0xAD, 0xBE, 0xEF])
    );
}

#[test]
fn escaped_text_roundtrips() {
    let value = PlistValue::String("a < b & \"c\"".into());
    let text = XmlPlistEncoder::new().encode(&value).unwrap();
    assert_eq!(decode(&text).unwrap(), value);
}

#[test]
fn null_children_are_dropped_from_containers() {
    assert_eq!(
        decode("<plist><array><integer>1</integer><null/><integer>2</integer></array></plist>")
            .unwrap(),
        PlistValue::Array(vec![PlistValue::Integer(1), PlistValue::Integer(2)])
    );
    assert_eq!(
        decode("<plist><dict><key>gone</key><null/><key>kept</key><integer>1</integer></dict></plist>")
            .unwrap(),
        dict(&[("kept", PlistValue::Integer(1))])
    );
}

#[test]
fn encoder_writes_apple_document_shape() {
    let text = XmlPlistEncoder::new()
        .encode(&dict(&[("n", PlistValue::Integer(42))]))
        .unwrap();
    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(text.contains("-//Apple Computer//DTD PLIST 1.0//EN"));
    assert!(text.contains("http://www.apple.com/DTDs/PropertyList-1.0.dtd"));
    assert!(text.contains("<plist version=\"1.0\">"));
    assert!(text.contains("<integer>42</integer>"));
    assert!(text.ends_with("</plist>"));
}

#[test]
fn encoder_element_matrix() {
    let mut encoder = XmlPlistEncoder::new();
    assert!(encoder
        .encode(&PlistValue::Bool(true))
        .unwrap()
        .contains("<true/>"));
    assert!(encoder
        .encode(&PlistValue::Bool(false))
        .unwrap()
        .contains("<false/>"));
    assert!(encoder
        .encode(&PlistValue::Null)
        .unwrap()
        .contains("<null/>"));
    assert!(encoder
        .encode(&PlistValue::Bytes(vec![0xDE, 0xAD, 0xBE, 0xEF]))
        .unwrap()
        .contains("<data>3q2+7w==</data>"));
    let date = chrono::Utc.with_ymd_and_hms(2024, 2, 29, 6, 5, 4).unwrap();
    assert!(encoder
        .encode(&PlistValue::Date(date))
        .unwrap()
        .contains("<date>2024-02-29T06:05:04Z</date>"));
}

#[test]
fn odd_dict_child_count_is_a_format_error() {
    let doc = "<plist><dict><key>a</key><integer>1</integer><key>b</key></dict></plist>";
    assert!(matches!(decode(doc).unwrap_err(), XmlError::OddChildCount));
}

#[test]
fn non_key_where_key_expected() {
    let doc = "<plist><dict><integer>1</integer><integer>2</integer></dict></plist>";
    assert!(matches!(
        decode(doc).unwrap_err(),
        XmlError::ExpectedKey(name) if name == "integer"
    ));
}

#[test]
fn duplicate_keys_are_rejected() {
    let doc =
        "<plist><dict><key>a</key><integer>1</integer><key>a</key><integer>2</integer></dict></plist>";
    assert!(matches!(
        decode(doc).unwrap_err(),
        XmlError::DuplicateKey(key) if key == "a"
    ));
}

#[test]
fn unknown_elements_fail_by_name() {
    assert!(matches!(
        decode("<plist><widget/></plist>").unwrap_err(),
        XmlError::UnknownElement(name) if name == "widget"
    ));
    assert!(matches!(
        decode("<html><body/></html>").unwrap_err(),
        XmlError::UnexpectedRoot(name) if name == "html"
    ));
}

#[test]
fn invalid_scalars_fail_with_format_errors() {
    assert!(matches!(
        decode("<plist><integer>forty-two</integer></plist>").unwrap_err(),
        XmlError::InvalidInteger(_)
    ));
    assert!(matches!(
        decode("<plist><real>pi</real></plist>").unwrap_err(),
        XmlError::InvalidReal(_)
    ));
    assert!(matches!(
        decode("<plist><date>yesterday</date></plist>").unwrap_err(),
        XmlError::InvalidDate(_)
    ));
    assert!(matches!(
        decode("<plist><data>!!!</data></plist>").unwrap_err(),
        XmlError::InvalidData(_)
    ));
}

#[test]
fn empty_plist_has_no_value() {
    assert!(matches!(
        decode("<plist></plist>").unwrap_err(),
        XmlError::MissingValue
    ));
    assert!(matches!(
        decode("<plist/>").unwrap_err(),
        XmlError::MissingValue
    ));
}

#[test]
fn truncated_document_fails() {
    let doc = "<plist><dict><key>a</key>";
    assert!(decode(doc).is_err());
}

#[test]
fn whitespace_inside_strings_is_preserved() {
    assert_eq!(
        decode("<plist><string>  two  words  </string></plist>").unwrap(),
        PlistValue::String("  two  words  ".into())
    );
}
