use bytes::Bytes;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode(b"i-42e").unwrap(), Value::Integer(-42));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
}

#[test]
fn test_decode_integer_invalid() {
    assert!(decode(b"i-0e").is_err());
    assert!(decode(b"i03e").is_err());
    assert!(decode(b"ie").is_err());
    assert!(decode(b"i42").is_err());
}

#[test]
fn test_decode_bytes() {
    assert_eq!(
        decode(b"4:spam").unwrap(),
        Value::Bytes(Bytes::from_static(b"spam"))
    );
    assert_eq!(
        decode(b"0:").unwrap(),
        Value::Bytes(Bytes::from_static(b""))
    );
}

#[test]
fn test_decode_binary_bytes() {
    let value = decode(b"3:\x00\xff\x10").unwrap();
    assert_eq!(&value.as_bytes().unwrap()[..], b"\x00\xff\x10");
    assert_eq!(value.as_str(), None);
}

#[test]
fn test_decode_bytes_truncated() {
    assert!(matches!(decode(b"5:spam"), Err(BencodeError::UnexpectedEof)));
    assert!(matches!(
        decode(b"99999999999999999999999:x"),
        Err(BencodeError::InvalidStringLength)
    ));
}

#[test]
fn test_decode_list() {
    let result = decode(b"l4:spami42ee").unwrap();
    match result {
        Value::List(l) => {
            assert_eq!(l.len(), 2);
            assert_eq!(l[0], Value::Bytes(Bytes::from_static(b"spam")));
            assert_eq!(l[1], Value::Integer(42));
        }
        _ => panic!("expected list"),
    }
}

#[test]
fn test_decode_dict() {
    let result = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
    match result {
        Value::Dict(d) => {
            assert_eq!(d.len(), 2);
            assert_eq!(
                d.get(b"cow".as_slice()),
                Some(&Value::Bytes(Bytes::from_static(b"moo")))
            );
        }
        _ => panic!("expected dict"),
    }
}

#[test]
fn test_decode_dict_keeps_input_order() {
    let result = decode(b"d4:spam4:eggs3:cow3:mooe").unwrap();
    let keys: Vec<&[u8]> = result.as_dict().unwrap().keys().map(|k| &k[..]).collect();
    assert_eq!(keys, vec![b"spam".as_slice(), b"cow".as_slice()]);
}

#[test]
fn test_decode_dict_non_string_key() {
    assert!(matches!(
        decode(b"di1e3:mooe"),
        Err(BencodeError::UnexpectedChar('i'))
    ));
}

#[test]
fn test_decode_dict_duplicate_key() {
    assert!(matches!(
        decode(b"d3:cowi1e3:cowi2ee"),
        Err(BencodeError::DuplicateKey(key)) if key == "cow"
    ));
}

#[test]
fn test_decode_nesting_limit() {
    let mut ok = vec![b'l'; MAX_DEPTH];
    ok.extend(vec![b'e'; MAX_DEPTH]);
    assert!(decode(&ok).is_ok());

    let mut too_deep = vec![b'l'; MAX_DEPTH + 2];
    too_deep.extend(vec![b'e'; MAX_DEPTH + 2]);
    assert!(matches!(decode(&too_deep), Err(BencodeError::NestingTooDeep)));
}

#[test]
fn test_encode_integer() {
    assert_eq!(encode(&Value::Integer(42)).unwrap(), b"i42e");
    assert_eq!(encode(&Value::Integer(-42)).unwrap(), b"i-42e");
    assert_eq!(encode(&Value::Integer(0)).unwrap(), b"i0e");
}

#[test]
fn test_encode_bytes() {
    assert_eq!(
        encode(&Value::Bytes(Bytes::from_static(b"spam"))).unwrap(),
        b"4:spam"
    );
}

#[test]
fn test_encode_list() {
    let list = Value::List(vec![
        Value::Bytes(Bytes::from_static(b"spam")),
        Value::Integer(42),
    ]);
    assert_eq!(encode(&list).unwrap(), b"l4:spami42ee");
}

#[test]
fn test_encode_dict() {
    let value = Value::dict([("cow", Value::string("moo"))]);
    assert_eq!(encode(&value).unwrap(), b"d3:cow3:mooe");
}

#[test]
fn test_roundtrip() {
    let original = b"d8:announce15:http://test.com4:infod4:name4:test12:piece lengthi16384eee";
    let decoded = decode(original).unwrap();
    let encoded = encode(&decoded).unwrap();
    assert_eq!(encoded, original);
}

#[test]
fn test_roundtrip_unsorted_keys() {
    let original = b"d4:infod6:lengthi2e4:name1:ae8:announce3:urle";
    let decoded = decode(original).unwrap();
    assert_eq!(encode(&decoded).unwrap(), original);
}

#[test]
fn test_trailing_data_error() {
    assert!(matches!(decode(b"i42eextra"), Err(BencodeError::TrailingData)));
}

#[test]
fn test_value_accessors() {
    let value = Value::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert!(value.as_bytes().is_none());

    let value = Value::Bytes(Bytes::from_static(b"test"));
    assert_eq!(value.as_str(), Some("test"));
    assert!(value.as_integer().is_none());

    let value = Value::List(vec![]);
    assert!(value.as_list().is_some());
    assert!(value.as_dict().is_none());

    let mut value = Value::dict([("a", Value::Integer(1))]);
    value
        .as_dict_mut()
        .unwrap()
        .insert(Bytes::from_static(b"b"), Value::Integer(2));
    assert_eq!(value.into_dict().unwrap().len(), 2);
}
