use textforms::{
    decode, decode_reader, decode_slice, Decoder, FormEntry, FormOptions, FormValue,
};

#[test]
fn test_mixed_message() {
    let form = decode("INT 1# NUM1.0#STR A String Value # PI3.14");

    assert_eq!(form.len(), 4);
    assert_eq!(
        form.get("INT"),
        Some(&FormEntry::Single(FormValue::Integer(1)))
    );
    assert_eq!(
        form.get("NUM"),
        Some(&FormEntry::Single(FormValue::Numeric(1.0)))
    );
    assert_eq!(
        form.get("STR"),
        Some(&FormEntry::Single(FormValue::String(
            "A String Value".to_string()
        )))
    );
    assert_eq!(
        form.get("PI"),
        Some(&FormEntry::Single(FormValue::Numeric(3.14)))
    );
}

#[test]
fn test_indexed_sequences_with_noise() {
    let form = decode("I0 0 # SEQ.0 3.1 # SEQ.1 3.14# SEQ2 3.141 #SEQ3 3.1415 ## ");

    assert_eq!(form.len(), 3);
    assert_eq!(
        form.get("I"),
        Some(&FormEntry::Single(FormValue::pair(
            FormValue::Integer(0),
            FormValue::Integer(0),
        )))
    );
    assert_eq!(
        form.get("SEQ."),
        Some(&FormEntry::Multiple(vec![
            FormValue::pair(FormValue::Integer(0), FormValue::Numeric(3.1)),
            FormValue::pair(FormValue::Integer(1), FormValue::Numeric(3.14)),
        ]))
    );
    assert_eq!(
        form.get("SEQ"),
        Some(&FormEntry::Multiple(vec![
            FormValue::pair(FormValue::Integer(2), FormValue::Numeric(3.141)),
            FormValue::pair(FormValue::Integer(3), FormValue::Numeric(3.1415)),
        ]))
    );
}

#[test]
fn test_single_occurrence_is_not_a_list() {
    let form = decode("A 1");
    assert_eq!(form.get("A"), Some(&FormEntry::Single(FormValue::Integer(1))));
}

#[test]
fn test_repeats_promote_in_arrival_order() {
    let form = decode("A 1#A 2#A 3");
    assert_eq!(
        form.get("A"),
        Some(&FormEntry::Multiple(vec![
            FormValue::Integer(1),
            FormValue::Integer(2),
            FormValue::Integer(3),
        ]))
    );
}

#[test]
fn test_case_invariance_with_reset_between() {
    let mut decoder = Decoder::new();
    let mut snapshots = Vec::new();
    for message in ["abc 1", "ABC 1", "Abc 1"] {
        decoder.reset().decode(message);
        snapshots.push(decoder.snapshot());
    }
    assert_eq!(snapshots[0], snapshots[1]);
    assert_eq!(snapshots[1], snapshots[2]);
    assert_eq!(
        snapshots[0].get("ABC"),
        Some(&FormEntry::Single(FormValue::Integer(1)))
    );
}

#[test]
fn test_doubled_boundary_tolerance() {
    let form = decode("A 1## B 2");
    assert_eq!(form.len(), 2);
    assert_eq!(form.get("A"), Some(&FormEntry::Single(FormValue::Integer(1))));
    assert_eq!(form.get("B"), Some(&FormEntry::Single(FormValue::Integer(2))));
}

#[test]
fn test_pair_with_string_reading() {
    let form = decode("NAME2 2.15abc");
    assert_eq!(
        form.get("NAME"),
        Some(&FormEntry::Single(FormValue::pair(
            FormValue::Integer(2),
            FormValue::String("2.15abc".to_string()),
        )))
    );
}

#[test]
fn test_whitespace_tail_collapses_to_absent() {
    let form = decode("KEY 5   ");
    assert_eq!(
        form.get("KEY"),
        Some(&FormEntry::Single(FormValue::Integer(5)))
    );
}

#[test]
fn test_noise_between_fields_is_skipped() {
    let form = decode("###%%%#LEVEL 9#   #1234#OK done");
    assert_eq!(form.len(), 2);
    assert_eq!(
        form.get("LEVEL"),
        Some(&FormEntry::Single(FormValue::Integer(9)))
    );
    assert_eq!(
        form.get("OK"),
        Some(&FormEntry::Single(FormValue::String("done".to_string())))
    );
}

#[test]
fn test_keys_iterate_in_first_appearance_order() {
    let form = decode("ZULU 1#ALPHA 2#MIKE 3#ALPHA 4");
    let keys: Vec<_> = form.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["ZULU", "ALPHA", "MIKE"]);
}

#[test]
fn test_decoder_accumulates_until_reset() {
    let mut decoder = Decoder::new();
    decoder.decode("BAT 87").decode("BAT 86#RSSI -71");

    let form = decoder.view();
    assert_eq!(
        form.get("BAT"),
        Some(&FormEntry::Multiple(vec![
            FormValue::Integer(87),
            FormValue::Integer(86),
        ]))
    );
    // "-71" has a sign, which the numeric literal grammar does not allow
    assert_eq!(
        form.get("RSSI"),
        Some(&FormEntry::Single(FormValue::String("-71".to_string())))
    );

    decoder.reset();
    assert!(decoder.view().is_empty());
}

#[test]
fn test_chunked_decode_matches_joined_message() {
    let joined = decode("A 1#B two#A 3");

    let mut decoder = Decoder::new();
    decoder.decode("A 1").decode("B two").decode("A 3");

    assert_eq!(decoder.view(), &joined);
}

#[test]
fn test_custom_boundary() {
    let mut decoder = Decoder::with_options(FormOptions::new().with_boundary(';'));
    decoder.decode("volt 3.3; amp 0.2; state charging");

    let form = decoder.view();
    assert_eq!(
        form.get("VOLT"),
        Some(&FormEntry::Single(FormValue::Numeric(3.3)))
    );
    assert_eq!(
        form.get("STATE"),
        Some(&FormEntry::Single(FormValue::String("charging".to_string())))
    );
    // '#' is an ordinary text character under a ';' boundary
    assert_eq!(form.len(), 3);
}

#[test]
fn test_json_projection() {
    let form = decode("INT 1# NUM1.0#STR A String Value # PI3.14");
    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "INT": 1,
            "NUM": 1.0,
            "STR": "A String Value",
            "PI": 3.14,
        })
    );
}

#[test]
fn test_json_projection_of_pairs_and_lists() {
    let form = decode("SEQ.0 3.1 # SEQ.1 3.14");
    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(json, serde_json::json!({ "SEQ.": [[0, 3.1], [1, 3.14]] }));
}

#[test]
fn test_typed_extraction() {
    let form = decode("COUNT 12#RATIO 0.75#LABEL node-a");

    let count: i64 = form
        .get("count")
        .and_then(FormEntry::first)
        .cloned()
        .map(i64::try_from)
        .unwrap()
        .unwrap();
    assert_eq!(count, 12);

    let ratio: f64 = f64::try_from(form.get("ratio").unwrap().first().unwrap().clone()).unwrap();
    assert_eq!(ratio, 0.75);

    let label = String::try_from(form.get("label").unwrap().first().unwrap().clone()).unwrap();
    assert_eq!(label, "node-a");

    // wrong-type extraction reports a mismatch instead of panicking
    assert!(i64::try_from(form.get("label").unwrap().first().unwrap().clone()).is_err());
}

#[test]
fn test_decode_slice_and_reader_agree() {
    let message = "A 1#B 2";
    let from_slice = decode_slice(message.as_bytes()).unwrap();
    let from_reader = decode_reader(std::io::Cursor::new(message)).unwrap();
    assert_eq!(from_slice, from_reader);
    assert_eq!(from_slice, decode(message));
}

#[test]
fn test_decode_slice_rejects_invalid_utf8() {
    assert!(decode_slice(&[b'A', b' ', 0xC0, 0x80]).is_err());
}

#[test]
fn test_empty_and_blank_messages() {
    assert!(decode("").is_empty());
    assert!(decode("   ").is_empty());
    assert!(decode("###").is_empty());
}
