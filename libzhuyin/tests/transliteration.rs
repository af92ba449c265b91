//! Conversion properties checked against the whole syllable table.
//!
//! - every unit converts under every tone digit
//! - longest unit wins over shorter prefixes
//! - spelling variants convert identically
//! - conversion is safe to call from many threads at once

use libzhuyin::{to_zhuyin, to_zhuyin_with, ConversionError, SyllableTable};

const TONES: [&str; 5] = ["1", "2", "3", "4", "5"];

#[test]
fn every_unit_converts_with_every_tone() {
    let table = SyllableTable::global();
    for unit in table.units() {
        for tone in TONES {
            let input = format!("{unit}{tone}");
            assert!(
                to_zhuyin(&input).is_ok(),
                "expected '{input}' to convert: {:?}",
                to_zhuyin(&input)
            );
        }
    }
}

#[test]
fn toned_output_is_unit_plus_mark() {
    let table = SyllableTable::global();
    for unit in table.syllables() {
        let body = table.get(unit).unwrap();
        for tone in TONES {
            let mark = table.get(tone).unwrap();
            let got = to_zhuyin(&format!("{unit}{tone}")).unwrap();
            assert_eq!(got, format!("{body}{mark}"), "{unit}{tone}");
        }
    }
}

#[test]
fn untoned_units_convert_to_their_body() {
    let table = SyllableTable::global();
    for unit in table.syllables() {
        assert_eq!(to_zhuyin(unit).unwrap(), table.get(unit).unwrap());
    }
}

#[test]
fn documented_examples() {
    assert_eq!(to_zhuyin("zhuang1").unwrap(), "ㄓㄨㄤ");
    assert_eq!(to_zhuyin("ma5").unwrap(), "ㄇㄚ˙");
    assert_eq!(to_zhuyin("ma1").unwrap(), "ㄇㄚ");
    assert_eq!(to_zhuyin("zhong1").unwrap(), "ㄓㄨㄥ");
    assert_eq!(to_zhuyin("er2").unwrap(), "ㄦˊ");
    assert_eq!(to_zhuyin("yue4").unwrap(), "ㄩㄝˋ");
    assert_eq!(to_zhuyin("shi4").unwrap(), "ㄕˋ");
}

#[test]
fn unrecognized_syllable() {
    match to_zhuyin("xyz9") {
        Err(ConversionError::UnrecognizedSyllable { input, residual }) => {
            assert_eq!(input, "xyz9");
            assert_eq!(residual, "xyz9");
        }
        other => panic!("expected UnrecognizedSyllable, got {other:?}"),
    }

    let err = to_zhuyin("zhong1 guo2").unwrap_err();
    assert_eq!(err.residual(), " guo2");
    assert!(err.to_string().contains("zhong1 guo2"));
}

#[test]
fn spelling_variants_convert_alike() {
    for (legacy, standard) in [
        ("xien", "xian"),
        ("tien", "tian"),
        ("qien", "qian"),
        ("nien", "nian"),
        ("mien", "mian"),
        ("bien", "bian"),
        ("pien", "pian"),
        ("lien", "lian"),
        ("jien", "jian"),
    ] {
        for tone in TONES {
            assert_eq!(
                to_zhuyin(&format!("{legacy}{tone}")).unwrap(),
                to_zhuyin(&format!("{standard}{tone}")).unwrap(),
            );
        }
    }
}

#[test]
fn rebuilt_table_behaves_identically() {
    let a = SyllableTable::new();
    let b = SyllableTable::new();
    for input in ["zhuang1", "ma5", "lüe4", "xien3", "a", "xyz9", ""] {
        assert_eq!(to_zhuyin_with(&a, input), to_zhuyin_with(&b, input));
        assert_eq!(to_zhuyin_with(&a, input), to_zhuyin(input));
    }
}

#[test]
fn concurrent_callers_agree() {
    let inputs = ["zhuang1", "zhong1", "ma5", "lü4", "chuang2", "xiong3"];
    let expected: Vec<String> = inputs.iter().map(|s| to_zhuyin(s).unwrap()).collect();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    for (input, want) in inputs.iter().zip(&expected) {
                        assert_eq!(&to_zhuyin(input).unwrap(), want);
                    }
                }
            });
        }
    });
}
