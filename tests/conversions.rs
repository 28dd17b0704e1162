use std::{fs, str::FromStr};

use num_bigint::BigUint;
use radixa::{
    Base, convert,
    converter::{
        numerical::{format_magnitude, parse_magnitude},
        text::{from_code_points, to_code_points},
    },
    error::{BaseError, ConversionError},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_example_blocks(&content).into_iter().enumerate() {
            for line in block.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                count += 1;
                let (input, from, to, expected) = parse_example_line(line, path, i);

                match convert(&input, from, to) {
                    Ok(result) => {
                        assert_eq!(result, expected,
                                   "Example {} in {:?} produced the wrong output for: {}",
                                   i + 1,
                                   path,
                                   line);
                    },
                    Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, line, e),
                }
            }
        }
    }

    assert!(count > 0, "No conversion examples found in book/src");
}

fn extract_example_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```radixa") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Splits a book example of the form `<from> -> <to> : <input> => <expected>`.
fn parse_example_line(line: &str, path: &std::path::Path, block: usize) -> (String, Base, Base, String) {
    let parts = line.split_once(" : ").and_then(|(route, rest)| {
                                          let (from, to) = route.split_once(" -> ")?;
                                          let (input, expected) = rest.split_once(" => ")?;
                                          Some((from, to, input, expected))
                                      });

    let Some((from, to, input, expected)) = parts else {
        panic!("Malformed example in block {} of {:?}: {}", block + 1, path, line)
    };

    let from = Base::from_str(from.trim()).unwrap_or_else(|e| panic!("{e}"));
    let to = Base::from_str(to.trim()).unwrap_or_else(|e| panic!("{e}"));

    (input.to_string(), from, to, expected.to_string())
}

fn assert_converts(input: &str, from: Base, to: Base, expected: &str) {
    match convert(input, from, to) {
        Ok(result) => assert_eq!(result, expected, "Wrong output for input: {input}"),
        Err(e) => panic!("Conversion of '{input}' failed: {e}"),
    }
}

fn assert_rejects(input: &str, from: Base, to: Base) {
    if let Ok(result) = convert(input, from, to) {
        panic!("Conversion of '{input}' succeeded with '{result}' but was expected to fail")
    }
}

#[test]
fn radix_to_radix_conversions() {
    assert_converts("255", Base::Radix(10), Base::Radix(16), "FF");
    assert_converts("ff", Base::Radix(16), Base::Radix(10), "255");
    assert_converts("1010", Base::Radix(2), Base::Radix(10), "10");
    assert_converts("66", Base::Radix(7), Base::Radix(5), "143");
    assert_converts("0", Base::Radix(10), Base::Radix(16), "0");
}

#[test]
fn radix_to_radix_strips_whitespace() {
    assert_converts("F F", Base::Radix(16), Base::Radix(10), "255");
    assert_converts("1111 1111", Base::Radix(2), Base::Radix(16), "FF");
    assert_converts(" 2 5 5 ", Base::Radix(10), Base::Radix(16), "FF");
}

#[test]
fn binary_output_is_grouped_into_quartets() {
    assert_converts("FF", Base::Radix(16), Base::Radix(2), "1111 1111");
    assert_converts("5", Base::Radix(10), Base::Radix(2), "0101");
    assert_converts("255", Base::Radix(10), Base::Radix(2), "1111 1111");
    assert_converts("0", Base::Radix(10), Base::Radix(2), "0000");
}

#[test]
fn binary_grouping_is_a_radix_path_formatting_only() {
    // Per-character binary renderings on the text path stay ungrouped.
    assert_converts("Hi", Base::Text, Base::Radix(2), "1001000 1101001");
}

#[test]
fn text_to_radix_conversions() {
    assert_converts("A", Base::Text, Base::Radix(10), "65");
    assert_converts("Hi", Base::Text, Base::Radix(16), "48 69");
    // The input is taken verbatim on this path; a space is a character too.
    assert_converts("A ", Base::Text, Base::Radix(10), "65 32");
}

#[test]
fn supplementary_plane_characters_are_single_code_points() {
    assert_converts("😀", Base::Text, Base::Radix(16), "1F600");
    assert_eq!(to_code_points("😀"), vec![0x1F600]);
}

#[test]
fn radix_to_text_conversions() {
    assert_converts("72 73", Base::Radix(10), Base::Text, "HI");
    assert_converts("48 69", Base::Radix(16), Base::Text, "Hi");
    assert_converts("  72   73  ", Base::Radix(10), Base::Text, "HI");
    assert_converts("1F600", Base::Radix(16), Base::Text, "😀");
}

#[test]
fn text_to_text_returns_the_input_unchanged() {
    assert_converts("hello", Base::Text, Base::Text, "hello");
}

#[test]
fn empty_digit_sequences_parse_as_zero() {
    for base in 2..=16 {
        assert_eq!(parse_magnitude("", base).unwrap(), BigUint::ZERO);
        assert_eq!(parse_magnitude("   ", base).unwrap(), BigUint::ZERO);
    }
}

#[test]
fn invalid_digits_are_reported_with_character_and_base() {
    assert_eq!(parse_magnitude("g", 16).unwrap_err(),
               ConversionError::InvalidDigit { digit: 'G', base: 16 });
    assert_eq!(parse_magnitude("2", 2).unwrap_err(),
               ConversionError::InvalidDigit { digit: '2', base: 2 });
    // Whitespace inside a digit sequence is an invalid digit; only the
    // router strips or splits spacing.
    assert_eq!(parse_magnitude("1 1", 2).unwrap_err(),
               ConversionError::InvalidDigit { digit: ' ', base: 2 });

    assert_rejects("12x4", Base::Radix(10), Base::Radix(16));
    assert_rejects("9", Base::Radix(8), Base::Text);
}

#[test]
fn decimal_points_are_a_reserved_feature() {
    assert_eq!(parse_magnitude("3.14", 10).unwrap_err(),
               ConversionError::UnsupportedFeature);
    assert_rejects("3.14", Base::Radix(10), Base::Radix(2));
    assert_rejects(".", Base::Radix(16), Base::Radix(10));
}

#[test]
fn code_points_must_be_unicode_scalar_values() {
    assert_eq!(from_code_points(&[-1]).unwrap_err(),
               ConversionError::CodePointOutOfRange { value: "-1".to_string() });

    // Beyond U+10FFFF.
    assert_rejects("110000", Base::Radix(16), Base::Text);
    // A surrogate code point identifies no scalar value.
    assert_rejects("D800", Base::Radix(16), Base::Text);
    // Too large for the machine integer domain; never silently truncated.
    assert_rejects("99999999999999999999999999", Base::Radix(10), Base::Text);
}

#[test]
fn magnitudes_survive_any_round_trip() {
    for r1 in 2..=16_u8 {
        for r2 in 2..=16_u8 {
            for value in [0_u64, 1, 7, 42, 255, 65_535, u64::MAX] {
                let magnitude = BigUint::from(value);

                let rendered = format_magnitude(&magnitude, r1);
                let through = format_magnitude(&parse_magnitude(&rendered, r1).unwrap(), r2);
                let back = parse_magnitude(&through, r2).unwrap();

                assert_eq!(back, magnitude,
                           "{value} did not survive the trip through Base-{r1} and Base-{r2}");
            }
        }
    }
}

#[test]
fn conversions_invert_each_other() {
    let pairs = [("255", Base::Radix(10), Base::Radix(2)),
                 ("DEADBEEF", Base::Radix(16), Base::Radix(3)),
                 ("777", Base::Radix(8), Base::Radix(12))];

    for (input, from, to) in pairs {
        let there = convert(input, from, to).unwrap();
        let back = convert(&there, to, from).unwrap();

        assert_eq!(parse_magnitude(&back, radix_of(from)).unwrap(),
                   parse_magnitude(input, radix_of(from)).unwrap(),
                   "'{input}' did not survive converting to {to} and back");
    }
}

fn radix_of(base: Base) -> u8 {
    match base {
        Base::Radix(value) => value,
        Base::Text => panic!("Expected a numeral base"),
    }
}

#[test]
fn magnitudes_are_not_bounded_by_machine_integers() {
    // 2^64 does not fit in a u64.
    assert_converts("18446744073709551616", Base::Radix(10), Base::Radix(16), "10000000000000000");

    // 2^99, written as a 100-digit binary string.
    let mut binary = String::from("1");
    binary.push_str(&"0".repeat(99));
    let expected = format!("8{}", "0".repeat(24));
    assert_converts(&binary, Base::Radix(2), Base::Radix(16), &expected);
}

#[test]
fn base_selectors_parse_and_validate() {
    assert_eq!(Base::from_str("text"), Ok(Base::Text));
    assert_eq!(Base::from_str("TEXT"), Ok(Base::Text));
    assert_eq!(Base::from_str("2"), Ok(Base::Radix(2)));
    assert_eq!(Base::from_str("16"), Ok(Base::Radix(16)));

    assert_eq!(Base::from_str("1"), Err(BaseError::OutOfRange { found: 1 }));
    assert_eq!(Base::from_str("17"), Err(BaseError::OutOfRange { found: 17 }));
    assert_eq!(Base::from_str("300"), Err(BaseError::OutOfRange { found: 300 }));
    assert_eq!(Base::from_str("ten"),
               Err(BaseError::Unrecognized { found: "ten".to_string() }));
}
