//! Kani proof harnesses for the parser's memory and bounds properties.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Component, Cursor, ParseOptions, UriParser};

/// Bytes that drive every branch of the scanners
const ALPHABET: &[u8] = b"a1+:/?#@[]";

/// Input length bound for tractability
const MAX_LEN: usize = 8;

/// Generate a short input drawn from the delimiter alphabet
fn arbitrary_input() -> ([u8; MAX_LEN], usize) {
    let mut buf = [0u8; MAX_LEN];
    for slot in &mut buf {
        let idx: usize = kani::any();
        *slot = ALPHABET[idx % ALPHABET.len()];
    }
    let len: usize = kani::any();
    kani::assume(len <= MAX_LEN);
    (buf, len)
}

fn arbitrary_options() -> ParseOptions {
    if kani::any() {
        ParseOptions::new().strict()
    } else {
        ParseOptions::new()
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: parsing never panics and every component lies inside the input
#[kani::proof]
#[kani::unwind(10)]
fn proof_spans_within_input() {
    let (buf, len) = arbitrary_input();
    let input = &buf[..len];
    let parser = UriParser::new(arbitrary_options());

    if let Ok(uri) = parser.parse(input) {
        assert!(!uri.scheme().is_empty());
        assert!(uri.host().is_some() == uri.authority().is_some());
        for component in Component::ALL {
            if uri.component(component).is_some() {
                let span = uri.span(component).expect("component inside input");
                assert!(span.start <= span.end && span.end <= len);
            }
        }
    }
}

/// Proof: the scheme-less entry point never panics and fails only on `//`
#[kani::proof]
#[kani::unwind(10)]
fn proof_without_scheme_errors_need_authority() {
    let (buf, len) = arbitrary_input();
    let input = &buf[..len];
    let parser = UriParser::new(arbitrary_options());

    if parser.parse_without_scheme(input).is_err() {
        assert!(input.starts_with(b"//"));
    }
}

/// Proof: the cursor offset never passes the end of the buffer
#[kani::proof]
#[kani::unwind(10)]
fn proof_cursor_offset_in_bounds() {
    let (buf, len) = arbitrary_input();
    let mut cursor = Cursor::new(&buf[..len]);
    let stop: u8 = kani::any();

    let head = cursor.take_until(|b| b == stop);
    assert!(head.len() <= len);
    cursor.next_byte();
    cursor.take_while(|b| b != stop);
    assert!(cursor.position() <= len);
    assert!(cursor.position() + cursor.remaining() == len);
    cursor.take_rest();
    assert!(cursor.is_empty());
}
