//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! This module provides `kani::Arbitrary` trait implementations for the
//! selector and parameter models, plus proofs over the port and host helpers,
//! for verification with the Kani model checker.
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

use crate::host::{integer_to_ipv4, is_numeric_host, split_host_port};
use crate::{PortInput, SearchParams, SelectorList};

/// Characters that survive encoding and decoding unchanged
const TOKEN_CHARS: &[u8] = b"abcxyz019-_~";

/// Generate a character that needs no escaping
fn arbitrary_token_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % TOKEN_CHARS.len();
    TOKEN_CHARS[idx] as char
}

/// Generate a 1-4 char token for tractability
fn arbitrary_token() -> String {
    let len: usize = kani::any();
    let len = 1 + (len % 4);
    (0..len).map(|_| arbitrary_token_char()).collect()
}

impl kani::Arbitrary for SelectorList {
    fn any() -> Self {
        // Generate 0-3 selectors for tractability
        let count: usize = kani::any();
        let count = count % 4;

        let mut selectors = SelectorList::new();
        for _ in 0..count {
            selectors.append(arbitrary_token());
        }
        selectors
    }
}

impl kani::Arbitrary for SearchParams {
    fn any() -> Self {
        // Generate 0-3 pairs for tractability
        let count: usize = kani::any();
        let count = count % 4;

        let mut params = SearchParams::new();
        for _ in 0..count {
            params.append(arbitrary_token(), arbitrary_token());
        }
        params
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Non-negative integer ports are kept exactly
#[kani::proof]
fn proof_port_integer_accepted() {
    let port: u16 = kani::any();
    let normalized = PortInput::from(port).normalize();
    assert_eq!(normalized, Some(port.to_string()));
}

/// Proof: Negative integer ports are always rejected
#[kani::proof]
fn proof_port_negative_rejected() {
    let port: i64 = kani::any();
    kani::assume(port < 0);
    assert!(PortInput::from(port).normalize().is_none());
}

/// Proof: An accepted port is a non-empty string of digits, or empty
#[kani::proof]
#[kani::unwind(8)]
fn proof_port_text_is_digits() {
    let bytes: [u8; 3] = kani::any();
    let Ok(text) = std::str::from_utf8(&bytes) else {
        return;
    };

    if let Some(port) = PortInput::Text(text).normalize() {
        assert!(!port.is_empty());
        assert!(port.bytes().all(|b| b.is_ascii_digit()));
    }
}

/// Proof: Numeric hosts convert to the same address as `Ipv4Addr`
#[kani::proof]
#[kani::unwind(12)]
fn proof_integer_to_ipv4_matches_std() {
    let value: u32 = kani::any();
    let digits = value.to_string();
    assert!(is_numeric_host(&digits));
    assert_eq!(
        integer_to_ipv4(&digits),
        std::net::Ipv4Addr::from(value).to_string()
    );
}

/// Proof: The host half of a split is always a prefix of the input
#[kani::proof]
#[kani::unwind(6)]
fn proof_split_host_is_prefix() {
    let bytes: [u8; 4] = kani::any();
    let Ok(input) = std::str::from_utf8(&bytes) else {
        return;
    };

    let (host, _) = split_host_port(input);
    assert!(input.starts_with(host));
}

/// Proof: After append, has is true; after delete of an absent token, length is unchanged
#[kani::proof]
#[kani::unwind(6)]
fn proof_selectors_append_delete() {
    let mut selectors: SelectorList = kani::any();
    let token = arbitrary_token();

    selectors.append(token.clone());
    assert!(selectors.has(&token));

    let len = selectors.len();
    selectors.delete("absent.token");
    assert_eq!(selectors.len(), len);
}

/// Proof: set collapses every value for a key to one
#[kani::proof]
#[kani::unwind(6)]
fn proof_search_params_set_collapses() {
    let mut params: SearchParams = kani::any();
    let key = arbitrary_token();

    params.append(key.clone(), "first");
    params.append(key.clone(), "second");
    params.set(key.clone(), "only");

    assert_eq!(params.get_all(&key), vec!["only"]);
}
