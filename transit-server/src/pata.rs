//! Character interleaving for the "patatokukashi" demo page.
//!
//! Interleaving パトカー and タクシー gives パタトクカシーー.

/// Interleave two strings character by character.
///
/// Takes one character from `a`, then one from `b`, and so on; once the
/// shorter string runs out the rest of the longer one is appended as is.
/// Characters are Unicode scalar values, so multi-byte text interleaves
/// correctly.
///
/// # Examples
///
/// ```
/// use transit_server::pata::interleave;
///
/// assert_eq!(interleave("パトカー", "タクシー"), "パタトクカシーー");
/// assert_eq!(interleave("abc", "x"), "axbc");
/// ```
pub fn interleave(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    let mut a_chars = a.chars();
    let mut b_chars = b.chars();

    loop {
        match (a_chars.next(), b_chars.next()) {
            (Some(x), Some(y)) => {
                out.push(x);
                out.push(y);
            }
            (Some(x), None) => {
                out.push(x);
                out.extend(a_chars);
                break;
            }
            (None, Some(y)) => {
                out.push(y);
                out.extend(b_chars);
                break;
            }
            (None, None) => break,
        }
    }

    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Output holds every character of both inputs
        #[test]
        fn length_is_sum(a in ".{0,12}", b in ".{0,12}") {
            let out = interleave(&a, &b);
            prop_assert_eq!(out.chars().count(), a.chars().count() + b.chars().count());
        }

        /// Even positions (up to the shorter length) come from the first input
        #[test]
        fn alternates(a in "[a-z]{0,8}", b in "[A-Z]{0,8}") {
            let out: Vec<char> = interleave(&a, &b).chars().collect();
            let shared = a.len().min(b.len());
            for (i, c) in a.chars().take(shared).enumerate() {
                prop_assert_eq!(out[2 * i], c);
            }
            for (i, c) in b.chars().take(shared).enumerate() {
                prop_assert_eq!(out[2 * i + 1], c);
            }
        }
    }
}
