//! Layer 3: local-part OCR normalization (§4.6).
//!
//! `ocr_normalize_local`/`canonicalize_local` fold OCR-garbled locals into a
//! matching key (dedup only, never shown to a user). `ocr_clean_local_for_display`
//! is the separate, much more conservative cleanup used for the node's
//! displayed id, which only fixes digits clearly embedded between letters —
//! letter-to-letter substitutions have too many false positives on real
//! names (bernhardt, tierney, barnes).

use crate::tables::LOCAL_OCR_CHAR_MAP;

/// Fold OCR letter confusions into a matching key, longest pattern first.
pub fn ocr_normalize_local(local: &str) -> String {
	let mut result = local.to_string();
	for (err, fix) in LOCAL_OCR_CHAR_MAP {
		result = result.replace(err, fix);
	}
	result
}

const EMBEDDED_DIGIT_FIXES: &[(char, char)] =
	&[('1', 'l'), ('0', 'o'), ('3', 'e'), ('8', 'b'), ('5', 's'), ('6', 'b'), ('2', 'z')];

const LEADING_DIGIT_FIXES: &[(char, char)] = &[('3', 'e'), ('1', 'l'), ('0', 'o'), ('6', 'b'), ('5', 's')];

fn replace_digit_between_letters(s: &str, digit: char, letter: char) -> String {
	let chars: Vec<char> = s.chars().collect();
	let mut out = String::with_capacity(s.len());
	for (i, &c) in chars.iter().enumerate() {
		if c == digit {
			let before_ok = i > 0 && chars[i - 1].is_ascii_lowercase();
			let after_ok = i + 1 < chars.len() && chars[i + 1].is_ascii_lowercase();
			if before_ok && after_ok {
				out.push(letter);
				continue;
			}
		}
		out.push(c);
	}
	out
}

fn replace_leading_digit(s: &str, digit: char, letter: char) -> String {
	let chars: Vec<char> = s.chars().collect();
	if chars.first() != Some(&digit) {
		return s.to_string();
	}
	let tail_is_alpha3 = chars.len() >= 4 && chars[1..4].iter().all(|c| c.is_ascii_lowercase());
	if !tail_is_alpha3 {
		return s.to_string();
	}
	let mut out = String::with_capacity(s.len());
	out.push(letter);
	out.extend(&chars[1..]);
	out
}

/// Fix only digits embedded in an otherwise-alphabetic local-part segment;
/// digit-only segments pass through untouched.
fn clean_segment_for_display(part: &str) -> String {
	if !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()) {
		return part.to_string();
	}
	let mut result = part.to_string();
	for (digit, letter) in EMBEDDED_DIGIT_FIXES {
		result = replace_digit_between_letters(&result, *digit, *letter);
	}
	for (digit, letter) in LEADING_DIGIT_FIXES {
		result = replace_leading_digit(&result, *digit, *letter);
	}
	result
}

/// Conservative digit-only cleanup of a local part, preserving `.`/`_`
/// separators, for use in the node's displayed id.
pub fn ocr_clean_local_for_display(local: &str) -> String {
	let mut out = String::with_capacity(local.len());
	let mut segment = String::new();
	for c in local.chars() {
		if c == '.' || c == '_' {
			out.push_str(&clean_segment_for_display(&segment));
			segment.clear();
			out.push(c);
		} else {
			segment.push(c);
		}
	}
	out.push_str(&clean_segment_for_display(&segment));
	out
}

/// Split a local part on `.`, `_`, `-`, drop single-character fragments, and
/// sort the remainder alphabetically so OCR-reordered parts compare equal.
pub fn canonicalize_local(local: &str) -> String {
	let mut parts: Vec<&str> = local.split(['.', '_', '-']).filter(|p| p.len() > 1).collect();
	if parts.len() >= 2 {
		parts.sort_unstable();
		parts.join(".")
	} else {
		local.to_string()
	}
}

/// Apply OCR folding then canonical sorting to the local half of an address.
pub fn apply_local_ocr_normalization(email: &str) -> String {
	let Some(at_pos) = email.find('@') else {
		return email.to_string();
	};
	let (local, domain) = email.split_at(at_pos);
	let local = ocr_normalize_local(local);
	let local = canonicalize_local(&local);
	format!("{local}{domain}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ocr_normalize_folds_digraphs() {
		assert_eq!(ocr_normalize_local("svdnev"), "sydney");
	}

	#[test]
	fn canonicalize_sorts_multi_part_locals() {
		assert_eq!(canonicalize_local("sydney.hupp"), "hupp.sydney");
		assert_eq!(canonicalize_local("hupp.sydney"), "hupp.sydney");
	}

	#[test]
	fn canonicalize_leaves_single_part_alone() {
		assert_eq!(canonicalize_local("sydney"), "sydney");
	}

	#[test]
	fn display_cleanup_fixes_embedded_digit_only() {
		assert_eq!(ocr_clean_local_for_display("sm1th"), "smith");
		assert_eq!(ocr_clean_local_for_display("smith"), "smith");
	}

	#[test]
	fn display_cleanup_leaves_digit_only_segment() {
		assert_eq!(ocr_clean_local_for_display("john.123"), "john.123");
	}

	#[test]
	fn display_cleanup_does_not_touch_letter_confusions() {
		assert_eq!(ocr_clean_local_for_display("bernhardt"), "bernhardt");
	}
}
