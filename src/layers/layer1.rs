//! Layer 1: structural cleanup (§4.4).
//!
//! Strips garbled `mailto:` prefixes, angle brackets, and stray dots/hyphens
//! before any domain- or local-part-specific normalization runs.

use crate::tables::{EMAIL_FIXES, MAILTO_RE};

/// Lowercase, strip `mailto:`-style prefixes and angle brackets, collapse
/// doubled dots, and apply the two known full-address OCR fixes.
pub fn structural_cleanup(email: &str) -> String {
	let email = email.trim().to_lowercase();
	let email = MAILTO_RE.replace(&email, "").to_string();
	let email = email.trim_matches(|c| c == '<' || c == '>').trim().to_string();

	let Some(at_pos) = email.find('@') else {
		return email;
	};

	let (local, domain) = email.split_at(at_pos);
	let domain = &domain[1..];

	let mut local = local.trim_matches('.').replace('-', ".");
	while local.contains("..") {
		local = local.replace("..", ".");
	}

	let mut domain = domain.to_string();
	while domain.contains("..") {
		domain = domain.replace("..", ".");
	}
	let domain = domain.trim_matches(|c| c == '.' || c == '-');

	let result = if !local.is_empty() && !domain.is_empty() {
		format!("{local}@{domain}")
	} else {
		email.clone()
	};

	EMAIL_FIXES.get(result.as_str()).map(|s| s.to_string()).unwrap_or(result)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_mailto_prefix() {
		assert_eq!(structural_cleanup("mailto:JOHN@EPA.GOV"), "john@epa.gov");
	}

	#[test]
	fn strips_angle_brackets_and_dots() {
		assert_eq!(structural_cleanup("<.john..doe.@epa.gov>"), "john.doe@epa.gov");
	}

	#[test]
	fn hyphens_become_dots_in_local() {
		assert_eq!(structural_cleanup("john-doe@epa.gov"), "john.doe@epa.gov");
	}

	#[test]
	fn applies_known_email_fix() {
		assert_eq!(
			structural_cleanup("zumwalt@americanchemistry.com"),
			"bryan_zumwalt@americanchemistry.com"
		);
	}

	#[test]
	fn non_address_passes_through_unsplit() {
		assert_eq!(structural_cleanup("not-an-email"), "not-an-email");
	}
}
