//! Layer 2: domain normalization (§4.5).
//!
//! Maps known EPA OCR garbles and a table of other garbled third-party
//! domains to their clean form, then applies generic TLD-suffix and
//! hostname-level OCR character fixes.

use crate::strkernel::levenshtein;
use crate::tables::{BAD_TLD_SUFFIXES, DOMAIN_FIXES, DOMAIN_OCR_CHAR_MAP, EPA_ERROR_DOMAINS};

fn is_likely_epa(domain: &str) -> bool {
	let Some(host) = domain.strip_suffix(".gov") else {
		return false;
	};
	if host.is_empty() {
		return false;
	}
	if host.chars().count() == 3 {
		return levenshtein(host, "epa") <= 1;
	}
	if host.chars().count() == 4 {
		let chars: Vec<char> = host.chars().collect();
		for i in 0..chars.len() {
			let mut reduced: String = chars[..i].iter().collect();
			reduced.extend(&chars[i + 1..]);
			if levenshtein(&reduced, "epa") <= 1 {
				return true;
			}
		}
	}
	false
}

/// Collapse a TLD accidentally split across two or three short dot-separated
/// components back into one (e.g. `cpa.g.qy` -> `cpa.gqy`).
fn collapse_split_tld(domain: &str) -> String {
	let parts: Vec<&str> = domain.split('.').collect();
	if parts.len() >= 3 {
		let last_two = format!("{}{}", parts[parts.len() - 2], parts[parts.len() - 1]);
		if parts[parts.len() - 2].len() <= 2 && parts[parts.len() - 1].len() <= 3 && last_two.len() <= 4
		{
			let head = parts[..parts.len() - 2].join(".");
			return format!("{head}.{last_two}");
		}
		if parts.len() >= 4 && parts[parts.len() - 3..].iter().all(|p| p.len() <= 2) {
			let joined: String = parts[parts.len() - 3..].concat();
			if joined.len() <= 5 {
				let head = parts[..parts.len() - 3].join(".");
				return format!("{head}.{joined}");
			}
		}
	}
	domain.to_string()
}

fn fix_suffix_chain(domain: &str) -> String {
	let mut domain = domain.to_string();
	for _ in 0..3 {
		let mut changed = false;

		for bad in [".govl", ".gov1", ".govj", ".govi"] {
			if domain.ends_with(bad) {
				domain.pop();
				changed = true;
			}
		}
		if !changed {
			for (bad, good) in BAD_TLD_SUFFIXES {
				if domain.ends_with(bad) {
					domain = format!("{}{}", &domain[..domain.len() - bad.len()], good);
					changed = true;
					break;
				}
			}
		}
		if !changed && domain.ends_with(".go") && !domain.ends_with(".go.") {
			let host = &domain[..domain.len() - 3];
			if !host.is_empty() && host.rsplit('.').next().map(|p| p.len() <= 5).unwrap_or(false) {
				domain.push('v');
				changed = true;
			}
		}
		if !changed && domain.len() > 4 {
			if let Some(tld) = domain.rsplit('.').next() {
				let ends_bad = tld.ends_with('l') || tld.ends_with('1') || tld.ends_with('j');
				if ends_bad && tld != "html" && tld != "mil" {
					domain.pop();
					changed = true;
				}
			}
		}
		if !changed {
			break;
		}
	}
	domain
}

fn apply_domain_ocr_map(domain: &str) -> String {
	let mut parts: Vec<String> = domain.split('.').map(str::to_string).collect();
	if parts.len() >= 2 {
		let last = parts.len() - 1;
		for part in parts.iter_mut().take(last) {
			for (err, fix) in DOMAIN_OCR_CHAR_MAP {
				*part = part.replace(err, fix);
			}
		}
	}
	parts.join(".")
}

/// Normalize a single domain: EPA-specific lookup, then other known
/// garbles, then generic suffix/OCR fixes, re-checking the lookup tables
/// after each rewrite.
pub fn normalize_domain(domain: &str) -> String {
	let mut domain = domain.to_lowercase();
	domain = domain.trim_matches(|c| c == '.' || c == '-').replace(' ', "");

	if EPA_ERROR_DOMAINS.contains(domain.as_str()) {
		return "epa.gov".to_string();
	}
	if domain == "iepa.gov" || domain == "calepa.ca.gov" {
		return domain;
	}
	if let Some(fix) = DOMAIN_FIXES.get(domain.as_str()) {
		return fix.to_string();
	}

	domain = collapse_split_tld(&domain);

	if EPA_ERROR_DOMAINS.contains(domain.as_str()) {
		return "epa.gov".to_string();
	}

	domain = fix_suffix_chain(&domain);

	if EPA_ERROR_DOMAINS.contains(domain.as_str()) {
		return "epa.gov".to_string();
	}
	if let Some(fix) = DOMAIN_FIXES.get(domain.as_str()) {
		return fix.to_string();
	}

	domain = apply_domain_ocr_map(&domain);

	if EPA_ERROR_DOMAINS.contains(domain.as_str()) {
		return "epa.gov".to_string();
	}
	if let Some(fix) = DOMAIN_FIXES.get(domain.as_str()) {
		return fix.to_string();
	}

	if is_likely_epa(&domain) {
		return "epa.gov".to_string();
	}

	domain
}

/// Apply [`normalize_domain`] to the domain half of a full address.
pub fn apply_domain_normalization(email: &str) -> String {
	let Some(at_pos) = email.find('@') else {
		return email.to_string();
	};
	let (local, domain) = email.split_at(at_pos);
	let domain = normalize_domain(&domain[1..]);
	format!("{local}@{domain}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn epa_error_list_collapses() {
		assert_eq!(normalize_domain("epa.qov"), "epa.gov");
		assert_eq!(normalize_domain("ep3.gov"), "epa.gov");
	}

	#[test]
	fn state_epa_preserved() {
		assert_eq!(normalize_domain("iepa.gov"), "iepa.gov");
		assert_eq!(normalize_domain("calepa.ca.gov"), "calepa.ca.gov");
	}

	#[test]
	fn domain_fixes_table_applies() {
		assert_eq!(normalize_domain("gmial.com"), "gmail.com");
		assert_eq!(normalize_domain("chevrontexaco.com"), "chevron.com");
	}

	#[test]
	fn fuzzy_epa_detection_catches_near_misses() {
		assert_eq!(normalize_domain("eba.gov"), "epa.gov");
	}

	#[test]
	fn non_epa_gov_domain_untouched() {
		assert_eq!(normalize_domain("state.gov"), "state.gov");
	}

	#[test]
	fn apply_to_full_address() {
		assert_eq!(apply_domain_normalization("john@epa.qov"), "john@epa.gov");
	}
}
