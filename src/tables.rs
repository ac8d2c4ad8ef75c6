//! Fixed normalization dictionaries driving Layers 1–3 and the display-name
//! heuristics of §4.12 (§4.3). Every entry is transcribed verbatim from
//! `original_source/dedup_network.py`, the program this pipeline was
//! distilled from — these are not invented, they are observed OCR garbles.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

/// ~100 garbled spellings of `epa.gov`. Every member collapses to `epa.gov`.
/// `iepa.gov` and `calepa.ca.gov` are deliberately absent — they are
/// distinct state-agency domains and must survive Layer 2 unchanged.
pub static EPA_ERROR_DOMAINS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
	[
		"epa.govl", "epa.qov", "epa.qovl", "epa.goy", "epa.aov", "epa.aovl",
		"epa.gqv", "epa.rov", "epa.rovl", "epa.fiov", "epa.giov", "epa.g0v",
		"ep3.gov", "ep3.govl", "cpa.gov", "cpa.govl", "cp3.gov", "epa.qoy",
		"epa.aoyl", "epa.goyl", "epa.gov1", "epa.go v", "epamail.epa.gov",
		"epa.flov", "epa.gqvl", "epa.qqv", "epa.gq", "epa.govcmai", "epa.eov",
		"epa.gqyl", "epa.rgv", "epa.go", "epa.govemai", "epa.oov", "epa.oovl",
		"epa..gov", "epa.uo", "epa.qo", "epa.ggy", "epa.qqvl", "epa.gqy",
		"epa.gm", "epa.govt", "epa.ggv", "epa.rqv", "epa.qqyl", "epa.sov",
		"epa.flovl", "epa.rovj", "epa.gqvi", "epa.jtov", "epa.goto", "epa.rqy",
		"epa.governai", "epa.aoy", "epa.ciov", "epa.qoyl", "epa.qovy", "epa.ggyl",
		"epa.govj", "epa..gqv", "epa.rev", "epa.gev", "epa.p.ov", "epa.g.qy",
		"epa.gow", "epa.qqy", "epa.qol", "-epa.gov", "1epa.gov", "1lepa.gov",
		"11epa.gov", "gepa.gov", "jepa.gov", "epamail.gov",
		"domino.epamail.epa.gov", "usepa.onmicrosoft.com",
		// cpa.* variants (c is an OCR error for e)
		"cpa.gqy", "cpa.go", "cpa.goy", "cpa.goyl", "cpa.ggy", "cpa.gm",
		"cpa.gg", "cpa.g.qy", "cpa.gcn", "cpa.qov", "cpa.aov",
		"cp3.govl", "cp3.goy", "cp3.qov",
		// other prefixed/garbled EPA
		".epa.gov", ".epa.gqy", ".epa.go", ".epa.aov",
		"ilepa.gov", "ljcpa.gov", "qa.gov",
		"epama.il",
	]
	.into_iter()
	.collect()
});

/// State EPA domains that look like EPA garbles but are distinct entities.
pub static EPA_DOMAIN_EXCEPTIONS: LazyLock<HashSet<&'static str>> =
	LazyLock::new(|| ["iepa.gov", "calepa.ca.gov"].into_iter().collect());

/// Full-address OCR composites, applied once after Layer 1's structural fixup.
pub static EMAIL_FIXES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
	[
		("zumwalt@americanchemistry.com", "bryan_zumwalt@americanchemistry.com"),
		("bryan.ziimwalt@americanchemistry.com", "bryan_zumwalt@americanchemistry.com"),
	]
	.into_iter()
	.collect()
});

/// Domain-level OCR errors mapped to their clean form (~150 entries).
pub static DOMAIN_FIXES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
	[
		("b1m.gov", "blm.gov"),
		("qmail.com", "gmail.com"),
		("gmial.com", "gmail.com"),
		("grnail.com", "gmail.com"),
		("grnall.com", "gmail.com"),
		("qrnail.com", "gmail.com"),
		("gmai1.com", "gmail.com"),
		("acvpl.org", "acypl.org"),
		("acypi.org", "acypl.org"),
		("c3i.org", "cei.org"),
		("afan.dpa.org", "afandpa.org"),
		("af3ndpa.org", "afandpa.org"),
		("iosidoi.gov", "ios.doi.gov"),
		("ios.doigov", "ios.doi.gov"),
		("iosidoi.goy", "ios.doi.gov"),
		("iosdoi.gov", "ios.doi.gov"),
		("jos.doi.gov", "ios.doi.gov"),
		("os.doi.gov", "ios.doi.gov"),
		("io.s.doi.gov", "ios.doi.gov"),
		("iios.doi.gov", "ios.doi.gov"),
		("soldoi.gov", "sol.doi.gov"),
		("lsol.doi.gov", "sol.doi.gov"),
		("aiaska.gov", "alaska.gov"),
		("maii.mil", "mail.mil"),
		("chevrontexaco.com", "chevron.com"),
		("cheyron.com", "chevron.com"),
		("westgoy.org", "westgov.org"),
		("ourpublicseryice.org", "ourpublicservice.org"),
		("conseryatiye.org", "conservative.org"),
		("conseryationfund.org", "conservationfund.org"),
		("conseryamerica.org", "conservamerica.org"),
		("yenable.com", "venable.com"),
		("yerizon.net", "verizon.net"),
		("yolyo.com", "volvo.com"),
		("yalero.com", "valero.com"),
		("yocgen.com", "vocgen.com"),
		("yictoryenterprises.com", "victoryenterprises.com"),
		("yisitokc.com", "visitokc.com"),
		("liyingstongroupdc.com", "livingstongroupdc.com"),
		("liyingstongroupdc.co", "livingstongroupdc.com"),
		("hoganloyells.com", "hoganlovells.com"),
		("hoganloyeiis.com", "hoganlovells.com"),
		("hoganjoyells.com", "hoganlovells.com"),
		("nayigatorsglobal.com", "navigatorsglobal.com"),
		("gayelresources.com", "gavelresources.com"),
		("coloradoliyestock.org", "coloradolivestock.org"),
		("colostate.edu", "colostate.edu"),
		("hoydengrayassociates.com", "boydengrayassociates.com"),
		("hhqyentures.com", "hhqventures.com"),
		("hewelleyents.com", "hewellevents.com"),
		("toxseryices.com", "toxservices.com"),
		("public.goydeliyery.com", "public.govdelivery.com"),
		("seryice.goydeliyery.com", "service.govdelivery.com"),
		("bcdtrayel.com", "bcdtravel.com"),
		("creatiye-mill.com", "creative-mill.com"),
		("inyariantgr.com", "invariantgr.com"),
		("dailycallemewsfoundation.org", "dailycallernewsfoundation.org"),
		("bockomygroup.com", "bockornygroup.com"),
		("hockomygroup.com", "bockornygroup.com"),
		("bqckomygrqup.com", "bockornygroup.com"),
		("bockomygroup.co", "bockornygroup.com"),
		("bockomygrotip.com", "bockornygroup.com"),
		("southemco.com", "southernco.com"),
		("sidiey.com", "sidley.com"),
		("sidiey.co", "sidley.com"),
		("hollandliart.com", "hollandhart.com"),
		("honandhart.com", "hollandhart.com"),
		("hqllandhart.com", "hollandhart.com"),
		("nelsonmiillins.com", "nelsonmullins.com"),
		("nelsonmullms.com", "nelsonmullins.com"),
		("aiuminum.org", "aluminum.org"),
		("aiphq.org", "afphq.org"),
		("afpni.org", "afphq.org"),
		("cargili.com", "cargill.com"),
		("cargin.com", "cargill.com"),
		("conocophiliips.com", "conocophillips.com"),
		("conocophijlips.com", "conocophillips.com"),
		("conocophiglips.com", "conocophillips.com"),
		("conocophihips.com", "conocophillips.com"),
		("conocophiljips.com", "conocophillips.com"),
		("conocoohiilids.co", "conocophillips.com"),
		("conocophiilips.com", "conocophillips.com"),
		("conocophiyips.co", "conocophillips.com"),
		("bqeing.com", "boeing.com"),
		("archcoai.com", "archcoal.com"),
		("consoleiiergy.com", "consolenergy.com"),
		("gmaii.com", "gmail.com"),
		("listserye.api.org", "listserv.api.org"),
		("alphagrpdc.com", "alphagrpdc.com"),
		("aiphagrpdc.com", "alphagrpdc.com"),
		("herifage.org", "heritage.org"),
		("hcritage.org", "heritage.org"),
		("hentage.org", "heritage.org"),
		("americanchemisfry.com", "americanchemistry.com"),
		("americanchcmisry.com", "americanchemistry.com"),
		("americancheniistry.com", "americanchemistry.com"),
		("amerieanchemistry.com", "americanchemistry.com"),
		("americanchemistry.coni", "americanchemistry.com"),
		("americanchemistfy.co", "americanchemistry.com"),
		("amerlearichemistry.com", "americanchemistry.com"),
		("americaiichemistry.com", "americanchemistry.com"),
		("crqplifeamerica.org", "croplifeamerica.org"),
		("cropnfeamerica.org", "croplifeamerica.org"),
		("cropiifeamerica.org", "croplifeamerica.org"),
		("croplifeameriea.org", "croplifeamerica.org"),
		("croplifeamenca.org", "croplifeamerica.org"),
		("cropisfeaniersca.org", "croplifeamerica.org"),
		("crqpiifearoeriea.org", "croplifeamerica.org"),
		("crophfeamerica.org", "croplifeamerica.org"),
		("croplifearoerica.org", "croplifeamerica.org"),
		("cfopiifeamefica.org", "croplifeamerica.org"),
		("cfqplifeamerica.org", "croplifeamerica.org"),
		("cropkfeamerica.oig", "croplifeamerica.org"),
		("cropgsfeamerica.org", "croplifeamerica.org"),
		("crqpsifeamenea.org", "croplifeamerica.org"),
		("crqpjifeameriea.org", "croplifeamerica.org"),
		("cropisfeamersca.org", "croplifeamerica.org"),
		("cropsifeaniefica.org", "croplifeamerica.org"),
		("cropnfeanierica.orr", "croplifeamerica.org"),
		("cropiifeamenca.org", "croplifeamerica.org"),
		("ge.co", "ge.com"),
		("cbsnews.co", "cbsnews.com"),
		("socma.co", "socma.com"),
		("nahb.ofg", "nahb.org"),
		("nahb.grg", "nahb.org"),
		("lung.ofg", "lung.org"),
		("nam.ofg", "nam.org"),
		("okfb.ofg", "okfb.org"),
		("awwa.ofg", "awwa.org"),
		("qkfb.org", "okfb.org"),
		("growtheneray.org", "growthenergy.org"),
		("nohle.org", "noble.org"),
		("sallt.com", "salt.com"),
		("loyes.com", "loves.com"),
		("miningamerica.org", "miningamerica.org"),
		("dowcoming.com", "dowcorning.com"),
		("chsnews.com", "cbsnews.com"),
		("hsph.haryard.edu", "hsph.harvard.edu"),
		("wms-jen.com", "wms-jen.com"),
		("lawa6o.com", "lawa60.com"),
		("72ostrategies.com", "720strategies.com"),
		("gps-5o.com", "gps-50.com"),
		("cfaeorp.com", "cfacorp.com"),
		("painf.org", "paint.org"),
		("eaest.com", "east.com"),
		("dorox.com", "dorox.com"),
		("dqw.com", "dow.com"),
	]
	.into_iter()
	.collect()
});

/// Ordered longest-pattern-first: OCR character substitutions for domains
/// (applied to every label except the TLD).
pub static DOMAIN_OCR_CHAR_MAP: &[(&str, &str)] =
	&[("rn", "m"), ("1", "l"), ("3", "a"), ("0", "o"), ("v", "y")];

/// Ordered longest-pattern-first: OCR character substitutions for local
/// parts, including the `ffl`/`ffi` ligatures.
pub static LOCAL_OCR_CHAR_MAP: &[(&str, &str)] = &[
	("ffl", "m"),
	("ffi", "n"),
	("rn", "m"),
	("ii", "n"),
	("v", "y"),
	("1", "l"),
	("0", "o"),
	("3", "a"),
];

/// Bad-TLD-suffix rewrites for Layer 2 step 4. First match (in order) wins.
pub static BAD_TLD_SUFFIXES: &[(&str, &str)] = &[
	(".qov", ".gov"),
	(".aov", ".gov"),
	(".goy", ".gov"),
	(".rov", ".gov"),
	(".sov", ".gov"),
	(".eov", ".gov"),
	(".oov", ".gov"),
	(".fiov", ".gov"),
	(".gow", ".gov"),
	(".gcn", ".gov"),
	(".gq", ".gov"),
	(".gqy", ".gov"),
	(".ggy", ".gov"),
	(".gg", ".gov"),
	(".eom", ".com"),
	(".corn", ".com"),
	(".coml", ".com"),
	(".comi", ".com"),
	(".orq", ".org"),
	(".orql", ".org"),
	(".ora", ".org"),
	(".ore", ".org"),
	(".orgl", ".org"),
	(".edul", ".edu"),
];

/// Garbled `mailto:` prefixes, anchored to the start of the string. The
/// colon may itself be OCR'd as `i`, `1`, `l`, or `;`; stray prefix
/// characters (`r`, `f`, `n`, `c`) may precede `mailto` from adjacent OCR
/// noise.
pub static MAILTO_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"(?i)^(?:[rfnc]?mailto[i1l:;c]\s*|[rfnc]?rnailto[i1l:;c]\s*|[rfnc]?rnai[il1]to[i1l:;c]\s*|[rfnc]?mai[il1]to[i1l:;c]\s*|mail\.to[i1l:;c]\s*|[rfnc]?mailtcr\s*|[rfnc]?mai[il1]sto[i1l:;c]\s*|[1l]to[i1l:;c]\s*)",
	)
	.expect("MAILTO_RE is a fixed, valid pattern")
});

/// Domains known to use `lastname.firstname@domain` addressing, driving the
/// display-name reordering of §4.12.
pub static LASTNAME_FIRST_DOMAINS: LazyLock<HashSet<&'static str>> =
	LazyLock::new(|| ["epa.gov"].into_iter().collect());

/// Locals that denote a role mailbox rather than a person; guards Layer 7's
/// cross-domain merges from over-eager matches on shared role addresses.
pub static GENERIC_LOCALS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
	[
		"info", "admin", "support", "contact", "office", "mail", "webmaster",
		"sales", "noreply", "help", "service", "news", "media", "press",
		"marketing", "hr", "legal", "compliance", "jobs", "careers", "events",
		"feedback", "billing", "security", "postmaster", "abuse", "root",
		"team", "hello", "general", "inquiries", "membership", "scheduling",
		"requests", "records", "orders", "alerts", "comments", "updates",
		"planning", "operations", "regulation", "program", "intern",
		"counsel", "director", "chairman", "editor", "congress",
	]
	.into_iter()
	.collect()
});

/// English business nouns that are not personal names, guarding the
/// single-word name-splitting heuristic of §4.12 from producing nonsense
/// like "P. Ress" out of "press".
pub static NAME_SPLIT_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
	[
		"press", "scheduling", "requests", "records", "planning",
		"counsel", "director", "manager", "editor", "congress",
		"intern", "orders", "updates", "alerts", "comments",
		"regulation", "regulatory", "operations", "program",
		"executive", "chairman", "president", "secretary",
		"treasurer", "governor", "senator", "representative",
	]
	.into_iter()
	.collect()
});

/// ~400 common first names, guarding Layer 7's cross-domain merges from
/// treating a shared given name as proof of shared identity without a
/// domain-similarity check.
pub static COMMON_FIRST_NAMES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
	[
		"aaron", "adam", "adrian", "alan", "albert", "alex", "alexander",
		"alfred", "alice", "alicia", "alison", "allen", "allison", "amanda",
		"amber", "amy", "andrea", "andrew", "angela", "ann", "anna", "anne",
		"annie", "anthony", "april", "arthur", "ashley", "barbara", "barry",
		"benjamin", "bernard", "beth", "bethany", "betty", "beverly", "bill",
		"billy", "blake", "bobby", "bonnie", "brad", "bradley", "brenda",
		"brendan", "brent", "brett", "brian", "bridget", "brittany", "brook",
		"brooke", "bruce", "bryan", "calvin", "cameron", "carl", "carol",
		"caroline", "carolyn", "catherine", "chad", "charles", "charlotte",
		"cheryl", "chris", "christian", "christina", "christine", "christopher",
		"cindy", "claire", "clarence", "clark", "claudia", "clifford", "clint",
		"cody", "cole", "colin", "connie", "connor", "corey", "craig",
		"crystal", "cynthia", "dale", "dallas", "dana", "daniel", "danny",
		"darren", "dave", "david", "dawn", "dean", "debbie", "deborah",
		"debra", "denise", "dennis", "derek", "derrick", "diana", "diane",
		"don", "donald", "donna", "doris", "dorothy", "doug", "douglas",
		"drew", "dustin", "dylan", "earl", "eddie", "edward", "eileen",
		"elaine", "elizabeth", "ellen", "emily", "emma", "eric", "erica",
		"erin", "ernest", "eugene", "eva", "evan", "evelyn", "faith",
		"florence", "frances", "francis", "frank", "fred", "frederick",
		"gabriel", "gary", "gavin", "gene", "george", "gerald", "gina",
		"glen", "glenn", "gloria", "gordon", "grace", "grant", "greg",
		"gregory", "gwen", "hannah", "harold", "harry", "harvey", "heather",
		"helen", "henry", "herbert", "holly", "howard", "hunter", "irene",
		"isaac", "ivan", "jack", "jackie", "jacob", "jacqueline", "james",
		"jamie", "jane", "janet", "janice", "jared", "jasmine", "jason",
		"jean", "jeff", "jeffrey", "jennifer", "jenny", "jeremy", "jerry",
		"jesse", "jessica", "jill", "jimmy", "joan", "joanne", "jocelyn",
		"jody", "joel", "john", "johnny", "jonathan", "jordan", "joseph",
		"joshua", "joyce", "judith", "judy", "julia", "julian", "julie",
		"justin", "karen", "karl", "kate", "katherine", "kathleen", "kathryn",
		"kathy", "katie", "keith", "kelly", "ken", "kenneth", "kevin",
		"kimberly", "kirk", "kristen", "kristin", "kristina", "kurt", "kyle",
		"lance", "larry", "laura", "lauren", "laurie", "lawrence", "leah",
		"lee", "leon", "leonard", "leslie", "lillian", "linda", "lindsay",
		"lisa", "lois", "loretta", "lori", "louis", "louise", "lucas", "luke",
		"lynn", "madison", "marc", "marcus", "margaret", "maria", "marie",
		"marilyn", "marion", "mark", "marsha", "martha", "martin", "marvin",
		"mary", "matt", "matthew", "maureen", "max", "megan", "melissa",
		"michael", "michele", "michelle", "mike", "miles", "miranda", "misty",
		"mitchell", "molly", "monica", "morgan", "morris", "nancy", "natalie",
		"nathan", "neil", "nelson", "nicholas", "nicole", "noah", "norma",
		"norman", "oliver", "olivia", "oscar", "owen", "paige", "pamela",
		"patricia", "patrick", "paul", "paula", "peggy", "penny", "peter",
		"philip", "phillip", "phyllis", "rachel", "ralph", "randy", "raymond",
		"rebecca", "regina", "renee", "rhonda", "richard", "rick", "rita",
		"robert", "robin", "rodney", "roger", "roland", "ronald", "rose",
		"ross", "roxanne", "roy", "ruby", "russell", "ruth", "ryan",
		"sabrina", "sally", "samantha", "samuel", "sandra", "sandy", "sara",
		"sarah", "scott", "sean", "seth", "shane", "shannon", "sharon",
		"sheila", "shelley", "sherry", "shirley", "sophia", "stacey",
		"stacy", "stanley", "stefanie", "stephanie", "stephen", "steve",
		"steven", "stuart", "susan", "suzanne", "sydney", "sylvia", "tamara",
		"tammy", "tanya", "tara", "taylor", "teresa", "terri", "terry",
		"thelma", "theresa", "thomas", "tiffany", "timothy", "tina", "todd",
		"tommy", "tony", "tracy", "travis", "trevor", "troy", "tyler",
		"valerie", "vanessa", "vernon", "veronica", "vicki", "victoria",
		"vincent", "virginia", "vivian", "wade", "walter", "wanda", "warren",
		"wayne", "wendy", "wesley", "whitney", "william", "willie", "yolanda",
		"zachary",
	]
	.into_iter()
	.collect()
});

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn epa_table_preserves_exceptions() {
		assert!(!EPA_ERROR_DOMAINS.contains("iepa.gov"));
		assert!(!EPA_ERROR_DOMAINS.contains("calepa.ca.gov"));
		assert!(EPA_DOMAIN_EXCEPTIONS.contains("iepa.gov"));
		assert!(EPA_DOMAIN_EXCEPTIONS.contains("calepa.ca.gov"));
	}

	#[test]
	fn mailto_matches_start_only() {
		assert!(MAILTO_RE.is_match("mailto:john@epa.gov"));
		assert!(MAILTO_RE.is_match("rnailto:john@epa.gov"));
		assert!(MAILTO_RE.is_match("lto:john@epa.gov"));
		assert!(!MAILTO_RE.is_match("john.mailto@epa.gov"));
	}

	#[test]
	fn domain_fixes_sample_entries() {
		assert_eq!(DOMAIN_FIXES["gmial.com"], "gmail.com");
		assert_eq!(DOMAIN_FIXES["conocophiljips.com"], "conocophillips.com");
		assert_eq!(DOMAIN_FIXES["chevrontexaco.com"], "chevron.com");
	}
}
