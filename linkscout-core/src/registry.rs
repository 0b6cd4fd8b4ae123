//! OSINT source registry
//!
//! Declares every category and the lookup sources it links to, with their
//! URL and description templates.

use serde::Serialize;

use Normalization::{Hyphenate, StripWhitespace};

/// Placeholder replaced by the encoded identifier in URL templates
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Placeholder replaced by the raw identifier in description templates
pub const TARGET_PLACEHOLDER: &str = "{target}";

/// Placeholder replaced by the source name in description templates
pub const SOURCE_PLACEHOLDER: &str = "{source}";

/// How the identifier is reshaped before it is percent-encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Use the identifier as given
    #[default]
    None,
    /// Replace each whitespace character with `-` (slug-style path segments)
    Hyphenate,
    /// Drop whitespace entirely (hashtag-style segments)
    StripWhitespace,
}

impl Normalization {
    /// Apply this policy to an identifier
    pub fn apply(self, target: &str) -> String {
        match self {
            Normalization::None => target.to_string(),
            Normalization::Hyphenate => target
                .chars()
                .map(|c| if c.is_whitespace() { '-' } else { c })
                .collect(),
            Normalization::StripWhitespace => {
                target.chars().filter(|c| !c.is_whitespace()).collect()
            }
        }
    }
}

/// A single lookup source
#[derive(Debug, Clone, Serialize)]
pub struct SourceTemplate {
    /// Human-readable name, unique within its category
    pub name: &'static str,
    /// URL template, optionally with a {query} placeholder
    pub url_template: &'static str,
    /// Description template with {target} and {source} placeholders
    pub description_template: &'static str,
    /// Identifier reshaping expected by the endpoint
    pub normalization: Normalization,
}

impl SourceTemplate {
    const fn new(
        name: &'static str,
        url_template: &'static str,
        description_template: &'static str,
    ) -> Self {
        Self {
            name,
            url_template,
            description_template,
            normalization: Normalization::None,
        }
    }

    const fn normalized(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Build the lookup URL for a target
    pub fn build_url(&self, target: &str) -> String {
        if self.is_fixed() {
            return self.url_template.to_string();
        }
        let query = form_encode(&self.normalization.apply(target));
        self.url_template.replace(QUERY_PLACEHOLDER, &query)
    }

    /// Build the human-readable description for a target
    pub fn describe(&self, target: &str) -> String {
        self.description_template
            .replace(SOURCE_PLACEHOLDER, self.name)
            .replace(TARGET_PLACEHOLDER, target)
    }

    /// Whether the URL ignores the identifier
    pub fn is_fixed(&self) -> bool {
        !self.url_template.contains(QUERY_PLACEHOLDER)
    }
}

/// A named group of sources
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTemplate {
    pub name: &'static str,
    pub sources: &'static [SourceTemplate],
}

/// Percent-encode for a query string or path segment, with spaces as `+`
pub fn form_encode(s: &str) -> String {
    // urlencoding keeps the same unreserved set; only the space form differs
    urlencoding::encode(s).replace("%20", "+")
}

const SOCIAL: &str = "Potential {source} profiles for {target}";
const BREACH: &str = "Check if {target} appears in known data breaches";
const DIRECTORY: &str = "Public records and contact information for {target}";
const PROFESSIONAL: &str =
    "Professional information, publications, and business data for {target}";
const RECORDS: &str = "Public records and official filings that may mention {target}";
const WEB: &str = "General web search for {target}";
const IMAGES: &str = "Image search for {target}";
const DARK_WEB: &str = "Search for {target} on {source}";
const PHONE: &str = "Reverse phone lookup for {target} on {source}";
const EMAIL: &str = "Email lookup for {target} on {source}";
const GEO: &str = "Geolocation lookup for {target} on {source}";
const CHAIN: &str = "Blockchain transactions for {target} on {source}";

/// Every category, in presentation order
pub static CATEGORIES: &[CategoryTemplate] = &[
    CategoryTemplate {
        name: "Social Media",
        sources: &[
            SourceTemplate::new(
                "Twitter/X",
                "https://twitter.com/search?q={query}&src=typed_query&f=user",
                SOCIAL,
            ),
            SourceTemplate::new(
                "LinkedIn",
                "https://www.linkedin.com/search/results/people/?keywords={query}",
                SOCIAL,
            ),
            SourceTemplate::new(
                "Facebook",
                "https://www.facebook.com/search/people/?q={query}",
                SOCIAL,
            ),
            SourceTemplate::new(
                "Instagram",
                "https://www.instagram.com/explore/tags/{query}",
                SOCIAL,
            )
            .normalized(StripWhitespace),
            SourceTemplate::new(
                "Reddit",
                "https://www.reddit.com/search/?q={query}&type=user",
                SOCIAL,
            ),
            SourceTemplate::new(
                "GitHub",
                "https://github.com/search?q={query}&type=users",
                SOCIAL,
            ),
        ],
    },
    CategoryTemplate {
        name: "Data Breach Sites",
        sources: &[
            SourceTemplate::new("Have I Been Pwned", "https://haveibeenpwned.com/", BREACH),
            SourceTemplate::new("BreachDirectory", "https://breachdirectory.org/", BREACH),
            SourceTemplate::new("DeHashed", "https://dehashed.com/search?query={query}", BREACH),
        ],
    },
    CategoryTemplate {
        name: "People Directories",
        sources: &[
            SourceTemplate::new("Whitepages", "https://www.whitepages.com/name/{query}", DIRECTORY)
                .normalized(Hyphenate),
            SourceTemplate::new("Spokeo", "https://www.spokeo.com/{query}", DIRECTORY)
                .normalized(Hyphenate),
            SourceTemplate::new(
                "PeopleFinders",
                "https://www.peoplefinders.com/people/{query}",
                DIRECTORY,
            )
            .normalized(Hyphenate),
            SourceTemplate::new(
                "TruePeopleSearch",
                "https://www.truepeoplesearch.com/results?name={query}",
                DIRECTORY,
            ),
            SourceTemplate::new(
                "FastPeopleSearch",
                "https://www.fastpeoplesearch.com/name/{query}",
                DIRECTORY,
            )
            .normalized(Hyphenate),
            SourceTemplate::new("411.com", "https://www.411.com/name/{query}", DIRECTORY)
                .normalized(Hyphenate),
        ],
    },
    CategoryTemplate {
        name: "Professional Data",
        sources: &[
            SourceTemplate::new(
                "Google Scholar",
                "https://scholar.google.com/scholar?q={query}",
                PROFESSIONAL,
            ),
            SourceTemplate::new(
                "ResearchGate",
                "https://www.researchgate.net/search/researcher?q={query}",
                PROFESSIONAL,
            ),
            SourceTemplate::new(
                "ORCID",
                "https://orcid.org/orcid-search/search?searchQuery={query}",
                PROFESSIONAL,
            ),
            SourceTemplate::new(
                "Crunchbase",
                "https://www.crunchbase.com/textsearch?q={query}&entity=people",
                PROFESSIONAL,
            ),
            SourceTemplate::new(
                "Bloomberg",
                "https://www.bloomberg.com/search?query={query}",
                PROFESSIONAL,
            ),
        ],
    },
    CategoryTemplate {
        name: "Public Records",
        sources: &[
            SourceTemplate::new("SearchQuarry", "https://www.searchquarry.com/namesearch/", RECORDS),
            SourceTemplate::new("VoterRecords", "https://voterrecords.com/voters/{query}", RECORDS)
                .normalized(Hyphenate),
            SourceTemplate::new(
                "OpenCorporates",
                "https://opencorporates.com/officers?utf8=%E2%9C%93&q={query}&commit=Search",
                RECORDS,
            ),
            SourceTemplate::new(
                "SEC Edgar",
                "https://www.sec.gov/cgi-bin/browse-edgar?company={query}&owner=exclude&action=getcompany",
                RECORDS,
            ),
            SourceTemplate::new(
                "Property Records",
                "https://www.propertyshark.com/mason/Search/",
                RECORDS,
            ),
        ],
    },
    CategoryTemplate {
        name: "Web Presence",
        sources: &[
            SourceTemplate::new("Google", "https://www.google.com/search?q={query}", WEB),
            SourceTemplate::new("Bing", "https://www.bing.com/search?q={query}", WEB),
            SourceTemplate::new("DuckDuckGo", "https://duckduckgo.com/?q={query}", WEB),
            SourceTemplate::new("Baidu", "https://www.baidu.com/s?wd={query}", WEB),
            SourceTemplate::new("Yandex", "https://yandex.com/search/?text={query}", WEB),
            SourceTemplate::new("Wayback Machine", "https://web.archive.org/web/*/{query}", WEB),
        ],
    },
    CategoryTemplate {
        name: "Images",
        sources: &[
            SourceTemplate::new(
                "Google Images",
                "https://www.google.com/search?q={query}&tbm=isch",
                IMAGES,
            ),
            SourceTemplate::new(
                "Bing Images",
                "https://www.bing.com/images/search?q={query}",
                IMAGES,
            ),
            SourceTemplate::new(
                "Yandex Images",
                "https://yandex.com/images/search?text={query}",
                IMAGES,
            ),
            // Reverse image engines need a manual upload
            SourceTemplate::new("TinEye", "https://tineye.com/", IMAGES),
            SourceTemplate::new("PimEyes", "https://pimeyes.com/en", IMAGES),
        ],
    },
    CategoryTemplate {
        name: "Dark Web",
        sources: &[
            SourceTemplate::new("Ahmia", "https://ahmia.fi/search/?q={query}", DARK_WEB),
            SourceTemplate::new("DarkSearch", "https://darksearch.io/search?query={query}", DARK_WEB),
        ],
    },
    CategoryTemplate {
        name: "Reverse Phone Lookup",
        sources: &[
            SourceTemplate::new("TrueCaller", "https://www.truecaller.com/search/us/{query}", PHONE),
            SourceTemplate::new("AnyWho", "https://www.anywho.com/phone/{query}", PHONE),
        ],
    },
    CategoryTemplate {
        name: "Email Addresses",
        sources: &[
            SourceTemplate::new("Hunter.io", "https://hunter.io/search/{query}", EMAIL),
            SourceTemplate::new("EmailRep", "https://emailrep.io/{query}", EMAIL),
        ],
    },
    CategoryTemplate {
        name: "Geolocation",
        sources: &[
            SourceTemplate::new("IP2Location", "https://www.ip2location.com/demo/{query}", GEO),
            SourceTemplate::new("MaxMind", "https://www.maxmind.com/en/geoip-demo/{query}", GEO),
        ],
    },
    CategoryTemplate {
        name: "Blockchain",
        sources: &[
            SourceTemplate::new(
                "Blockchain.info",
                "https://www.blockchain.com/btc/address/{query}",
                CHAIN,
            ),
            SourceTemplate::new("Etherscan", "https://etherscan.io/address/{query}", CHAIN),
        ],
    },
];

/// All categories in presentation order
pub fn categories() -> impl Iterator<Item = &'static CategoryTemplate> {
    CATEGORIES.iter()
}

/// Category names in presentation order
pub fn category_names() -> Vec<&'static str> {
    categories().map(|c| c.name).collect()
}

/// Look up a category by exact name
pub fn find_category(name: &str) -> Option<&'static CategoryTemplate> {
    categories().find(|c| c.name == name)
}

/// Total number of configured sources across all categories
pub fn source_count() -> usize {
    categories().map(|c| c.sources.len()).sum()
}

/// The whole registry as indented JSON
pub fn registry_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(CATEGORIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_form_encode() {
        assert_eq!(form_encode("John Smith"), "John+Smith");
        assert_eq!(form_encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(form_encode("1+1"), "1%2B1");
        assert_eq!(form_encode("safe-_.~"), "safe-_.~");
        assert_eq!(form_encode("José"), "Jos%C3%A9");
    }

    #[test]
    fn test_normalization() {
        assert_eq!(Normalization::None.apply("Jane Doe"), "Jane Doe");
        assert_eq!(Normalization::Hyphenate.apply("Jane Doe"), "Jane-Doe");
        assert_eq!(Normalization::Hyphenate.apply("a\tb c"), "a-b-c");
        assert_eq!(Normalization::StripWhitespace.apply(" Jane  Doe "), "JaneDoe");
    }

    #[test]
    fn test_build_url() {
        let whitepages = &find_category("People Directories").unwrap().sources[0];
        assert_eq!(
            whitepages.build_url("Jane Doe"),
            "https://www.whitepages.com/name/Jane-Doe"
        );

        let instagram = find_category("Social Media")
            .unwrap()
            .sources
            .iter()
            .find(|s| s.name == "Instagram")
            .unwrap();
        assert_eq!(
            instagram.build_url("Jane Doe"),
            "https://www.instagram.com/explore/tags/JaneDoe"
        );
    }

    #[test]
    fn test_fixed_url_ignores_target() {
        let hibp = &find_category("Data Breach Sites").unwrap().sources[0];
        assert!(hibp.is_fixed());
        assert_eq!(hibp.build_url("anything at all"), "https://haveibeenpwned.com/");
        assert_eq!(
            hibp.describe("Jane Doe"),
            "Check if Jane Doe appears in known data breaches"
        );
    }

    #[test]
    fn test_describe_with_source() {
        let ahmia = &find_category("Dark Web").unwrap().sources[0];
        assert_eq!(ahmia.describe("Jane Doe"), "Search for Jane Doe on Ahmia");
    }

    #[test]
    fn test_registry_shape() {
        assert_eq!(
            category_names(),
            vec![
                "Social Media",
                "Data Breach Sites",
                "People Directories",
                "Professional Data",
                "Public Records",
                "Web Presence",
                "Images",
                "Dark Web",
                "Reverse Phone Lookup",
                "Email Addresses",
                "Geolocation",
                "Blockchain",
            ]
        );
        assert_eq!(source_count(), 46);
    }

    #[test]
    fn test_registry_json() {
        let json = registry_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let categories = value.as_array().unwrap();
        assert_eq!(categories.len(), 12);

        let whitepages = &categories[2]["sources"][0];
        assert_eq!(whitepages["name"], "Whitepages");
        assert_eq!(whitepages["url_template"], "https://www.whitepages.com/name/{query}");
        assert_eq!(whitepages["normalization"], "hyphenate");
        assert_eq!(categories[0]["sources"][3]["normalization"], "strip_whitespace");
        assert_eq!(categories[0]["sources"][0]["normalization"], "none");
    }

    #[test]
    fn test_source_names_unique_within_category() {
        for category in categories() {
            let names: HashSet<_> = category.sources.iter().map(|s| s.name).collect();
            assert_eq!(names.len(), category.sources.len(), "{}", category.name);
        }
    }
}
