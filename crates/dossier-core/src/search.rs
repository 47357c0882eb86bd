//! Search-URL bundle generation.
//!
//! Pure string building over a fixed catalog of third-party platforms. The
//! generator never dereferences the links it produces; same input, same
//! output, byte for byte.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One labeled search link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLink {
  pub label: String,
  pub url:   String,
}

/// A catalog entry. `query` is the raw query string with a `{name}`
/// placeholder; the rendered query is percent-encoded and substituted for
/// `{q}` in `url`.
struct Platform {
  label: &'static str,
  url:   &'static str,
  query: &'static str,
}

/// Platforms queried with the Latin-script name, in output order.
const ENGLISH_PLATFORMS: &[Platform] = &[
  // LinkedIn
  Platform {
    label: "LinkedIn people search",
    url:   "https://www.linkedin.com/search/results/people/?keywords={q}",
    query: "{name}",
  },
  Platform {
    label: "LinkedIn profiles via Google",
    url:   "https://www.google.com/search?q={q}",
    query: "site:linkedin.com/in \"{name}\"",
  },
  Platform {
    label: "LinkedIn Iran connections via Google",
    url:   "https://www.google.com/search?q={q}",
    query: "site:linkedin.com/in \"{name}\" (Iran OR Tehran OR IRGC)",
  },
  // Sanctions databases
  Platform {
    label: "OFAC sanctions search",
    url:   "https://sanctionssearch.ofac.treas.gov/Details.aspx?id={q}",
    query: "{name}",
  },
  Platform {
    label: "OpenSanctions",
    url:   "https://www.opensanctions.org/search/?q={q}",
    query: "{name}",
  },
  Platform {
    label: "UK sanctions list",
    url:   "https://search-uk-sanctions-list.service.gov.uk/?searchTerm={q}",
    query: "{name}",
  },
  Platform {
    label: "EU sanctions map",
    url:   "https://www.sanctionsmap.eu/#/main?search={q}",
    query: "{name}",
  },
  // Corporate registries
  Platform {
    label: "OpenCorporates",
    url:   "https://opencorporates.com/companies?q={q}",
    query: "{name}",
  },
  Platform {
    label: "UK Companies House",
    url:   "https://find-and-update.company-information.service.gov.uk/search?q={q}",
    query: "{name}",
  },
  Platform {
    label: "ICIJ Offshore Leaks",
    url:   "https://offshoreleaks.icij.org/search?q={q}",
    query: "{name}",
  },
  // Social platforms
  Platform {
    label: "Twitter user search",
    url:   "https://twitter.com/search?q={q}&f=user",
    query: "{name}",
  },
  Platform {
    label: "Instagram via Google",
    url:   "https://www.google.com/search?q={q}",
    query: "site:instagram.com \"{name}\"",
  },
  Platform {
    label: "Facebook via Google",
    url:   "https://www.google.com/search?q={q}",
    query: "site:facebook.com \"{name}\"",
  },
  // General web search
  Platform {
    label: "Google",
    url:   "https://www.google.com/search?q={q}",
    query: "{name}",
  },
  Platform {
    label: "Google News",
    url:   "https://www.google.com/search?q={q}&tbm=nws",
    query: "{name}",
  },
  Platform {
    label: "DuckDuckGo",
    url:   "https://duckduckgo.com/?q={q}",
    query: "{name}",
  },
];

/// Platforms queried with the Persian-script name, appended when one is
/// supplied.
const PERSIAN_PLATFORMS: &[Platform] = &[
  Platform {
    label: "Google (Persian)",
    url:   "https://www.google.com/search?q={q}",
    query: "{name}",
  },
  Platform {
    label: "LinkedIn people search (Persian)",
    url:   "https://www.linkedin.com/search/results/people/?keywords={q}",
    query: "{name}",
  },
  Platform {
    label: "Twitter (Persian)",
    url:   "https://twitter.com/search?q={q}",
    query: "{name}",
  },
];

fn render(platform: &Platform, name: &str) -> SearchLink {
  let query = platform.query.replace("{name}", name);
  SearchLink {
    label: platform.label.to_owned(),
    url:   platform
      .url
      .replace("{q}", urlencoding::encode(&query).as_ref()),
  }
}

/// Build the full search bundle for a name.
///
/// `name_en` must be non-empty after trimming; a non-empty `name_fa` appends
/// the Persian-language sub-catalog.
pub fn generate(
  name_en: &str,
  name_fa: Option<&str>,
) -> Result<Vec<SearchLink>> {
  let name_en = name_en.trim();
  if name_en.is_empty() {
    return Err(Error::validation("name must not be empty"));
  }

  let mut links: Vec<SearchLink> = ENGLISH_PLATFORMS
    .iter()
    .map(|p| render(p, name_en))
    .collect();

  if let Some(fa) = name_fa.map(str::trim)
    && !fa.is_empty()
  {
    links.extend(PERSIAN_PLATFORMS.iter().map(|p| render(p, fa)));
  }

  Ok(links)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_name_is_rejected() {
    assert!(matches!(generate("", None), Err(Error::Validation(_))));
    assert!(matches!(generate("   ", None), Err(Error::Validation(_))));
  }

  #[test]
  fn every_url_contains_the_encoded_name() {
    let links = generate("Ali Rezaei", None).unwrap();
    assert!(!links.is_empty());
    for link in &links {
      assert!(
        link.url.contains("Ali%20Rezaei"),
        "missing encoded name in {}: {}",
        link.label,
        link.url
      );
    }
  }

  #[test]
  fn output_is_deterministic() {
    let a = generate("Ali Rezaei", Some("علی رضایی")).unwrap();
    let b = generate("Ali Rezaei", Some("علی رضایی")).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn persian_name_appends_extra_links() {
    let english = generate("Ali Rezaei", None).unwrap();
    let both = generate("Ali Rezaei", Some("علی رضایی")).unwrap();
    assert!(both.len() > english.len());

    // The english prefix is unchanged.
    assert_eq!(&both[..english.len()], &english[..]);

    // Every appended link carries the encoded Farsi string.
    let encoded_fa = urlencoding::encode("علی رضایی").into_owned();
    for link in &both[english.len()..] {
      assert!(
        link.url.contains(&encoded_fa),
        "missing encoded farsi name in {}: {}",
        link.label,
        link.url
      );
    }
  }

  #[test]
  fn blank_persian_name_appends_nothing() {
    let english = generate("Ali Rezaei", None).unwrap();
    let blank = generate("Ali Rezaei", Some("  ")).unwrap();
    assert_eq!(english, blank);
  }

  #[test]
  fn site_queries_quote_the_name() {
    let links = generate("Ali Rezaei", None).unwrap();
    let google_linkedin = links
      .iter()
      .find(|l| l.label == "LinkedIn profiles via Google")
      .unwrap();
    // `site:linkedin.com/in "Ali Rezaei"` percent-encoded.
    assert!(google_linkedin.url.contains("site%3A"));
    assert!(google_linkedin.url.contains("%22Ali%20Rezaei%22"));
  }
}
