/* src/content/src/fallback.rs */

use crate::language::Language;

/// A language-keyed pair of strings. Fully non-null by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
  pub en: &'static str,
  pub bn: &'static str,
}

impl Bilingual {
  pub const fn new(en: &'static str, bn: &'static str) -> Self {
    Self { en, bn }
  }

  pub const fn get(self, language: Language) -> &'static str {
    match language {
      Language::En => self.en,
      Language::Bn => self.bn,
    }
  }
}

/// Default numeric value and suffix for a statistic slot. Only consulted on
/// the no-match path; see `resolve::resolve_stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatDefault {
  pub value: u64,
  pub suffix: &'static str,
}

/// Compiled-in default copy for one page section. Every section key a page
/// renders has exactly one entry; the backend may override it row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackEntry {
  pub key: &'static str,
  pub title: Bilingual,
  pub body: Bilingual,
  /// Present only for statistic slots (counted numbers with a "+" treatment).
  pub stat: Option<StatDefault>,
}

impl FallbackEntry {
  const fn text(key: &'static str, title: Bilingual, body: Bilingual) -> Self {
    Self { key, title, body, stat: None }
  }

  const fn stat(key: &'static str, title: Bilingual, body: Bilingual, value: u64) -> Self {
    Self { key, title, body, stat: Some(StatDefault { value, suffix: "+" }) }
  }
}

/// Pages with a compiled-in fallback table, in site nav order.
pub const PAGES: &[&str] = &["home", "about", "products"];

// Section keys here must stay in sync with the rows editors create in the
// hosted backend. There is no automatic reconciliation; `ekush check` reports
// drift.
const HOME: &[FallbackEntry] = &[
  FallbackEntry::text(
    "hero_title",
    Bilingual::new("Technology that moves your business", "প্রযুক্তি যা আপনার ব্যবসাকে এগিয়ে নেয়"),
    Bilingual::new(
      "Software, infrastructure and support for companies across Bangladesh and beyond.",
      "বাংলাদেশ ও বিশ্বজুড়ে প্রতিষ্ঠানের জন্য সফটওয়্যার, অবকাঠামো ও সহায়তা।",
    ),
  ),
  FallbackEntry::text(
    "services_title",
    Bilingual::new("What we do", "আমরা যা করি"),
    Bilingual::new(
      "From custom software to managed hosting, one team covers it all.",
      "কাস্টম সফটওয়্যার থেকে ম্যানেজড হোস্টিং, এক দলেই সব।",
    ),
  ),
  FallbackEntry::stat(
    "stat_clients",
    Bilingual::new("500", "৫০০"),
    Bilingual::new("Happy clients", "সন্তুষ্ট ক্লায়েন্ট"),
    500,
  ),
  FallbackEntry::stat(
    "stat_projects",
    Bilingual::new("1200", "১২০০"),
    Bilingual::new("Projects delivered", "সম্পন্ন প্রকল্প"),
    1200,
  ),
  FallbackEntry::stat(
    "stat_years",
    Bilingual::new("12", "১২"),
    Bilingual::new("Years in business", "বছরের অভিজ্ঞতা"),
    12,
  ),
  FallbackEntry::stat(
    "stat_team",
    Bilingual::new("50", "৫০"),
    Bilingual::new("Team members", "টিম সদস্য"),
    50,
  ),
  FallbackEntry::text(
    "cta_title",
    Bilingual::new("Ready to start?", "শুরু করতে প্রস্তুত?"),
    Bilingual::new(
      "Tell us about your project and we will get back within one business day.",
      "আপনার প্রকল্পের কথা জানান, এক কর্মদিবসের মধ্যে আমরা যোগাযোগ করব।",
    ),
  ),
];

const ABOUT: &[FallbackEntry] = &[
  FallbackEntry::text(
    "mission_title",
    Bilingual::new("Our mission", "আমাদের লক্ষ্য"),
    Bilingual::new(
      "Dependable technology for every business, at a price that makes sense.",
      "প্রতিটি ব্যবসার জন্য নির্ভরযোগ্য প্রযুক্তি, সাশ্রয়ী মূল্যে।",
    ),
  ),
  FallbackEntry::text(
    "vision_title",
    Bilingual::new("Our vision", "আমাদের স্বপ্ন"),
    Bilingual::new(
      "A digital-first Bangladesh where local companies compete globally.",
      "একটি ডিজিটাল বাংলাদেশ, যেখানে দেশীয় প্রতিষ্ঠান বিশ্বমঞ্চে প্রতিযোগিতা করে।",
    ),
  ),
  FallbackEntry::text(
    "values_title",
    Bilingual::new("Our values", "আমাদের মূল্যবোধ"),
    Bilingual::new(
      "Honesty in estimates, craft in delivery, partnership after launch.",
      "প্রাক্কলনে সততা, কাজে দক্ষতা, চালুর পরেও পাশে থাকা।",
    ),
  ),
];

const PRODUCTS: &[FallbackEntry] = &[
  FallbackEntry::text(
    "products_title",
    Bilingual::new("Products & services", "পণ্য ও সেবা"),
    Bilingual::new(
      "Everything we build and run for our clients.",
      "ক্লায়েন্টদের জন্য আমরা যা তৈরি ও পরিচালনা করি।",
    ),
  ),
  FallbackEntry::text(
    "products_cta",
    Bilingual::new("Need something custom?", "কাস্টম কিছু দরকার?"),
    Bilingual::new(
      "Most of our work starts as a conversation, not a catalogue entry.",
      "আমাদের বেশিরভাগ কাজ শুরু হয় আলাপ থেকে, ক্যাটালগ থেকে নয়।",
    ),
  ),
];

/// Fallback table for a page. Unknown slugs get an empty table; callers then
/// render nothing rather than erroring.
pub fn page_fallbacks(page_slug: &str) -> &'static [FallbackEntry] {
  match page_slug {
    "home" => HOME,
    "about" => ABOUT,
    "products" => PRODUCTS,
    _ => &[],
  }
}

/// Single-entry lookup by page and section key.
pub fn fallback_for(page_slug: &str, key: &str) -> Option<&'static FallbackEntry> {
  page_fallbacks(page_slug).iter().find(|e| e.key == key)
}
