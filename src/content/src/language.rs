/* src/content/src/language.rs */

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two languages the site renders in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  #[default]
  En,
  Bn,
}

impl Language {
  pub const ALL: [Self; 2] = [Self::En, Self::Bn];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Bn => "bn",
    }
  }

  /// Tolerant parse: case-insensitive, region tags accepted ("bn-BD" -> Bn).
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }
    let lower = value.to_ascii_lowercase();
    let lang = lower.split(['-', '_']).next().unwrap_or("");
    match lang {
      "en" => Some(Self::En),
      "bn" => Some(Self::Bn),
      _ => None,
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Request-side snapshot a language is resolved from.
pub struct ResolveContext {
  pub query_lang: Option<String>,
  pub cookie_header: Option<String>,
  pub accept_language: Option<String>,
}

/// Resolution chain: ?lang -> cookie("ekush-lang") -> Accept-Language -> En
pub fn resolve_language(ctx: &ResolveContext) -> Language {
  if let Some(ref q) = ctx.query_lang {
    if let Some(lang) = Language::parse(q) {
      return lang;
    }
  }

  if let Some(ref header) = ctx.cookie_header {
    if let Some(lang) = parse_cookie_language(header, "ekush-lang") {
      return lang;
    }
  }

  if let Some(ref header) = ctx.accept_language {
    if let Some(lang) = parse_accept_language(header) {
      return lang;
    }
  }

  Language::En
}

fn parse_cookie_language(header: &str, name: &str) -> Option<Language> {
  for pair in header.split(';') {
    let pair = pair.trim();
    if let Some((k, v)) = pair.split_once('=') {
      if k.trim() == name {
        return Language::parse(v.trim());
      }
    }
  }
  None
}

fn parse_accept_language(header: &str) -> Option<Language> {
  if header.is_empty() {
    return None;
  }

  let mut entries: Vec<(&str, f64)> = Vec::new();
  for part in header.split(',') {
    let part = part.trim();
    if part.is_empty() {
      continue;
    }
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    let mut q = 1.0_f64;
    for s in segments {
      let s = s.trim();
      if let Some(val) = s.strip_prefix("q=") {
        if let Ok(v) = val.parse::<f64>() {
          q = v;
        }
      }
    }
    entries.push((lang, q));
  }

  entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

  // Language::parse already handles region tags (bn-BD -> bn)
  entries.iter().find_map(|(lang, _)| Language::parse(lang))
}
