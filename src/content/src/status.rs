/* src/content/src/status.rs */

use serde::{Deserialize, Serialize};

/// Closed set of badge severities. Every status string classifies into one of
/// these; the style descriptors never change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusSeverity {
  Success,
  Warning,
  Info,
  Destructive,
  Neutral,
  Primary,
  Accent,
}

impl StatusSeverity {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Success => "success",
      Self::Warning => "warning",
      Self::Info => "info",
      Self::Destructive => "destructive",
      Self::Neutral => "neutral",
      Self::Primary => "primary",
      Self::Accent => "accent",
    }
  }

  /// Class tokens for this severity. Frozen at compile time.
  pub const fn class_tokens(self) -> &'static str {
    match self {
      Self::Success => "bg-emerald-100 text-emerald-800 border-emerald-200",
      Self::Warning => "bg-amber-100 text-amber-800 border-amber-200",
      Self::Info => "bg-sky-100 text-sky-800 border-sky-200",
      Self::Destructive => "bg-red-100 text-red-800 border-red-200",
      Self::Neutral => "bg-slate-100 text-slate-600 border-slate-200",
      Self::Primary => "bg-indigo-100 text-indigo-800 border-indigo-200",
      Self::Accent => "bg-fuchsia-100 text-fuchsia-800 border-fuchsia-200",
    }
  }
}

/// Collapse case and separators into the canonical lookup key: "In Progress",
/// "in-progress" and "in_progress" all become "in_progress". Underscores pass
/// through untouched; only whitespace/hyphen runs are rewritten.
fn canonical_key(status: &str) -> String {
  let mut key = String::with_capacity(status.len());
  let mut in_run = false;
  for ch in status.trim().chars() {
    if ch.is_whitespace() || ch == '-' {
      if !in_run {
        key.push('_');
        in_run = true;
      }
    } else {
      in_run = false;
      key.extend(ch.to_lowercase());
    }
  }
  key
}

/// The product's status vocabulary. Extending it to a new status string means
/// adding a row here, not touching the classifier. Unknown keys are Neutral.
fn severity_for(key: &str) -> StatusSeverity {
  match key {
    "active" | "completed" | "approved" | "published" | "delivered" | "live" => {
      StatusSeverity::Success
    }
    "pending" | "in_progress" | "on_hold" | "maintenance" => StatusSeverity::Warning,
    "new" | "in_review" | "scheduled" | "beta" => StatusSeverity::Info,
    "failed" | "cancelled" | "canceled" | "rejected" | "suspended" => StatusSeverity::Destructive,
    "draft" | "archived" | "inactive" | "discontinued" => StatusSeverity::Neutral,
    "featured" => StatusSeverity::Primary,
    "premium" => StatusSeverity::Accent,
    _ => StatusSeverity::Neutral,
  }
}

/// Classify an arbitrary status string. Total over all inputs; the empty
/// string and anything outside the vocabulary come back Neutral.
pub fn classify(status: &str) -> StatusSeverity {
  severity_for(&canonical_key(status))
}

/// Style lookup with the explicit-variant escape hatch: a supplied severity
/// always wins over string classification.
pub fn badge_style(status: &str, explicit: Option<StatusSeverity>) -> &'static str {
  explicit.unwrap_or_else(|| classify(status)).class_tokens()
}

/// Human-readable form of a raw status: underscores become spaces. Applied to
/// the original string, not the lookup key; the two normalizations are
/// deliberately separate.
pub fn display_text(status: &str) -> String {
  status.replace('_', " ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn separator_variants_agree() {
    assert_eq!(classify("in_progress"), StatusSeverity::Warning);
    assert_eq!(classify("In Progress"), StatusSeverity::Warning);
    assert_eq!(classify("in-progress"), StatusSeverity::Warning);
    assert_eq!(
      badge_style("In Progress", None),
      badge_style("in_progress", None),
    );
  }

  #[test]
  fn separator_runs_collapse() {
    assert_eq!(canonical_key("in  -  progress"), "in_progress");
    assert_eq!(canonical_key("ON   HOLD"), "on_hold");
  }

  #[test]
  fn underscores_pass_through() {
    assert_eq!(canonical_key("in__progress"), "in__progress");
  }

  #[test]
  fn known_vocabulary() {
    assert_eq!(classify("active"), StatusSeverity::Success);
    assert_eq!(classify("pending"), StatusSeverity::Warning);
    assert_eq!(classify("failed"), StatusSeverity::Destructive);
    assert_eq!(classify("draft"), StatusSeverity::Neutral);
    assert_eq!(classify("new"), StatusSeverity::Info);
    assert_eq!(classify("featured"), StatusSeverity::Primary);
    assert_eq!(classify("premium"), StatusSeverity::Accent);
  }

  #[test]
  fn unknown_and_empty_are_neutral() {
    assert_eq!(classify(""), StatusSeverity::Neutral);
    assert_eq!(classify("some_unknown_status"), StatusSeverity::Neutral);
  }

  #[test]
  fn display_text_replaces_underscores_only() {
    assert_eq!(display_text("in_progress"), "in progress");
    assert_eq!(display_text("In Progress"), "In Progress");
    // Display normalization works on the original string, not the lookup key.
    assert_eq!(display_text("In-Progress"), "In-Progress");
  }

  #[test]
  fn explicit_variant_wins() {
    assert_eq!(
      badge_style("active", Some(StatusSeverity::Destructive)),
      StatusSeverity::Destructive.class_tokens(),
    );
    assert_ne!(
      badge_style("active", Some(StatusSeverity::Destructive)),
      badge_style("active", None),
    );
  }

  #[test]
  fn classify_idempotent() {
    assert_eq!(classify("Completed"), classify("Completed"));
    assert_eq!(display_text("on_hold"), display_text("on_hold"));
  }

  #[test]
  fn severity_wire_form() {
    assert_eq!(serde_json::to_string(&StatusSeverity::Destructive).unwrap(), "\"destructive\"");
  }
}
