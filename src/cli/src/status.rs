/* src/cli/src/status.rs */

use ekush_content::{badge_style, classify, display_text};

use crate::ui;

pub fn run(value: &str) {
  ui::banner("status");

  let severity = classify(value);
  ui::arrow(&format!("\"{value}\""));
  ui::detail(&format!("severity: {}", severity.as_str()));
  ui::detail(&format!("display:  {}", display_text(value)));
  ui::detail(&format!("classes:  {}", badge_style(value, None)));
  ui::blank();
}
