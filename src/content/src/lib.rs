/* src/content/src/lib.rs */

pub mod fallback;
pub mod language;
pub mod record;
pub mod resolve;
pub mod status;

// Re-exports for ergonomic use
pub use fallback::{Bilingual, FallbackEntry, PAGES, StatDefault, fallback_for, page_fallbacks};
pub use language::{Language, ResolveContext, resolve_language};
pub use record::{BusinessInfo, ContentRecord, Product, Testimonial};
pub use resolve::{ResolvedContent, ResolvedStat, resolve_content, resolve_stat};
pub use status::{StatusSeverity, badge_style, classify, display_text};
