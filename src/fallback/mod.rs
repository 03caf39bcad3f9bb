//! 降级生成器：远程调用失败时，基于已有输入在本地生成可渲染的替代结果。
//!
//! # Fallback Generators
//!
//! Pure functions of data the caller already supplied (tool list, query,
//! selection). None of them touch the network; each returns something the UI
//! can render, trading accuracy for availability.
//!
//! | Generator | Output |
//! |-----------|--------|
//! | [`recommendations`] | Markdown write-up of a random subset of tools |
//! | [`search`] | Ids of tools whose name, description or tags contain the query |
//! | [`comparison`] | Markdown with one section per selected tool |
//! | [`analysis`] | Markdown report for a single tool |
//!
//! Document wording comes from a [`Templates`] implementation so the locale
//! can be swapped without touching control flow.

mod generators;
mod glossary;
mod templates;

pub use generators::{analysis, comparison, recommendations, search};
pub use glossary::Glossary;
pub use templates::{ChineseTemplates, EnglishTemplates, Templates};
