//! Bilingual term table used to widen fallback search queries.

/// Pairs of equivalent terms. A query containing either side of a pair is also
/// matched using the other side, so an English query can hit the directory's
/// Chinese tags and vice versa.
#[derive(Debug, Clone)]
pub struct Glossary {
    pairs: Vec<(String, String)>,
}

const DIRECTORY_TERMS: &[(&str, &str)] = &[
    ("image generation", "图像生成"),
    ("image", "图像"),
    ("writing", "写作"),
    ("programming", "编程"),
    ("coding", "编程"),
    ("design", "设计"),
    ("research", "研究"),
    ("academic", "学术"),
    ("assistant", "助手"),
    ("productivity", "生产力"),
    ("grammar", "语法检查"),
    ("developer tools", "开发工具"),
    ("video", "视频"),
    ("audio", "音频"),
];

impl Default for Glossary {
    fn default() -> Self {
        Self::new(DIRECTORY_TERMS.iter().copied())
    }
}

impl Glossary {
    pub fn new<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(a, b)| (a.to_lowercase(), b.to_lowercase()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    /// The lowercased query followed by every counterpart term it triggers,
    /// without duplicates.
    pub fn expand(&self, query: &str) -> Vec<String> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let mut variants = vec![query.clone()];
        for (a, b) in &self.pairs {
            let counterpart = if query.contains(a.as_str()) {
                b
            } else if query.contains(b.as_str()) {
                a
            } else {
                continue;
            };
            if !variants.contains(counterpart) {
                variants.push(counterpart.clone());
            }
        }
        variants
    }
}
