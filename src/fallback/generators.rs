use super::glossary::Glossary;
use super::templates::Templates;
use crate::types::ToolDescriptor;
use rand::seq::SliceRandom;
use rand::Rng;

/// Recommend `count` tools picked at random (fewer if the list is shorter).
pub fn recommendations<R: Rng + ?Sized>(
    tools: &[ToolDescriptor],
    count: usize,
    rng: &mut R,
    templates: &dyn Templates,
) -> String {
    let picks: Vec<&ToolDescriptor> = tools.choose_multiple(rng, count).collect();
    templates.recommendation_document(&picks)
}

/// Case-insensitive substring match of the query (and its glossary variants)
/// against name, description and every tag. Keeps input order, returns at
/// most `limit` ids. A blank query matches nothing.
pub fn search(query: &str, tools: &[ToolDescriptor], limit: usize, glossary: &Glossary) -> Vec<u64> {
    let variants = glossary.expand(query);
    if variants.is_empty() {
        return Vec::new();
    }
    tools
        .iter()
        .filter(|tool| {
            let name = tool.name.to_lowercase();
            let description = tool.description.to_lowercase();
            let tags: Vec<String> = tool.tags.iter().map(|t| t.to_lowercase()).collect();
            variants.iter().any(|v| {
                name.contains(v.as_str())
                    || description.contains(v.as_str())
                    || tags.iter().any(|t| t.contains(v.as_str()))
            })
        })
        .map(|tool| tool.id)
        .take(limit)
        .collect()
}

pub fn comparison(tools: &[ToolDescriptor], templates: &dyn Templates) -> String {
    templates.comparison_document(tools)
}

pub fn analysis(tool: &ToolDescriptor, templates: &dyn Templates) -> String {
    templates.analysis_document(tool)
}
