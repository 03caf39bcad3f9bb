//! Locale-specific document templates for fallback output.

use crate::types::ToolDescriptor;
use std::fmt::Write as _;

/// Formatting strategy for fallback documents, one method per operation.
pub trait Templates: Send + Sync {
    fn name(&self) -> &'static str;

    /// Markdown recommending `picks`. `picks` may be empty.
    fn recommendation_document(&self, picks: &[&ToolDescriptor]) -> String;

    /// Markdown comparing every tool in `tools`, in order.
    fn comparison_document(&self, tools: &[ToolDescriptor]) -> String;

    /// Markdown report for one tool.
    fn analysis_document(&self, tool: &ToolDescriptor) -> String;
}

/// zh-CN wording, the directory's default locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChineseTemplates;

impl Templates for ChineseTemplates {
    fn name(&self) -> &'static str {
        "zh-CN"
    }

    fn recommendation_document(&self, picks: &[&ToolDescriptor]) -> String {
        let mut doc = String::from("# AI工具推荐\n\n");
        if picks.is_empty() {
            doc.push_str("暂无可推荐的工具。\n\n");
        }
        for (i, tool) in picks.iter().enumerate() {
            let _ = write!(doc, "## {}. {}\n\n", i + 1, tool.name);
            let _ = write!(doc, "### 推荐理由\n{}\n\n", tool.description);
            let _ = write!(doc, "### 适用场景\n适合用于{}类别的任务\n\n", tool.category);
            let _ = write!(doc, "### 相关标签\n{}\n\n", tool.tags.join(", "));
        }
        doc.push_str("## 总结\n以上推荐基于工具的功能特点和适用场景，希望能满足您的需求。");
        doc
    }

    fn comparison_document(&self, tools: &[ToolDescriptor]) -> String {
        let mut doc = String::from("# AI工具对比分析\n\n");
        for tool in tools {
            let _ = write!(doc, "## {}\n\n", tool.name);
            let _ = write!(doc, "### 功能特点\n{}\n\n", tool.description);
            let _ = write!(doc, "### 适用场景\n适合用于{}类别的任务\n\n", tool.category);
            doc.push_str("### 优势\n- 功能强大\n- 易于使用\n- 效率高\n\n");
            doc.push_str("### 局限性\n- 可能需要付费\n- 学习曲线较陡\n\n");
        }
        doc.push_str("## 总结\n根据具体需求选择合适的工具，不同工具各有其适用场景。");
        doc
    }

    fn analysis_document(&self, tool: &ToolDescriptor) -> String {
        format!(
            "# {name} 分析报告\n\n\
             ## 功能特点\n{description}\n\n\
             ## 适用场景\n适合用于{category}类别的任务\n\n\
             ## 优势\n- 功能强大\n- 易于使用\n- 效率高\n\n\
             ## 局限性\n- 可能需要付费\n- 学习曲线较陡\n\n\
             ## 最佳实践\n根据具体需求选择合适的功能模块",
            name = tool.name,
            description = tool.description,
            category = tool.category,
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTemplates;

impl Templates for EnglishTemplates {
    fn name(&self) -> &'static str {
        "en"
    }

    fn recommendation_document(&self, picks: &[&ToolDescriptor]) -> String {
        let mut doc = String::from("# Recommended AI Tools\n\n");
        if picks.is_empty() {
            doc.push_str("No tools are available to recommend.\n\n");
        }
        for (i, tool) in picks.iter().enumerate() {
            let _ = write!(doc, "## {}. {}\n\n", i + 1, tool.name);
            let _ = write!(doc, "### Why\n{}\n\n", tool.description);
            let _ = write!(doc, "### Good for\nTasks in the {} category\n\n", tool.category);
            let _ = write!(doc, "### Tags\n{}\n\n", tool.tags.join(", "));
        }
        doc.push_str("## Summary\nThese picks are based on each tool's features and typical use cases.");
        doc
    }

    fn comparison_document(&self, tools: &[ToolDescriptor]) -> String {
        let mut doc = String::from("# AI Tool Comparison\n\n");
        for tool in tools {
            let _ = write!(doc, "## {}\n\n", tool.name);
            let _ = write!(doc, "### Features\n{}\n\n", tool.description);
            let _ = write!(doc, "### Good for\nTasks in the {} category\n\n", tool.category);
            if !tool.tags.is_empty() {
                let _ = write!(doc, "### Tags\n{}\n\n", tool.tags.join(", "));
            }
        }
        doc.push_str("## Summary\nPick the tool that fits your task; each has its own strengths.");
        doc
    }

    fn analysis_document(&self, tool: &ToolDescriptor) -> String {
        let mut doc = format!(
            "# {} Analysis\n\n## Features\n{}\n\n## Good for\nTasks in the {} category\n\n",
            tool.name, tool.description, tool.category
        );
        if !tool.tags.is_empty() {
            let _ = write!(doc, "## Tags\n{}\n\n", tool.tags.join(", "));
        }
        doc.push_str("## Best practice\nStart with the feature that matches your immediate need.");
        doc
    }
}
