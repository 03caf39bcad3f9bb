//! Prompt construction per operation.

use crate::types::{Message, ToolDescriptor, ToolSummary};
use crate::Result;

const SUMMARY_SYSTEM: &str = "你是一个专业的个人品牌顾问，擅长为个人简历和简介生成专业、简洁的总结。\
请用中文回复，保持语气专业友好，突出个人优势和特色。";

const RECOMMENDATION_SYSTEM: &str = "你是一个智能AI工具推荐助手，根据用户的浏览行为和工具信息，\
为用户推荐最适合的AI工具。请用中文回复，每个推荐工具包含工具名称、推荐理由和适用场景。";

const SEARCH_SYSTEM: &str = "你是一个智能搜索助手，能够理解用户的搜索意图，并从提供的工具列表中找到最相关的工具。\
请分析用户查询，理解其真实意图，然后返回最相关的工具ID列表，按相关性排序。\n\n要求：\n\
1. 理解用户的自然语言查询，包括同义词、相关概念和上下文含义\n\
2. 分析工具的名称、描述和标签，找到最匹配的工具\n\
3. 考虑语义相关性，不仅仅是关键词匹配\n\
4. 对结果进行智能排序，最相关的工具排在前面\n\
5. 返回工具ID列表，每个ID占一行\n\
6. 只返回工具ID，不要添加任何其他内容";

const INTENT_SYSTEM: &str = "你是一个自然语言理解助手，能够分析用户的查询意图，并提取关键信息。\
请分析用户查询，理解其真实意图，然后返回结构化的查询信息。";

const COMPARISON_SYSTEM: &str = "你是一个专业的AI工具分析师，擅长对比分析不同的AI工具。\
请对提供的工具进行详细的对比分析，包括功能特点、适用场景、优势和局限性等方面。\n\n要求：\n\
1. 使用Markdown格式，确保适当的换行和缩进\n\
2. 每个要点都要单独成行\n\
3. 使用清晰的标题和列表格式\n\
4. 每个工具的分析要分开，先分析完一个工具再分析下一个工具\n\
5. 使用中文回复，语言专业但易于理解";

const ANALYSIS_SYSTEM: &str = "你是一个专业的AI工具分析师，擅长对单个AI工具进行深入分析。\
请对提供的工具进行详细的分析报告，包括功能特点、适用场景、优势和局限性等方面。\n\n要求：\n\
1. 使用Markdown格式，确保适当的换行和缩进\n\
2. 每个要点都要单独成行\n\
3. 使用清晰的标题和列表格式\n\
4. 功能特点、适用场景、优势和局限性等部分要分开\n\
5. 使用中文回复，语言专业但易于理解";

fn names(tools: &[ToolDescriptor]) -> String {
    tools
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn summary(profile: &str) -> Vec<Message> {
    vec![
        Message::system(SUMMARY_SYSTEM),
        Message::user(format!("请为以下个人信息生成一个专业的总结：\n{}", profile)),
    ]
}

pub(crate) fn recommendation(behavior: &str, tools: &[ToolDescriptor]) -> Vec<Message> {
    vec![
        Message::system(RECOMMENDATION_SYSTEM),
        Message::user(format!(
            "用户行为：{}\n\n根据以上用户行为和工具信息，推荐3-5个最适合的AI工具：{}",
            behavior,
            names(tools)
        )),
    ]
}

pub(crate) fn search(query: &str, tools: &[ToolDescriptor]) -> Result<Vec<Message>> {
    let summaries: Vec<ToolSummary<'_>> = tools.iter().map(ToolDescriptor::summary).collect();
    let listing = serde_json::to_string_pretty(&summaries)?;
    Ok(vec![
        Message::system(SEARCH_SYSTEM),
        Message::user(format!("用户查询：{}\n\n工具列表：\n{}", query, listing)),
    ])
}

pub(crate) fn intent(query: &str) -> Vec<Message> {
    vec![
        Message::system(INTENT_SYSTEM),
        Message::user(format!("分析以下查询的意图：{}", query)),
    ]
}

pub(crate) fn comparison(tools: &[ToolDescriptor]) -> Vec<Message> {
    vec![
        Message::system(COMPARISON_SYSTEM),
        Message::user(format!("请对比分析以下AI工具：{}", names(tools))),
    ]
}

pub(crate) fn analysis(tool: &ToolDescriptor) -> Vec<Message> {
    vec![
        Message::system(ANALYSIS_SYSTEM),
        Message::user(format!(
            "请对以下AI工具进行详细分析：{}，类别：{}，描述：{}",
            tool.name, tool.category, tool.description
        )),
    ]
}
