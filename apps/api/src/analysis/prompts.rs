// All LLM prompt templates for the Analysis module.
// Templates are opaque data; `render` fills `{placeholder}` slots in one pass so
// text substituted into one slot is never re-scanned for another.

/// Language analysis: jargon, rhetoric density, packaging words.
/// Replace: {abstract}
pub const LANGUAGE_PROMPT_TEMPLATE: &str = r#"请详细分析以下学术论文摘要中的语言使用情况，包括：

1. 识别并列出所有复杂、浮夸或不必要的学术术语和行话
2. 分析句子结构中的"权威性修辞"与"包装性语言"
3. 统计修辞密度与逻辑虚空度（句子多但信息少的情况）
4. 区分真正的方法描述与空洞的包装词块
5. 标注可能引起"学术浮夸"的短语

请逐条分析，给出具体例子并解释为什么这些表达是浮夸或不必要的：

{abstract}"#;

/// Concept revelation: what fancy model names actually are.
/// Replace: {abstract}
pub const CONCEPT_PROMPT_TEMPLATE: &str = r#"请深入分析以下学术论文摘要中的模型和方法名称，揭示它们背后的实际设计：

1. 识别并列出所有看似高大上的模型或算法名称
2. 对每个名称，分析其实际可能的技术实现（如是否只是简单的组合）
3. 揭示学术化掩饰的本质（例如"Adaptive Dual Synergistic Encoder"可能就是两层MLP）
4. 为每个复杂名称提供"白话翻译"版本
5. 指出哪些是"伪创新"，即名称华丽但实质平庸的设计

请逐条分析，并解释为什么这些名称是过度包装的：

{abstract}"#;

/// Experiment skepticism: inflated result claims and weak setups.
/// Replace: {abstract}
pub const EXPERIMENT_PROMPT_TEMPLATE: &str = r#"请批判性地分析以下学术论文摘要中的实验结果描述：

1. 检测并列出所有夸大性结果陈述（如"significantly outperform"、"achieved state-of-the-art"等）
2. 分析结果描述的可信度与可能的过拟合/选择性呈现
3. 识别可能的数据操纵迹象（如只报告正面结果）
4. 评估实验设置的合理性（如数据集大小、对比方法等）
5. 建立"夸大概率模型"，判断结果陈述的真实性风险
6. 指出实验部分可能存在的问题（如缺乏消融实验、对比不充分等）

请逐条分析，并解释为什么这些结果陈述可能不可信：

{abstract}"#;

/// Plain dismissive rewrite.
/// Replace: {abstract}
pub const SARCASTIC_REWRITE_PROMPT_TEMPLATE: &str =
    "请用不屑的语气重写以下学术论文摘要，指出其中的复杂用词和夸大之处：\n\n{abstract}";

/// Scramble the abstract into coherent-looking nonsense.
/// Replace: {abstract}
pub const GO_CRAZY_PROMPT_TEMPLATE: &str = r#"请将以下学术论文摘要以前言不搭后语的方式完全改写，使其看起来像胡言乱语，但要保持一定的可读性：

1. 打乱逻辑顺序，让内容看起来毫无关联
2. 随意替换专业术语为不相关的词汇
3. 添加一些看似有道理但实际上毫无意义的句子
4. 保持整体长度在1500词以内
5. 不要完全破坏语法结构，保持一定的可读性
6. 让改写后的内容看起来像是AI失控的产物

原始摘要：
{abstract}"#;

/// Final critique built on the three aspect analyses.
/// Replace: {language}, {concepts}, {experiments}, {style_instruction}, {abstract}, {bias}
pub const SYNTHESIS_PROMPT_TEMPLATE: &str = r#"请根据以下分析结果，用尖锐讽刺的语气评价这篇学术论文摘要：

语言分析结果：
{language}

概念识破结果：
{concepts}

实验怀疑结果：
{experiments}

{style_instruction}

请直指：
1. 论文中"包装成新颖"的老想法；
2. "实验奇迹"背后的数据操纵；
3. "模块设计"实则空洞或过拟合。

摘要内容：
{abstract}

此外，请参考以下偏见文档，确保你的批判考虑到这些常见的学术偏见：
{bias}"#;

pub const SARCASTIC_STYLE_INSTRUCTION: &str =
    "请以理性讽刺的冷嘲风格进行评价，使用学术黑话反讽，保持客观但尖锐的语气。";
pub const ANGRY_STYLE_INSTRUCTION: &str =
    "请以愤怒的语气进行评价，可以夹杂轻微粗话，表达强烈的不满和不屑。";
pub const WEARY_STYLE_INSTRUCTION: &str =
    "请以厌世学者的疲惫语气进行评价，表达对学术浮夸的疲倦和无奈。";
pub const AGGRESSIVE_STYLE_INSTRUCTION: &str =
    "请通过具攻击性的讽刺（甚至带轻微脏话、学术黑话反讽），模仿学界的\"犀利评论者\"。";

/// Fills `{key}` slots from `vars`. Unknown braces are copied through untouched.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let slot = vars
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));
        match slot {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fills_all_slots() {
        let out = render("{a} and {b}", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "x and y");
    }

    #[test]
    fn test_render_does_not_rescan_substituted_text() {
        let out = render("{abstract}|{bias}", &[("abstract", "{bias}"), ("bias", "B")]);
        assert_eq!(out, "{bias}|B");
    }

    #[test]
    fn test_render_keeps_unknown_braces() {
        let out = render("json {\"k\": 1} {missing}", &[("abstract", "x")]);
        assert_eq!(out, "json {\"k\": 1} {missing}");
    }

    #[test]
    fn test_every_aspect_template_has_abstract_slot() {
        for template in [
            LANGUAGE_PROMPT_TEMPLATE,
            CONCEPT_PROMPT_TEMPLATE,
            EXPERIMENT_PROMPT_TEMPLATE,
            SARCASTIC_REWRITE_PROMPT_TEMPLATE,
            GO_CRAZY_PROMPT_TEMPLATE,
            SYNTHESIS_PROMPT_TEMPLATE,
        ] {
            assert!(template.contains("{abstract}"));
        }
    }
}
