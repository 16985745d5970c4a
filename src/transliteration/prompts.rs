/*!
 * Prompt construction for the transliteration request.
 */

/// Instruction sent ahead of every mantra body.
///
/// Asks for a Simplified Chinese rendering that follows modern Sanskrit
/// pronunciation, with nothing but the transliteration in the answer.
const TRANSLITERATION_TEMPLATE: &str = "请将以下梵文陀罗尼按照现代梵音发音规则音译为简体中文。
要求：只输出音译结果，输出结果为纯简体中文无其他语言，无错音漏音。

梵文原文：
{sanskrit_text}
";

const TEXT_PLACEHOLDER: &str = "{sanskrit_text}";

/// Build the prompt for one record.
///
/// The title is accepted for symmetry with the record but does not affect
/// the output; the body is embedded verbatim.
pub fn build_prompt(_title: &str, body: &str) -> String {
    TRANSLITERATION_TEMPLATE.replacen(TEXT_PLACEHOLDER, body, 1)
}
