//! Mixed-script tokenization for diffing.
//!
//! Splits text into comparison units:
//! - each CJK character (kanji, kana, the prolonged sound mark) on its own
//! - runs of Latin letters and digits as one word
//! - runs of whitespace as one token
//! - every other character (punctuation, symbols) on its own
//!
//! Tokens borrow from the input and cover it exactly, so concatenating
//! them reproduces the original text.

use serde::{Deserialize, Serialize};

/// Class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Cjk,
    Word,
    Whitespace,
    Punct,
}

/// A slice of the input with its class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Whether `c` is a CJK ideograph or kana
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}'   // Hiragana
        | '\u{30A1}'..='\u{30FA}' // Katakana
        | '\u{30FC}'..='\u{30FF}' // ー and iteration marks
        | '\u{31F0}'..='\u{31FF}' // Katakana phonetic extensions
        | '\u{3005}'              // 々
        | '\u{3400}'..='\u{4DBF}' // CJK extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
        | '\u{F900}'..='\u{FAFF}' // CJK compatibility ideographs
        | '\u{FF66}'..='\u{FF9F}' // Half-width katakana
        | '\u{20000}'..='\u{2FA1F}' // Supplementary ideographic planes
    )
}

fn classify(c: char) -> TokenKind {
    if is_cjk(c) {
        TokenKind::Cjk
    } else if c.is_alphanumeric() || c == '_' {
        TokenKind::Word
    } else if c.is_whitespace() {
        TokenKind::Whitespace
    } else {
        TokenKind::Punct
    }
}

/// Split `text` into tokens
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    // (start byte, class) of the run being accumulated
    let mut run: Option<(usize, TokenKind)> = None;

    for (idx, c) in text.char_indices() {
        let kind = classify(c);
        if let Some((start, current)) = run {
            let extends = current == kind
                && matches!(kind, TokenKind::Word | TokenKind::Whitespace);
            if extends {
                continue;
            }
            tokens.push(Token { text: &text[start..idx], kind: current });
        }
        run = Some((idx, kind));
    }

    if let Some((start, kind)) = run {
        tokens.push(Token { text: &text[start..], kind });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_english_words() {
        assert_eq!(texts("Hello world test"), vec!["Hello", " ", "world", " ", "test"]);
    }

    #[test]
    fn test_japanese_characters_split() {
        assert_eq!(texts("テスト"), vec!["テ", "ス", "ト"]);
        assert_eq!(texts("重要な。"), vec!["重", "要", "な", "。"]);
    }

    #[test]
    fn test_mixed_script() {
        let tokens = tokenize("AI導入で30%削減");
        let parts: Vec<_> = tokens.iter().map(|t| (t.text, t.kind)).collect();
        assert_eq!(
            parts,
            vec![
                ("AI", TokenKind::Word),
                ("導", TokenKind::Cjk),
                ("入", TokenKind::Cjk),
                ("で", TokenKind::Cjk),
                ("30", TokenKind::Word),
                ("%", TokenKind::Punct),
                ("削", TokenKind::Cjk),
                ("減", TokenKind::Cjk),
            ]
        );
    }

    #[test]
    fn test_whitespace_runs_and_punctuation() {
        assert_eq!(texts("a  \n b,,"), vec!["a", "  \n ", "b", ",", ","]);
    }

    #[test]
    fn test_katakana_punctuation_is_punct() {
        let kinds: Vec<_> = tokenize("データ・分析゠").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Cjk,
                TokenKind::Cjk,
                TokenKind::Cjk,
                TokenKind::Punct,
                TokenKind::Cjk,
                TokenKind::Cjk,
                TokenKind::Punct,
            ]
        );
        assert!(is_cjk('ー'));
        assert!(!is_cjk('・'));
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokens_cover_input() {
        let input = "当社は2015年に設立。Employees: 12名、売上 ¥30,000,000。";
        let joined: String = tokenize(input).iter().map(|t| t.text).collect();
        assert_eq!(joined, input);
    }
}
