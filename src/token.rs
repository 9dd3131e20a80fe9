use std::borrow::Cow;

/// Byte span of a token within its source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Starting byte offset
    pub byte_start: usize,
    /// Ending byte offset (exclusive)
    pub byte_end: usize,
}

impl Span {
    pub fn new(byte_start: usize, byte_end: usize) -> Self {
        Self { byte_start, byte_end }
    }

    pub fn len(&self) -> usize {
        self.byte_end - self.byte_start
    }

    pub fn is_empty(&self) -> bool {
        self.byte_end == self.byte_start
    }
}

/// A whitespace-delimited word borrowed from its source text
///
/// Two tokens are equal when their text matches case-insensitively. The
/// position index and span never take part in the comparison.
#[derive(Debug, Clone)]
pub struct WordToken<'a> {
    /// Token text exactly as it appears in the source
    pub text: &'a str,
    /// Position of this token within its sequence
    pub index: usize,
    /// Byte span within the source text
    pub span: Span,
    key: Cow<'a, str>,
}

impl<'a> WordToken<'a> {
    pub fn new(text: &'a str, index: usize, span: Span) -> Self {
        Self {
            text,
            index,
            span,
            key: fold_case(text),
        }
    }

    /// Lowercase comparison key
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for WordToken<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for WordToken<'_> {}

// Only allocates when the text could change under lowercasing.
fn fold_case(text: &str) -> Cow<'_, str> {
    if text.bytes().any(|b| b.is_ascii_uppercase() || !b.is_ascii()) {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}

/// Ordered, immutable sequence of tokens produced from one input text
#[derive(Debug, Clone, Default)]
pub struct TokenSequence<'a> {
    tokens: Vec<WordToken<'a>>,
}

impl<'a> TokenSequence<'a> {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&WordToken<'a>> {
        self.tokens.get(index)
    }

    pub fn as_slice(&self) -> &[WordToken<'a>] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordToken<'a>> {
        self.tokens.iter()
    }

    /// Token texts in order
    pub fn texts(&self) -> Vec<&'a str> {
        self.tokens.iter().map(|t| t.text).collect()
    }
}

impl<'a> std::ops::Index<usize> for TokenSequence<'a> {
    type Output = WordToken<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

/// Split a text into word tokens on runs of whitespace
///
/// No trimming happens first: leading whitespace yields a leading empty
/// token and trailing whitespace a trailing one. An empty text has no words
/// and yields an empty sequence.
///
/// # Example
/// ```
/// use rewrite_diff::tokenize;
/// let tokens = tokenize("  the cat");
/// assert_eq!(tokens.texts(), vec!["", "the", "cat"]);
/// ```
pub fn tokenize(text: &str) -> TokenSequence<'_> {
    let mut tokens = Vec::new();
    if text.is_empty() {
        return TokenSequence { tokens };
    }

    let mut start = 0;
    let mut in_whitespace = false;

    for (pos, ch) in text.char_indices() {
        if is_split_whitespace(ch) {
            if !in_whitespace {
                push_token(&mut tokens, text, start, pos);
                in_whitespace = true;
            }
        } else if in_whitespace {
            start = pos;
            in_whitespace = false;
        }
    }

    if in_whitespace {
        push_token(&mut tokens, text, text.len(), text.len());
    } else {
        push_token(&mut tokens, text, start, text.len());
    }

    TokenSequence { tokens }
}

fn push_token<'a>(tokens: &mut Vec<WordToken<'a>>, text: &'a str, start: usize, end: usize) {
    let index = tokens.len();
    tokens.push(WordToken::new(&text[start..end], index, Span::new(start, end)));
}

/// Characters that separate words
///
/// Unicode White_Space plus the byte-order mark, minus NEL (U+0085). This is
/// the set a browser regex `\s` matches, so a BOM-prefixed file splits off
/// its BOM instead of gluing it to the first word.
pub fn is_split_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Count the non-empty words of a text, ignoring surrounding whitespace
pub fn count_words(text: &str) -> usize {
    text.split(is_split_whitespace)
        .filter(|word| !word.is_empty())
        .count()
}
