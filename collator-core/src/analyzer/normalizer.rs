use collator_types::LayoutConfig;
use unicode_normalization::char::decompose_canonical;
use unicode_normalization::UnicodeNormalization;

/// Combining marks removed when diacritic stripping is enabled.
///
/// Grave, acute, circumflex, macron and diaeresis, plus the Greek breathings
/// and perispomeni used in polytonic transcriptions.
const STRIPPED_MARKS: [char; 8] = [
    '\u{0300}', '\u{0301}', '\u{0302}', '\u{0304}', '\u{0308}', '\u{0313}', '\u{0314}', '\u{0342}',
];

#[inline(always)]
fn is_stripped_mark(c: char) -> bool {
    STRIPPED_MARKS.contains(&c)
}

#[inline(always)]
const fn is_stripped_punctuation(c: char) -> bool {
    matches!(c, '.' | ',' | ':' | '\u{00B7}' | ';' | '\u{00AB}' | '\u{00BB}')
}

/// Configuration options for text normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// When enabled, removes accents and breathings from decomposed text.
    /// For example, "ὁδός" becomes "οδος".
    pub strip_diacritics: bool,
    /// When enabled, removes sentence punctuation without replacement.
    pub strip_punctuation: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            strip_diacritics: false,
            strip_punctuation: true,
        }
    }
}

impl From<&LayoutConfig> for NormalizerConfig {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            strip_diacritics: config.strip_diacritics,
            strip_punctuation: config.strip_punctuation,
        }
    }
}

/// Reading normalizer applied before witnesses are compared.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Collapses every run of Unicode whitespace into a single space
/// - Optionally strips a fixed set of combining diacritical marks
/// - Optionally strips sentence punctuation
///
/// Leading and trailing whitespace is collapsed but kept, since collation
/// tokens usually carry their trailing separator.
///
/// # Examples
///
/// ```
/// use collator_core::analyzer::normalizer::{NormalizerConfig, TextNormalizer};
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("A  black\tCat."), "a black cat");
///
/// let stripper = TextNormalizer::new(NormalizerConfig {
///     strip_diacritics: true,
///     strip_punctuation: true,
/// });
/// assert_eq!(stripper.normalize("Café"), "cafe");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a normalizer with the given configuration.
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[inline(always)]
    pub fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut prev_space = false;

        if input.is_ascii() {
            for b in input.bytes() {
                self.push(char::from(b.to_ascii_lowercase()), out, &mut prev_space);
            }
            return;
        }

        // Final sigma depends on the letters around it, so the reading is
        // lowered as a whole rather than char by char.
        let lowered = input.to_lowercase();
        let mut needs_recompose = false;

        for ch in lowered.chars() {
            if self.config.strip_diacritics && !ch.is_ascii() {
                decompose_canonical(ch, |part| {
                    if is_stripped_mark(part) {
                        return;
                    }
                    needs_recompose |= !part.is_ascii();
                    self.push(part, out, &mut prev_space);
                });
            } else {
                self.push(ch, out, &mut prev_space);
            }
        }

        // Decomposition leaves the marks we keep (cedilla, ogonek, ...) as
        // separate code points; put them back onto their base letters.
        if needs_recompose {
            let composed: String = out.nfc().collect();
            *out = composed;
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    #[inline(always)]
    fn push(&self, c: char, out: &mut String, prev_space: &mut bool) {
        if self.config.strip_punctuation && is_stripped_punctuation(c) {
            return;
        }

        if c.is_whitespace() {
            if !*prev_space {
                out.push(' ');
                *prev_space = true;
            }
        } else {
            out.push(c);
            *prev_space = false;
        }
    }
}
