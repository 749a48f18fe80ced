//! # Alfabeto Português: Vogais, Acentos e Encontros Consonantais
//!
//! Tabelas fixas usadas pelo segmentador e pelo localizador da tônica.
//! Todas as funções recebem um **grafema** (`&str`), e não um `char`, para que
//! uma vogal em forma decomposta (ex: `"a\u{301}"`) seja tratada como uma
//! única letra acentuada.

/// Vogais reconhecidas pelo segmentador (núcleo silábico).
pub const VOWELS: &str = "aáàâãeéêiíîoóôõuúû";

/// Acentos "fortes": agudo, grave e circunflexo.
pub const STRONG_ACCENTS: &str = "áéíóúàèìòùâêîôûÁÉÍÓÚÀÈÌÒÙÂÊÎÔÛ";

/// Acentos "fracos": o til nasal.
pub const WEAK_ACCENTS: &str = "ãẽĩõũÃẼĨÕŨ";

/// Encontros consonantais inseparáveis: sempre iniciam a mesma sílaba.
pub const ONSET_CLUSTERS: &[&str] = &[
    "bl", "br", "cl", "cr", "dr", "fl", "fr", "gl", "gr", "pl", "pr", "tl", "tr", "vr",
];

// Marcas combinantes (forma NFD)
const COMBINING_GRAVE: char = '\u{300}';
const COMBINING_ACUTE: char = '\u{301}';
const COMBINING_CIRCUMFLEX: char = '\u{302}';
const COMBINING_TILDE: char = '\u{303}';

/// O grafema é uma vogal? Olha apenas a letra base.
pub fn is_vowel(grapheme: &str) -> bool {
    grapheme
        .chars()
        .next()
        .map(|c| VOWELS.contains(c))
        .unwrap_or(false)
}

/// O grafema carrega acento agudo, grave ou circunflexo?
pub fn has_strong_accent(grapheme: &str) -> bool {
    grapheme.chars().any(|c| {
        STRONG_ACCENTS.contains(c)
            || matches!(c, COMBINING_GRAVE | COMBINING_ACUTE | COMBINING_CIRCUMFLEX)
    })
}

/// O grafema carrega til?
pub fn has_weak_accent(grapheme: &str) -> bool {
    grapheme
        .chars()
        .any(|c| WEAK_ACCENTS.contains(c) || c == COMBINING_TILDE)
}

/// O par de letras forma um encontro consonantal inseparável (ex: "tl" em "atleta")?
pub fn is_onset_cluster(first: &str, second: &str) -> bool {
    if first.is_empty() || second.is_empty() {
        return false;
    }
    ONSET_CLUSTERS
        .iter()
        .any(|cluster| cluster.strip_prefix(first) == Some(second))
}
