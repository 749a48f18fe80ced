//! # Normalizador: Dígrafos como Unidades Atômicas
//!
//! Antes da segmentação, a palavra é convertida em uma sequência de unidades
//! ([`Unit`]). Os dígrafos `ch`, `lh`, `nh`, `gu`, `qu` e as consoantes dobradas
//! `rr`, `ss` viram **uma única unidade**, de modo que o segmentador as enxerga
//! como uma só consoante.
//!
//! ## Ordem de Substituição
//!
//! A ordem é fixa: `ch, lh, nh, gu, qu, rr, ss`. Cada substituição percorre a
//! sequência da esquerda para a direita, sem sobreposição, sobre o resultado
//! das substituições anteriores. Uma região já substituída nunca é revisitada.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use silabas_core::normalizer::{normalize, Digraph, Doubled, Unit};
//!
//! let normalized = normalize("chorro");
//! assert_eq!(normalized.units()[0], Unit::Digraph(Digraph::Ch));
//! assert_eq!(normalized.units()[2], Unit::Doubled(Doubled::Rr));
//! assert_eq!(normalized.restore(), "chorro");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::alphabet;

/// Uma palavra pronta para o pipeline: composta em NFC e em minúsculas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    pub fn new(raw: &str) -> Self {
        let composed: String = raw.trim().nfc().collect();
        Word(composed.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Word {
    fn from(raw: &str) -> Self {
        Word::new(raw)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dígrafos que representam um único som consonantal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Digraph {
    Ch,
    Lh,
    Nh,
    /// `gu` antes de vogal (ex: "guitarra"). O `u` é absorvido pela consoante.
    Gu,
    /// `qu` antes de vogal (ex: "queijo").
    Qu,
}

impl Digraph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Digraph::Ch => "ch",
            Digraph::Lh => "lh",
            Digraph::Nh => "nh",
            Digraph::Gu => "gu",
            Digraph::Qu => "qu",
        }
    }
}

/// Consoantes dobradas: na separação, cada metade fica em uma sílaba.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Doubled {
    Rr,
    Ss,
}

impl Doubled {
    pub fn as_str(&self) -> &'static str {
        match self {
            Doubled::Rr => "rr",
            Doubled::Ss => "ss",
        }
    }

    /// A letra que se repete (`r` ou `s`).
    pub fn letter(&self) -> char {
        match self {
            Doubled::Rr => 'r',
            Doubled::Ss => 's',
        }
    }
}

/// Unidade atômica da palavra normalizada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit<'a> {
    /// Um grafema literal da palavra original.
    Letter(&'a str),
    Digraph(Digraph),
    Doubled(Doubled),
}

impl<'a> Unit<'a> {
    /// Texto original da unidade (dígrafos restaurados às duas letras).
    pub fn text(&self) -> &'a str {
        match self {
            Unit::Letter(g) => g,
            Unit::Digraph(d) => d.as_str(),
            Unit::Doubled(d) => d.as_str(),
        }
    }

    pub fn is_vowel(&self) -> bool {
        matches!(self, Unit::Letter(g) if alphabet::is_vowel(g))
    }

    /// Consoante simples ou dígrafo. Dobradas (`rr`, `ss`) ficam de fora:
    /// o segmentador as trata por uma regra própria.
    pub fn is_consonant(&self) -> bool {
        match self {
            Unit::Letter(g) => !alphabet::is_vowel(g),
            Unit::Digraph(_) => true,
            Unit::Doubled(_) => false,
        }
    }
}

/// Ordem fixa de substituição dos agrupamentos.
const REPLACEMENT_ORDER: [Unit<'static>; 7] = [
    Unit::Digraph(Digraph::Ch),
    Unit::Digraph(Digraph::Lh),
    Unit::Digraph(Digraph::Nh),
    Unit::Digraph(Digraph::Gu),
    Unit::Digraph(Digraph::Qu),
    Unit::Doubled(Doubled::Rr),
    Unit::Doubled(Doubled::Ss),
];

/// Palavra como sequência de [`Unit`], emprestando os grafemas do texto original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWord<'a> {
    units: Vec<Unit<'a>>,
}

impl<'a> NormalizedWord<'a> {
    pub fn units(&self) -> &[Unit<'a>] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Reconstrói o texto original a partir das unidades.
    pub fn restore(&self) -> String {
        self.units.iter().map(Unit::text).collect()
    }
}

/// Normaliza uma palavra (já em minúsculas) em unidades atômicas.
pub fn normalize(word: &str) -> NormalizedWord<'_> {
    let mut units: Vec<Unit> = word.graphemes(true).map(Unit::Letter).collect();
    for token in REPLACEMENT_ORDER {
        units = replace_pairs(units, token);
    }
    NormalizedWord { units }
}

/// Substitui, da esquerda para a direita, cada par de letras literais que
/// soletra `token`. Unidades já substituídas não casam com `Letter`.
fn replace_pairs<'a>(units: Vec<Unit<'a>>, token: Unit<'static>) -> Vec<Unit<'a>> {
    let (first, second) = token.text().split_at(1);
    let mut replaced = Vec::with_capacity(units.len());
    let mut iter = units.into_iter().peekable();

    while let Some(unit) = iter.next() {
        let starts_pair = matches!(unit, Unit::Letter(g) if g == first);
        let ends_pair = matches!(iter.peek(), Some(Unit::Letter(g)) if *g == second);
        if starts_pair && ends_pair {
            iter.next();
            replaced.push(token);
        } else {
            replaced.push(unit);
        }
    }
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_lowercase_and_nfc() {
        let word = Word::new("  Sau\u{301}de ");
        assert_eq!(word.as_str(), "saúde");
        assert_eq!(word.to_string(), "saúde");
    }

    #[test]
    fn test_normalize_digraphs() {
        let normalized = normalize("chuva");
        assert_eq!(
            normalized.units(),
            &[
                Unit::Digraph(Digraph::Ch),
                Unit::Letter("u"),
                Unit::Letter("v"),
                Unit::Letter("a"),
            ]
        );
    }

    #[test]
    fn test_normalize_doubled() {
        let normalized = normalize("guerra");
        assert_eq!(
            normalized.units(),
            &[
                Unit::Digraph(Digraph::Gu),
                Unit::Letter("e"),
                Unit::Doubled(Doubled::Rr),
                Unit::Letter("a"),
            ]
        );
    }

    #[test]
    fn test_non_overlapping_left_to_right() {
        // "sss" → ss + s; o terceiro "s" não forma novo par
        let normalized = normalize("sss");
        assert_eq!(
            normalized.units(),
            &[Unit::Doubled(Doubled::Ss), Unit::Letter("s")]
        );
    }

    #[test]
    fn test_replaced_region_not_rescanned() {
        // "chh": o "h" de "ch" já foi consumido, o segundo "h" fica literal
        let normalized = normalize("chh");
        assert_eq!(
            normalized.units(),
            &[Unit::Digraph(Digraph::Ch), Unit::Letter("h")]
        );
        // "nhh" idem para "nh"
        assert_eq!(normalize("nhh").len(), 2);
    }

    #[test]
    fn test_passthrough() {
        let normalized = normalize("casa");
        assert_eq!(normalized.len(), 4);
        assert!(normalized.units().iter().all(|u| matches!(u, Unit::Letter(_))));
    }

    #[test]
    fn test_restore_roundtrip() {
        for word in ["passarinho", "queijo", "palha", "carro", "ninho", "guitarra"] {
            assert_eq!(normalize(word).restore(), word);
        }
    }

    #[test]
    fn test_unit_classes() {
        assert!(Unit::Letter("a").is_vowel());
        assert!(Unit::Letter("t").is_consonant());
        assert!(Unit::Digraph(Digraph::Nh).is_consonant());
        assert!(!Unit::Doubled(Doubled::Ss).is_consonant());
        assert!(!Unit::Doubled(Doubled::Ss).is_vowel());
    }
}
