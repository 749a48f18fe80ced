//! # Localizador da Sílaba Tônica
//!
//! Recebe as sílabas já separadas (com acentos intactos) e devolve a posição
//! da tônica **contada a partir do fim** (1 = última sílaba).
//!
//! ## Regras (a primeira que casar vence)
//!
//! 0. Monossílabo → 1.
//! 1. Acento forte (agudo, grave, circunflexo) → sílaba acentuada mais à direita.
//! 2. Til (ã, õ, ...) → sílaba com til mais à direita.
//! 3. Última sílaba termina em `i`/`u`/`í`/`ú` (+`s`), `ais|eis|ois|uns|ens` ou `r|l|z` → 1.
//! 4. Penúltima sílaba casa o mesmo padrão → 2.
//! 5. Padrão → 2 (paroxítona).
//!
//! A regra 4 carece de justificativa fonológica clara e devolve o mesmo valor
//! que a regra 5. Ela é mantida por compatibilidade com os resultados do
//! dicionário e marcada em [`TonicRule::is_suspect`] para revisão.
//!
//! Existe uma variante histórica com o padrão de sufixo
//! `(i(s)?|u|z|im|us|r|l|x|n|um(s)?|ps|om|on(s)?)` e deslocamento por hífen;
//! ela não é implementada aqui.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::alphabet;

/// Terminações que tornam oxítona uma palavra sem acento gráfico.
static FINAL_STRESS_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:[iuíú]s?|ais|eis|ois|uns|ens|[rlz])$").expect("padrão de oxítona válido")
});

/// Posição da tônica a partir do fim; sempre ≥ 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TonicPosition(usize);

impl TonicPosition {
    pub const LAST: TonicPosition = TonicPosition(1);
    pub const PENULTIMATE: TonicPosition = TonicPosition(2);

    /// `None` para 0.
    pub fn new(position: usize) -> Option<Self> {
        (position >= 1).then_some(TonicPosition(position))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn stress_class(&self) -> StressClass {
        match self.0 {
            1 => StressClass::Oxitona,
            2 => StressClass::Paroxitona,
            3 => StressClass::Proparoxitona,
            n => StressClass::Other(n),
        }
    }
}

impl fmt::Display for TonicPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classificação da palavra pela posição da tônica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressClass {
    Oxitona,
    Paroxitona,
    Proparoxitona,
    /// Tônica antes da antepenúltima (só ocorre em palavras compostas).
    Other(usize),
}

impl StressClass {
    pub fn name(&self) -> &'static str {
        match self {
            StressClass::Oxitona => "oxítona",
            StressClass::Paroxitona => "paroxítona",
            StressClass::Proparoxitona => "proparoxítona",
            StressClass::Other(_) => "???",
        }
    }
}

/// Qual regra decidiu a tônica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TonicRule {
    SingleSyllable,
    StrongAccent,
    WeakAccent,
    FinalSuffix,
    PenultimateSuffix,
    DefaultParoxytone,
}

impl TonicRule {
    pub fn name(&self) -> &'static str {
        match self {
            TonicRule::SingleSyllable => "single_syllable",
            TonicRule::StrongAccent => "strong_accent",
            TonicRule::WeakAccent => "weak_accent",
            TonicRule::FinalSuffix => "final_suffix",
            TonicRule::PenultimateSuffix => "penultimate_suffix",
            TonicRule::DefaultParoxytone => "default_paroxytone",
        }
    }

    /// Regra mantida por compatibilidade, pendente de revisão linguística.
    pub fn is_suspect(&self) -> bool {
        matches!(self, TonicRule::PenultimateSuffix)
    }
}

/// A posição da tônica e a regra que a determinou.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TonicDecision {
    pub position: TonicPosition,
    pub rule: TonicRule,
}

/// Localiza a tônica. `None` apenas para uma sequência vazia.
pub fn locate<S: AsRef<str>>(syllables: &[S]) -> Option<TonicDecision> {
    let decide = |position: usize, rule: TonicRule| {
        TonicPosition::new(position).map(|position| TonicDecision { position, rule })
    };

    match syllables.len() {
        0 => return None,
        1 => return decide(1, TonicRule::SingleSyllable),
        _ => {}
    }

    if let Some(position) = rightmost(syllables, alphabet::has_strong_accent) {
        return decide(position, TonicRule::StrongAccent);
    }
    if let Some(position) = rightmost(syllables, alphabet::has_weak_accent) {
        return decide(position, TonicRule::WeakAccent);
    }

    let last = syllables[syllables.len() - 1].as_ref();
    if FINAL_STRESS_SUFFIX.is_match(last) {
        return decide(1, TonicRule::FinalSuffix);
    }
    let penultimate = syllables[syllables.len() - 2].as_ref();
    if FINAL_STRESS_SUFFIX.is_match(penultimate) {
        return decide(2, TonicRule::PenultimateSuffix);
    }
    decide(2, TonicRule::DefaultParoxytone)
}

/// Atalho para [`locate`] quando só a posição interessa.
pub fn tonic<S: AsRef<str>>(syllables: &[S]) -> Option<TonicPosition> {
    locate(syllables).map(|decision| decision.position)
}

/// Distância a partir do fim (1-based) da sílaba mais à direita que satisfaz `accented`.
fn rightmost<S: AsRef<str>>(syllables: &[S], accented: fn(&str) -> bool) -> Option<usize> {
    syllables
        .iter()
        .rev()
        .position(|s| accented(s.as_ref()))
        .map(|p| p + 1)
}
