//! # Segmentador Silábico: Máquina de Estados em Passada Única
//!
//! Percorre a palavra normalizada ([`crate::normalizer`]) da esquerda para a
//! direita. O ponteiro `i` só avança. Em cada iteração:
//!
//! 1. **Ataque** (onset): sequência máxima de não-vogais.
//! 2. **Núcleo**: sequência máxima de vogais, interrompida por um hiato
//!    conforme a [`HiatusPolicy`].
//! 3. **Coda**: olha as consoantes que seguem o núcleo e decide onde a
//!    próxima sílaba começa ([`CodaDecision`]).
//!
//! | Depois do núcleo           | Decisão            | Exemplo            |
//! |----------------------------|--------------------|--------------------|
//! | fim da palavra             | `EndOfWord`        | ca·**sa**          |
//! | só consoantes até o fim    | `FinalConsonants`  | de·va·**gar**      |
//! | consoante + vogal          | `Open`             | **de**·va·gar      |
//! | encontro inseparável       | `Cluster`          | **a**·tle·ta       |
//! | consoante + consoante      | `Closed`           | **pers**·pec·ti·va |
//! | `rr` / `ss`                | `SplitDoubled`     | **car**·ro         |
//!
//! Hífens são fronteiras rígidas: cada parte é segmentada separadamente e o
//! hífen não aparece nas sílabas.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use silabas_core::segmenter::{segment, HiatusPolicy, Segmenter};
//!
//! assert_eq!(segment("guitarra"), vec!["gui", "tar", "ra"]);
//!
//! let strict = Segmenter::new(HiatusPolicy::StrongAccentOrRepeated);
//! assert_eq!(strict.segment("coordenar"), vec!["co", "or", "de", "nar"]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet;
use crate::normalizer::{normalize, NormalizedWord, Unit, Word};

/// Política de hiato: quando duas vogais vizinhas pertencem a sílabas diferentes.
///
/// A regra do núcleo máximo sozinha junta todas as vogais vizinhas
/// ("saúde" → "saú·de"). As políticas abaixo forçam fronteiras entre vogais.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiatusPolicy {
    /// Nenhuma quebra: o núcleo é a sequência máxima de vogais.
    MaximalNucleus,
    /// Acento forte separa vogais vizinhas (sa·ú·de), preservando ditongos
    /// decrescentes como "éu" e "ói".
    #[default]
    StrongAccent,
    /// Como `StrongAccent`, e também separa vogais idênticas repetidas (co·or·de·nar).
    StrongAccentOrRepeated,
}

impl HiatusPolicy {
    /// Nome usado em configuração e na linha de comando.
    pub fn name(&self) -> &'static str {
        match self {
            HiatusPolicy::MaximalNucleus => "maximal_nucleus",
            HiatusPolicy::StrongAccent => "strong_accent",
            HiatusPolicy::StrongAccentOrRepeated => "strong_accent_or_repeated",
        }
    }

    /// Deve haver fronteira silábica entre as vogais `prev` e `next`?
    fn splits(&self, prev: &Unit<'_>, next: &Unit<'_>) -> bool {
        let (Unit::Letter(a), Unit::Letter(b)) = (prev, next) else {
            return false;
        };
        match self {
            HiatusPolicy::MaximalNucleus => false,
            HiatusPolicy::StrongAccent => accent_boundary(a, b),
            HiatusPolicy::StrongAccentOrRepeated => accent_boundary(a, b) || a == b,
        }
    }
}

/// Fronteira causada por acento forte. Sempre antes da vogal acentuada
/// (sa·ú·de, po·é·ti·co). Depois dela só se for `í`/`ú` ou se a vogal
/// seguinte não for a semivogal `i`/`u` de um ditongo decrescente (céu, herói).
fn accent_boundary(prev: &str, next: &str) -> bool {
    if alphabet::has_strong_accent(next) {
        return true;
    }
    if !alphabet::has_strong_accent(prev) {
        return false;
    }
    matches!(prev, "í" | "ú") || !matches!(next, "i" | "u")
}

impl fmt::Display for HiatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HiatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "maximal_nucleus" => Ok(HiatusPolicy::MaximalNucleus),
            "strong_accent" => Ok(HiatusPolicy::StrongAccent),
            "strong_accent_or_repeated" => Ok(HiatusPolicy::StrongAccentOrRepeated),
            other => Err(format!(
                "política de hiato desconhecida: '{other}' (use maximal_nucleus, strong_accent ou strong_accent_or_repeated)"
            )),
        }
    }
}

/// Como a sílaba foi fechada em uma iteração da máquina de estados.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodaDecision {
    /// A palavra termina logo após o núcleo.
    EndOfWord,
    /// Restam apenas consoantes: todas entram na coda.
    FinalConsonants,
    /// Sem coda: a próxima sílaba começa na consoante seguinte (ou na vogal, em hiato).
    Open,
    /// Sem coda: o encontro inseparável inteiro vai para o ataque seguinte.
    Cluster,
    /// A coda recebe as consoantes antes da última (ou antes do encontro final).
    Closed,
    /// `rr`/`ss` dividido: uma letra na coda, outra no ataque seguinte.
    SplitDoubled,
    /// Parte sem vogal: anexada à sílaba anterior ou devolvida inteira.
    NoNucleus,
}

/// Registro de uma iteração do segmentador, para inspeção passo a passo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentStep {
    pub onset: String,
    pub nucleus: String,
    pub coda: String,
    pub decision: CodaDecision,
    /// A sílaba resultante (`onset + nucleus + coda`).
    pub syllable: String,
}

impl SegmentStep {
    fn new(onset: String, nucleus: String, coda: String, decision: CodaDecision) -> Self {
        let syllable = format!("{onset}{nucleus}{coda}");
        Self {
            onset,
            nucleus,
            coda,
            decision,
            syllable,
        }
    }
}

/// Resultado completo da segmentação: sílabas e o rastro da máquina de estados.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    pub syllables: Vec<String>,
    pub steps: Vec<SegmentStep>,
}

/// O segmentador. Sem estado além da política de hiato: `Copy` e seguro
/// para compartilhar entre threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Segmenter {
    hiatus: HiatusPolicy,
}

impl Segmenter {
    pub fn new(hiatus: HiatusPolicy) -> Self {
        Self { hiatus }
    }

    pub fn hiatus(&self) -> HiatusPolicy {
        self.hiatus
    }

    /// Separa a palavra em sílabas.
    pub fn segment(&self, word: &str) -> Vec<String> {
        self.trace(word).syllables
    }

    /// Separa a palavra e devolve também cada passo da máquina de estados.
    pub fn trace(&self, word: &str) -> Segmentation {
        let word = Word::new(word);
        let mut out = Segmentation::default();
        for part in word.as_str().split('-').filter(|p| !p.is_empty()) {
            self.scan(&normalize(part), &mut out);
        }
        out
    }

    fn scan(&self, word: &NormalizedWord<'_>, out: &mut Segmentation) {
        let units = word.units();
        let n = units.len();
        let part_start = out.syllables.len();
        let mut i = 0;
        // Metade de um `rr`/`ss` dividido, herdada pelo próximo ataque
        let mut carried: Option<char> = None;

        while i < n {
            // === Ataque ===
            let mut onset = carried.take().map(String::from).unwrap_or_default();
            let onset_start = i;
            while i < n && !units[i].is_vowel() {
                i += 1;
            }
            onset.extend(units[onset_start..i].iter().map(Unit::text));

            // === Núcleo ===
            let nucleus_start = i;
            while i < n && units[i].is_vowel() {
                if i > nucleus_start && self.hiatus.splits(&units[i - 1], &units[i]) {
                    break;
                }
                i += 1;
            }
            let nucleus = restore(&units[nucleus_start..i]);

            if nucleus.is_empty() {
                // Só sobra acontecer no fim da parte (i == n)
                let step = SegmentStep::new(onset, nucleus, String::new(), CodaDecision::NoNucleus);
                if out.syllables.len() > part_start {
                    if let Some(last) = out.syllables.last_mut() {
                        last.push_str(&step.syllable);
                    }
                } else {
                    out.syllables.push(step.syllable.clone());
                }
                out.steps.push(step);
                break;
            }

            // === Coda ===
            let run_start = i;
            let mut run_end = i;
            while run_end < n && !units[run_end].is_vowel() {
                run_end += 1;
            }
            let run = &units[run_start..run_end];

            let (decision, coda, next) = if run_start == n {
                (CodaDecision::EndOfWord, String::new(), n)
            } else if run_end == n {
                (CodaDecision::FinalConsonants, restore(run), n)
            } else {
                match run {
                    [Unit::Doubled(doubled)] => {
                        carried = Some(doubled.letter());
                        (CodaDecision::SplitDoubled, doubled.letter().to_string(), run_end)
                    }
                    [] | [_] => (CodaDecision::Open, String::new(), run_start),
                    [.., a, b] => {
                        let onset_len = if forms_cluster(a, b) { 2 } else { 1 };
                        let split = run_end - onset_len;
                        let decision = match (split == run_start, onset_len) {
                            (true, 2) => CodaDecision::Cluster,
                            (true, _) => CodaDecision::Open,
                            (false, _) => CodaDecision::Closed,
                        };
                        (decision, restore(&units[run_start..split]), split)
                    }
                }
            };

            let step = SegmentStep::new(onset, nucleus, coda, decision);
            out.syllables.push(step.syllable.clone());
            out.steps.push(step);
            i = next;
        }
    }
}

/// Separa a palavra com a política de hiato padrão.
pub fn segment(word: &str) -> Vec<String> {
    Segmenter::default().segment(word)
}

fn restore(units: &[Unit<'_>]) -> String {
    units.iter().map(Unit::text).collect()
}

fn forms_cluster(first: &Unit<'_>, second: &Unit<'_>) -> bool {
    match (first, second) {
        (Unit::Letter(a), Unit::Letter(b)) => alphabet::is_onset_cluster(a, b),
        _ => false,
    }
}
