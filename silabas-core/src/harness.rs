//! # Harness de Validação
//!
//! Compara as predições de um [`Syllabify`] com o dicionário de referência.
//!
//! Para cada entrada:
//! 1. Entradas malformadas são descartadas (`warn!` + um diagnóstico `Malformed`)
//!    e ficam fora de todos os denominadores.
//! 2. A separação predita é comparada à de referência por igualdade exata.
//! 3. **Somente se a separação casou**, a tônica é localizada e comparada.
//!
//! As entradas são distribuídas em um pool `rayon` de tamanho fixo. A coleta
//! indexada preserva a ordem de entrada: duas execuções sobre o mesmo
//! dicionário produzem exatamente os mesmos diagnósticos, na mesma ordem.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ValidationConfig;
use crate::dictionary::{MalformedEntry, RawEntry};
use crate::error::Result;
use crate::segmenter::Segmenter;
use crate::tonic::{self, TonicPosition, TonicRule};

/// Estratégia de separação avaliada pelo harness.
pub trait Syllabify: Sync {
    /// Sílabas da palavra, ou `None` se a predição não estiver disponível.
    fn syllabify(&self, word: &str) -> Option<Vec<String>>;
}

impl Syllabify for Segmenter {
    fn syllabify(&self, word: &str) -> Option<Vec<String>> {
        Some(self.segment(word))
    }
}

/// Predição para uma entrada válida.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Posição da entrada no dicionário.
    pub index: usize,
    pub word: String,
    /// `None` quando a predição falhou ou veio vazia.
    pub predicted_syllables: Option<Vec<String>>,
    /// `None` quando a separação não casou (a tônica não é avaliada).
    pub predicted_tonic: Option<TonicPosition>,
    pub syllabification_match: bool,
    pub tonic_match: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    SyllabificationMismatch,
    TonicMismatch,
    /// O segmentador devolveu uma sequência vazia.
    SegmentationAnomaly,
    /// O preditor não produziu resposta.
    PredictionUnavailable,
}

/// Registro de uma entrada descartada ou errada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    Malformed {
        index: usize,
        word: Option<String>,
        reason: MalformedEntry,
    },
    Mismatch {
        index: usize,
        word: String,
        failure: FailureKind,
        expected_syllables: Vec<String>,
        predicted_syllables: Option<Vec<String>>,
        expected_tonic: TonicPosition,
        predicted_tonic: Option<TonicPosition>,
        tonic_rule: Option<TonicRule>,
    },
}

impl Diagnostic {
    pub fn index(&self) -> usize {
        match self {
            Diagnostic::Malformed { index, .. } | Diagnostic::Mismatch { index, .. } => *index,
        }
    }

    pub fn word(&self) -> Option<&str> {
        match self {
            Diagnostic::Malformed { word, .. } => word.as_deref(),
            Diagnostic::Mismatch { word, .. } => Some(word),
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Diagnostic::Malformed { .. })
    }

    /// Mensagem de uma linha para relatórios e logs.
    pub fn message(&self) -> String {
        match self {
            Diagnostic::Malformed { index, reason, .. } => {
                format!("entrada #{index} ignorada: {reason}")
            }
            Diagnostic::Mismatch {
                word,
                failure,
                expected_syllables,
                predicted_syllables,
                expected_tonic,
                predicted_tonic,
                ..
            } => {
                let expected = expected_syllables.join("-");
                let predicted = predicted_syllables
                    .as_ref()
                    .map(|s| s.join("-"))
                    .unwrap_or_else(|| "falhou".to_string());
                match failure {
                    FailureKind::SyllabificationMismatch => format!(
                        "separação divergente para '{word}': esperado {expected}, obtido {predicted}"
                    ),
                    FailureKind::TonicMismatch => format!(
                        "tônica divergente para '{word}': esperado {expected_tonic}, obtido {}",
                        predicted_tonic
                            .map(|t| t.to_string())
                            .unwrap_or_else(|| "falhou".to_string())
                    ),
                    FailureKind::SegmentationAnomaly => {
                        format!("segmentador devolveu sequência vazia para '{word}'")
                    }
                    FailureKind::PredictionUnavailable => {
                        format!("predição indisponível para '{word}'")
                    }
                }
            }
        }
    }
}

/// Resultado agregado de uma execução.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Entradas no dicionário, inclusive as malformadas.
    pub total_entries: usize,
    pub total_valid: usize,
    pub skipped: usize,
    pub syllabification_correct: usize,
    pub tonic_correct: usize,
    pub results: Vec<PredictionResult>,
    /// Em ordem de entrada.
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationSummary {
    /// Percentual de separações corretas (0 quando não há entradas válidas).
    pub fn syllabification_accuracy(&self) -> f64 {
        percent(self.syllabification_correct, self.total_valid)
    }

    /// Percentual de tônicas corretas sobre o total de entradas válidas.
    pub fn tonic_accuracy(&self) -> f64 {
        percent(self.tonic_correct, self.total_valid)
    }

    /// Palavras com separação ou tônica errada, em ordem de entrada.
    pub fn incorrect_words(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter(|d| !d.is_malformed())
            .filter_map(Diagnostic::word)
            .collect()
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Resultado da avaliação de uma única entrada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped(Diagnostic),
    Scored {
        result: PredictionResult,
        diagnostic: Option<Diagnostic>,
    },
}

pub struct Validator<P = Segmenter> {
    predictor: P,
    workers: usize,
}

impl Validator<Segmenter> {
    pub fn from_config(config: &ValidationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_predictor(config.segmenter(), config.worker_count()))
    }
}

impl Default for Validator<Segmenter> {
    fn default() -> Self {
        let config = ValidationConfig::default();
        Self::with_predictor(config.segmenter(), config.worker_count())
    }
}

impl<P: Syllabify> Validator<P> {
    pub fn with_predictor(predictor: P, workers: usize) -> Self {
        Self {
            predictor,
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Avalia todas as entradas no pool de workers.
    pub fn run(&self, entries: &[RawEntry]) -> Result<ValidationSummary> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()?;
        info!(entries = entries.len(), workers = self.workers, "iniciando validação");

        let outcomes: Vec<Outcome> = pool.install(|| {
            entries
                .par_iter()
                .enumerate()
                .map(|(index, entry)| self.score(index, entry))
                .collect()
        });

        let summary = aggregate(entries.len(), outcomes);
        info!(
            valid = summary.total_valid,
            skipped = summary.skipped,
            syllabification_correct = summary.syllabification_correct,
            tonic_correct = summary.tonic_correct,
            "validação concluída"
        );
        Ok(summary)
    }

    /// Avalia uma entrada isolada.
    pub fn score(&self, index: usize, raw: &RawEntry) -> Outcome {
        let entry = match raw.validate() {
            Ok(entry) => entry,
            Err(reason) => {
                warn!(index, word = ?raw.word, %reason, "entrada malformada ignorada");
                return Outcome::Skipped(Diagnostic::Malformed {
                    index,
                    word: raw.word.clone(),
                    reason,
                });
            }
        };

        let prediction = self.predictor.syllabify(entry.word.as_str());
        let failure = match &prediction {
            None => Some(FailureKind::PredictionUnavailable),
            Some(syllables) if syllables.is_empty() => Some(FailureKind::SegmentationAnomaly),
            Some(syllables) if *syllables == entry.syllables => None,
            Some(_) => Some(FailureKind::SyllabificationMismatch),
        };
        let predicted = prediction.filter(|s| !s.is_empty());
        let syllabification_match = failure.is_none();

        let decision = if syllabification_match {
            predicted.as_deref().and_then(|s| tonic::locate(s))
        } else {
            None
        };
        let tonic_match = decision.map_or(false, |d| d.position == entry.tonic);
        let failure = match failure {
            None if !tonic_match => Some(FailureKind::TonicMismatch),
            other => other,
        };

        let result = PredictionResult {
            index,
            word: entry.word.to_string(),
            predicted_syllables: predicted.clone(),
            predicted_tonic: decision.map(|d| d.position),
            syllabification_match,
            tonic_match,
        };
        let diagnostic = failure.map(|failure| {
            debug!(index, word = %entry.word, ?failure, "predição divergente");
            Diagnostic::Mismatch {
                index,
                word: entry.word.to_string(),
                failure,
                expected_syllables: entry.syllables.clone(),
                predicted_syllables: predicted,
                expected_tonic: entry.tonic,
                predicted_tonic: decision.map(|d| d.position),
                tonic_rule: decision.map(|d| d.rule),
            }
        });

        Outcome::Scored { result, diagnostic }
    }
}

fn aggregate(total_entries: usize, outcomes: Vec<Outcome>) -> ValidationSummary {
    let mut summary = ValidationSummary {
        total_entries,
        ..Default::default()
    };
    for outcome in outcomes {
        match outcome {
            Outcome::Skipped(diagnostic) => {
                summary.skipped += 1;
                summary.diagnostics.push(diagnostic);
            }
            Outcome::Scored { result, diagnostic } => {
                summary.total_valid += 1;
                summary.syllabification_correct += usize::from(result.syllabification_match);
                summary.tonic_correct += usize::from(result.tonic_match);
                summary.results.push(result);
                summary.diagnostics.extend(diagnostic);
            }
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus;
    use crate::segmenter::HiatusPolicy;

    fn validator() -> Validator {
        Validator::with_predictor(Segmenter::default(), 2)
    }

    struct Unavailable;

    impl Syllabify for Unavailable {
        fn syllabify(&self, _word: &str) -> Option<Vec<String>> {
            None
        }
    }

    struct Empty;

    impl Syllabify for Empty {
        fn syllabify(&self, _word: &str) -> Option<Vec<String>> {
            Some(Vec::new())
        }
    }

    #[test]
    fn test_reference_corpus_is_fully_correct() {
        let entries = corpus::reference_dictionary();
        let summary = validator().run(&entries).unwrap();
        assert_eq!(summary.total_valid, entries.len());
        assert_eq!(summary.syllabification_correct, entries.len());
        assert_eq!(summary.tonic_correct, entries.len());
        assert_eq!(summary.syllabification_accuracy(), 100.0);
        assert_eq!(summary.tonic_accuracy(), 100.0);
        assert!(summary.diagnostics.is_empty(), "{:?}", summary.diagnostics);
    }

    #[test]
    fn test_missing_tonic_is_excluded() {
        let mut missing = RawEntry::new("casa", &["ca", "sa"], 2);
        missing.tonic = None;
        let entries = vec![RawEntry::new("café", &["ca", "fé"], 1), missing];

        let summary = validator().run(&entries).unwrap();
        assert_eq!(summary.total_entries, 2);
        assert_eq!(summary.total_valid, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.syllabification_accuracy(), 100.0);
        assert_eq!(summary.diagnostics.len(), 1);
        assert_eq!(
            summary.diagnostics[0],
            Diagnostic::Malformed {
                index: 1,
                word: Some("casa".to_string()),
                reason: MalformedEntry::MissingTonic,
            }
        );
    }

    #[test]
    fn test_badly_typed_entry_does_not_abort_run() {
        let json = r#"[
            {"word": "papéis", "syllables": ["pa", "péis"], "tonic": 1},
            {"word": "mar", "syllables": ["mar"], "tonic": "1"},
            {"word": "céu", "syllables": ["céu"], "tonic": 1}
        ]"#;
        let entries = crate::dictionary::from_json_str(json).unwrap();
        let summary = validator().run(&entries).unwrap();
        assert_eq!(summary.total_valid, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.syllabification_correct, 2);
        assert_eq!(summary.tonic_correct, 2);
        assert_eq!(summary.diagnostics.len(), 1);
        match &summary.diagnostics[0] {
            Diagnostic::Malformed { index, word, reason } => {
                assert_eq!(*index, 1);
                assert_eq!(word.as_deref(), Some("mar"));
                assert!(matches!(reason, MalformedEntry::InvalidField { .. }));
            }
            other => panic!("diagnóstico inesperado: {other:?}"),
        }
    }

    #[test]
    fn test_syllabification_mismatch_skips_tonic() {
        // "gu" é sempre dígrafo, mesmo antes de consoante: "agudo" → agu·do e
        // "gula" → uma sílaba só ("gula"), sem vogal própria para o "u"
        let entries = vec![RawEntry::new("agudo", &["a", "gu", "do"], 2)];
        let summary = validator().run(&entries).unwrap();
        assert_eq!(summary.syllabification_correct, 0);
        assert_eq!(summary.tonic_correct, 0);

        let result = &summary.results[0];
        assert_eq!(result.predicted_syllables, Some(vec!["agu".to_string(), "do".to_string()]));
        assert_eq!(result.predicted_tonic, None);
        assert_eq!(Segmenter::default().segment("gula"), vec!["gula"]);

        match &summary.diagnostics[0] {
            Diagnostic::Mismatch { failure, .. } => {
                assert_eq!(*failure, FailureKind::SyllabificationMismatch)
            }
            other => panic!("diagnóstico inesperado: {other:?}"),
        }
    }

    #[test]
    fn test_tonic_mismatch() {
        let entries = vec![RawEntry::new("casa", &["ca", "sa"], 1)];
        let summary = validator().run(&entries).unwrap();
        assert_eq!(summary.syllabification_correct, 1);
        assert_eq!(summary.tonic_correct, 0);
        assert_eq!(summary.tonic_accuracy(), 0.0);
        match &summary.diagnostics[0] {
            Diagnostic::Mismatch {
                failure,
                predicted_tonic,
                tonic_rule,
                ..
            } => {
                assert_eq!(*failure, FailureKind::TonicMismatch);
                assert_eq!(*predicted_tonic, Some(TonicPosition::PENULTIMATE));
                assert_eq!(*tonic_rule, Some(TonicRule::DefaultParoxytone));
            }
            other => panic!("diagnóstico inesperado: {other:?}"),
        }
        assert_eq!(summary.incorrect_words(), vec!["casa"]);
    }

    #[test]
    fn test_unavailable_prediction_is_mismatch() {
        let entries = corpus::reference_dictionary();
        let summary = Validator::with_predictor(Unavailable, 2).run(&entries).unwrap();
        assert_eq!(summary.total_valid, entries.len());
        assert_eq!(summary.syllabification_correct, 0);
        assert_eq!(summary.diagnostics.len(), entries.len());
        assert!(summary.diagnostics.iter().all(|d| matches!(
            d,
            Diagnostic::Mismatch { failure: FailureKind::PredictionUnavailable, .. }
        )));
    }

    #[test]
    fn test_empty_prediction_is_anomaly() {
        let entries = vec![RawEntry::new("mar", &["mar"], 1)];
        let summary = Validator::with_predictor(Empty, 1).run(&entries).unwrap();
        assert_eq!(summary.results[0].predicted_syllables, None);
        assert!(matches!(
            summary.diagnostics[0],
            Diagnostic::Mismatch { failure: FailureKind::SegmentationAnomaly, .. }
        ));
    }

    #[test]
    fn test_diagnostics_follow_input_order() {
        let mut entries = Vec::new();
        for i in 0..200 {
            entries.push(RawEntry::new("casa", &["ca", "sa"], if i % 3 == 0 { 1 } else { 2 }));
            if i % 7 == 0 {
                entries.push(RawEntry::default());
            }
        }
        let first = Validator::with_predictor(Segmenter::default(), 8).run(&entries).unwrap();
        let second = Validator::with_predictor(Segmenter::default(), 3).run(&entries).unwrap();
        assert_eq!(first, second);

        let indices: Vec<usize> = first.diagnostics.iter().map(Diagnostic::index).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn test_empty_dictionary() {
        let summary = validator().run(&[]).unwrap();
        assert_eq!(summary.total_valid, 0);
        assert_eq!(summary.syllabification_accuracy(), 0.0);
    }

    #[test]
    fn test_from_config() {
        let config = ValidationConfig::default()
            .with_workers(3)
            .with_hiatus(HiatusPolicy::MaximalNucleus);
        let validator = Validator::from_config(&config).unwrap();
        assert_eq!(validator.workers(), 3);

        let entries = vec![RawEntry::new("saúde", &["sa", "ú", "de"], 2)];
        let summary = validator.run(&entries).unwrap();
        assert_eq!(summary.syllabification_correct, 0);

        assert!(Validator::from_config(&ValidationConfig::default().with_workers(0)).is_err());
    }

    #[test]
    fn test_diagnostic_message() {
        let diagnostic = Diagnostic::Malformed {
            index: 4,
            word: None,
            reason: MalformedEntry::MissingWord,
        };
        assert_eq!(diagnostic.message(), "entrada #4 ignorada: campo 'word' ausente ou vazio");
    }
}
