//! # Pipeline — Orquestrador com Eventos Observáveis
//!
//! Encadeia normalizador → segmentador → localizador da tônica para uma
//! palavra e, opcionalmente, emite um evento por etapa via um canal Rust
//! (`mpsc`). O servidor WebSocket usa esses eventos para mostrar a máquina
//! de estados sílaba a sílaba.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::normalizer::{normalize, Word};
use crate::segmenter::{HiatusPolicy, SegmentStep, Segmenter};
use crate::tonic::{self, StressClass, TonicDecision, TonicPosition, TonicRule};

/// Análise completa de uma palavra.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    pub word: String,
    pub syllables: Vec<String>,
    /// Contada a partir do fim; `None` apenas para palavra vazia.
    pub tonic: Option<TonicPosition>,
    pub tonic_syllable: Option<String>,
    pub stress: Option<StressClass>,
    pub rule: Option<TonicRule>,
    pub steps: Vec<SegmentStep>,
}

impl WordAnalysis {
    /// Sílabas unidas por hífen (ex: "de-va-gar").
    pub fn hyphenated(&self) -> String {
        self.syllables.join("-")
    }
}

/// Eventos emitidos durante o processamento de uma palavra.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PipelineEvent {
    /// **Passo 1**: palavra normalizada em unidades atômicas (dígrafos agrupados).
    Normalized { word: String, units: Vec<String> },
    /// **Passo 2**: uma iteração da máquina de estados fechou uma sílaba.
    SyllableFormed { index: usize, step: SegmentStep },
    /// **Passo 3**: tônica localizada.
    TonicLocated { decision: Option<TonicDecision> },
    /// **Fim**: análise consolidada.
    Done { analysis: WordAnalysis },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyllablePipeline {
    segmenter: Segmenter,
}

impl SyllablePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hiatus(hiatus: HiatusPolicy) -> Self {
        Self {
            segmenter: Segmenter::new(hiatus),
        }
    }

    pub fn segmenter(&self) -> Segmenter {
        self.segmenter
    }

    pub fn analyze(&self, word: &str) -> WordAnalysis {
        let word = Word::new(word);
        let segmentation = self.segmenter.trace(word.as_str());
        let decision = tonic::locate(&segmentation.syllables);

        let tonic_syllable = decision.and_then(|d| {
            let from_start = segmentation.syllables.len().checked_sub(d.position.get())?;
            segmentation.syllables.get(from_start).cloned()
        });

        WordAnalysis {
            word: word.to_string(),
            tonic: decision.map(|d| d.position),
            tonic_syllable,
            stress: decision.map(|d| d.position.stress_class()),
            rule: decision.map(|d| d.rule),
            syllables: segmentation.syllables,
            steps: segmentation.steps,
        }
    }

    /// Como [`analyze`](Self::analyze), emitindo um [`PipelineEvent`] por etapa.
    /// Um receptor desconectado não interrompe a análise.
    pub fn analyze_streaming(&self, word: &str, tx: mpsc::Sender<PipelineEvent>) -> WordAnalysis {
        let analysis = self.analyze(word);

        let mut units = Vec::new();
        for (n, part) in analysis.word.split('-').enumerate() {
            if n > 0 {
                units.push("-".to_string());
            }
            units.extend(normalize(part).units().iter().map(|u| u.text().to_string()));
        }
        tx.send(PipelineEvent::Normalized {
            word: analysis.word.clone(),
            units,
        })
        .ok();

        for (index, step) in analysis.steps.iter().enumerate() {
            tx.send(PipelineEvent::SyllableFormed {
                index,
                step: step.clone(),
            })
            .ok();
        }

        let decision = analysis
            .tonic
            .zip(analysis.rule)
            .map(|(position, rule)| TonicDecision { position, rule });
        tx.send(PipelineEvent::TonicLocated { decision }).ok();
        tx.send(PipelineEvent::Done {
            analysis: analysis.clone(),
        })
        .ok();

        analysis
    }
}

/// Analisa uma palavra com a política de hiato padrão.
pub fn analyze(word: &str) -> WordAnalysis {
    SyllablePipeline::new().analyze(word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::CodaDecision;

    #[test]
    fn test_analyze_basic() {
        let analysis = analyze("Devagar");
        assert_eq!(analysis.word, "devagar");
        assert_eq!(analysis.hyphenated(), "de-va-gar");
        assert_eq!(analysis.tonic, Some(TonicPosition::LAST));
        assert_eq!(analysis.tonic_syllable.as_deref(), Some("gar"));
        assert_eq!(analysis.stress, Some(StressClass::Oxitona));
        assert_eq!(analysis.rule, Some(TonicRule::FinalSuffix));
        assert_eq!(analysis.steps.len(), 3);
    }

    #[test]
    fn test_analyze_proparoxytone() {
        let analysis = analyze("psicólogo");
        assert_eq!(analysis.tonic_syllable.as_deref(), Some("có"));
        assert_eq!(analysis.stress.map(|s| s.name()), Some("proparoxítona"));
    }

    #[test]
    fn test_analyze_empty() {
        let analysis = analyze("");
        assert!(analysis.syllables.is_empty());
        assert_eq!(analysis.tonic, None);
        assert_eq!(analysis.tonic_syllable, None);
    }

    #[test]
    fn test_hiatus_policy() {
        let pipeline = SyllablePipeline::with_hiatus(HiatusPolicy::MaximalNucleus);
        assert_eq!(pipeline.analyze("saúde").syllables, vec!["saú", "de"]);
        assert_eq!(pipeline.segmenter().hiatus(), HiatusPolicy::MaximalNucleus);
    }

    #[test]
    fn test_pipeline_events_streaming() {
        let pipeline = SyllablePipeline::new();
        let (tx, rx) = mpsc::channel();
        let analysis = pipeline.analyze_streaming("carro", tx);

        let events: Vec<PipelineEvent> = rx.try_iter().collect();
        // Normalized + 2 sílabas + TonicLocated + Done
        assert_eq!(events.len(), 5);

        match &events[0] {
            PipelineEvent::Normalized { units, .. } => assert_eq!(units, &vec!["c", "a", "rr", "o"]),
            other => panic!("evento inesperado: {other:?}"),
        }
        match &events[1] {
            PipelineEvent::SyllableFormed { step, .. } => {
                assert_eq!(step.decision, CodaDecision::SplitDoubled)
            }
            other => panic!("evento inesperado: {other:?}"),
        }
        match &events[4] {
            PipelineEvent::Done { analysis: done } => assert_eq!(done, &analysis),
            other => panic!("evento inesperado: {other:?}"),
        }
    }

    #[test]
    fn test_streaming_hyphenated_units() {
        let (tx, rx) = mpsc::channel();
        SyllablePipeline::new().analyze_streaming("guarda-chuva", tx);
        match rx.try_iter().next() {
            Some(PipelineEvent::Normalized { units, .. }) => {
                assert!(units.contains(&"-".to_string()));
                assert!(units.contains(&"gu".to_string()));
                assert!(units.contains(&"ch".to_string()));
            }
            other => panic!("evento inesperado: {other:?}"),
        }
    }

    #[test]
    fn test_streaming_without_receiver() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let analysis = SyllablePipeline::new().analyze_streaming("casa", tx);
        assert_eq!(analysis.syllables, vec!["ca", "sa"]);
    }
}
