//! # silabas-core — Separação Silábica e Sílaba Tônica do Português
//!
//! Este crate implementa um separador silábico determinístico para palavras em
//! Português, um localizador heurístico da sílaba tônica e um harness que mede
//! a acurácia de ambos contra um dicionário de referência.
//!
//! ## Arquitetura do Sistema
//!
//! 1.  **Entrada**: uma palavra (String).
//! 2.  **Normalização** ([`normalizer`]): minúsculas, NFC e dígrafos (`ch`, `lh`, `nh`,
//!     `gu`, `qu`, `rr`, `ss`) agrupados em unidades atômicas.
//! 3.  **Segmentação** ([`segmenter`]): máquina de estados ataque → núcleo → coda.
//! 4.  **Tônica** ([`tonic`]): regras de acentuação contadas a partir do fim.
//! 5.  **Validação** ([`harness`]): compara as predições com o dicionário ([`dictionary`])
//!     em um pool de workers e produz diagnósticos e o relatório ([`report`]).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use silabas_core::{analyze, segment, tonic};
//!
//! assert_eq!(segment("perspectiva"), vec!["pers", "pec", "ti", "va"]);
//! assert_eq!(tonic(&["ca", "fé"]).map(|t| t.get()), Some(1));
//!
//! let analysis = analyze("guarda-chuva");
//! assert_eq!(analysis.hyphenated(), "guar-da-chu-va");
//! assert_eq!(analysis.tonic_syllable.as_deref(), Some("chu"));
//! ```
//!
//! ## Módulos Principais
//!
//! - [`pipeline`]: orquestrador de uma palavra, com eventos por etapa.
//! - [`harness`]: validação em lote contra o dicionário.
//! - [`corpus`]: palavras de referência para demonstração e testes.

pub mod alphabet;
pub mod config;
pub mod corpus;
pub mod dictionary;
pub mod error;
pub mod harness;
pub mod normalizer;
pub mod pipeline;
pub mod report;
pub mod segmenter;
pub mod tonic;

pub use config::ValidationConfig;
pub use dictionary::{DictionaryEntry, MalformedEntry, RawEntry};
pub use error::{Result, SilabasError};
pub use harness::{Diagnostic, PredictionResult, Syllabify, ValidationSummary, Validator};
pub use pipeline::{analyze, SyllablePipeline, WordAnalysis};
pub use segmenter::{segment, HiatusPolicy, Segmenter};
pub use tonic::{tonic, StressClass, TonicPosition, TonicRule};
