//! # Dicionário de Referência
//!
//! Decodifica o formato JSON do dicionário:
//!
//! ```json
//! [{ "word": "devagar", "description": "...", "syllables": ["de", "va", "gar"], "tonic": 1 }]
//! ```
//!
//! Todos os campos de [`RawEntry`] são opcionais e cada elemento do array é
//! decodificado separadamente: uma entrada incompleta ou com um campo de tipo
//! errado não impede a leitura do arquivo. A validação acontece depois,
//! entrada por entrada, em [`RawEntry::validate`]. Só um arquivo que não é um
//! array JSON é um erro fatal.

use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::error::Result;
use crate::normalizer::Word;
use crate::tonic::TonicPosition;

/// Entrada como aparece no arquivo, possivelmente malformada.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub syllables: Option<Vec<String>>,
    /// O extrator grava -1 quando não encontrou a tônica.
    #[serde(default)]
    pub tonic: Option<i64>,
    /// Falha ao decodificar o elemento (campo com tipo errado).
    #[serde(skip)]
    pub decode_error: Option<String>,
}

/// Entrada validada: palavra, separação e tônica de referência.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: Word,
    pub syllables: Vec<String>,
    pub tonic: TonicPosition,
}

/// Motivo pelo qual uma entrada foi descartada.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum MalformedEntry {
    #[error("campo 'word' ausente ou vazio")]
    MissingWord,
    #[error("campo 'syllables' ausente ou vazio")]
    MissingSyllables,
    #[error("campo 'tonic' ausente")]
    MissingTonic,
    #[error("tônica inválida: {value}")]
    InvalidTonic { value: i64 },
    #[error("campo com tipo inválido: {detail}")]
    InvalidField { detail: String },
}

impl RawEntry {
    pub fn new(word: &str, syllables: &[&str], tonic: i64) -> Self {
        Self {
            word: Some(word.to_string()),
            description: None,
            syllables: Some(syllables.iter().map(|s| s.to_string()).collect()),
            tonic: Some(tonic),
            decode_error: None,
        }
    }

    /// Decodifica um elemento do array. Um elemento com tipo errado vira uma
    /// entrada que falha em [`validate`](Self::validate), guardando a palavra
    /// quando ela é legível.
    pub fn from_value(value: Value) -> Self {
        let word = value.get("word").and_then(Value::as_str).map(String::from);
        match serde_json::from_value::<RawEntry>(value) {
            Ok(entry) => entry,
            Err(e) => {
                debug!(word = ?word, "elemento do dicionário não decodificado: {e}");
                RawEntry {
                    word,
                    decode_error: Some(e.to_string()),
                    ..Default::default()
                }
            }
        }
    }

    pub fn validate(&self) -> std::result::Result<DictionaryEntry, MalformedEntry> {
        if let Some(detail) = &self.decode_error {
            return Err(MalformedEntry::InvalidField {
                detail: detail.clone(),
            });
        }
        let word = self
            .word
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .ok_or(MalformedEntry::MissingWord)?;
        let syllables = self
            .syllables
            .as_ref()
            .filter(|s| !s.is_empty())
            .ok_or(MalformedEntry::MissingSyllables)?;
        let value = self.tonic.ok_or(MalformedEntry::MissingTonic)?;
        let tonic = usize::try_from(value)
            .ok()
            .and_then(TonicPosition::new)
            .ok_or(MalformedEntry::InvalidTonic { value })?;

        Ok(DictionaryEntry {
            word: Word::new(word),
            syllables: syllables.clone(),
            tonic,
        })
    }
}

pub fn from_json_str(json: &str) -> Result<Vec<RawEntry>> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    Ok(values.into_iter().map(RawEntry::from_value).collect())
}

pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RawEntry>> {
    let values: Vec<Value> = serde_json::from_reader(reader)?;
    Ok(values.into_iter().map(RawEntry::from_value).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SilabasError;

    #[test]
    fn test_decode_full_entry() {
        let json = r#"[{"word": "Devagar", "description": "adv. lentamente",
                        "syllables": ["de", "va", "gar"], "tonic": 1}]"#;
        let entries = from_json_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description.as_deref(), Some("adv. lentamente"));

        let entry = entries[0].validate().unwrap();
        assert_eq!(entry.word.as_str(), "devagar");
        assert_eq!(entry.syllables, vec!["de", "va", "gar"]);
        assert_eq!(entry.tonic, TonicPosition::LAST);
    }

    #[test]
    fn test_decode_partial_entries() {
        let json = r#"[{"word": "casa"}, {"syllables": ["ca", "sa"], "tonic": 2}, {}]"#;
        let entries = from_json_str(json).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].validate(), Err(MalformedEntry::MissingSyllables));
        assert_eq!(entries[1].validate(), Err(MalformedEntry::MissingWord));
        assert_eq!(entries[2].validate(), Err(MalformedEntry::MissingWord));
    }

    #[test]
    fn test_missing_or_invalid_tonic() {
        let mut entry = RawEntry::new("casa", &["ca", "sa"], 2);
        entry.tonic = None;
        assert_eq!(entry.validate(), Err(MalformedEntry::MissingTonic));
        assert_eq!(
            RawEntry::new("casa", &["ca", "sa"], -1).validate(),
            Err(MalformedEntry::InvalidTonic { value: -1 })
        );
        assert_eq!(
            RawEntry::new("casa", &["ca", "sa"], 0).validate(),
            Err(MalformedEntry::InvalidTonic { value: 0 })
        );
    }

    #[test]
    fn test_empty_fields_are_absent() {
        assert_eq!(
            RawEntry::new("   ", &["ca"], 1).validate(),
            Err(MalformedEntry::MissingWord)
        );
        assert_eq!(
            RawEntry::new("casa", &[], 1).validate(),
            Err(MalformedEntry::MissingSyllables)
        );
    }

    #[test]
    fn test_wrongly_typed_fields_are_isolated() {
        let json = r#"[
            {"word": "casa", "syllables": ["ca", "sa"], "tonic": 2},
            {"word": "mar", "syllables": ["mar"], "tonic": "1"},
            {"word": "sol", "syllables": ["sol"], "tonic": 1.0},
            {"word": 5, "syllables": ["x"], "tonic": 1},
            "solto"
        ]"#;
        let entries = from_json_str(json).unwrap();
        assert_eq!(entries.len(), 5);
        assert!(entries[0].validate().is_ok());
        assert_eq!(entries[1].word.as_deref(), Some("mar"));
        for entry in &entries[1..] {
            assert!(matches!(entry.validate(), Err(MalformedEntry::InvalidField { .. })));
        }
        assert_eq!(entries[3].word, None);
    }

    #[test]
    fn test_from_reader() {
        let json = br#"[{"word": "mar", "syllables": ["mar"], "tonic": 1}]"#;
        let entries = from_reader(&json[..]).unwrap();
        assert!(entries[0].validate().is_ok());
    }

    #[test]
    fn test_invalid_json_is_fatal() {
        let err = from_json_str("{not json").unwrap_err();
        assert!(matches!(err, SilabasError::Dictionary(_)));
        assert!(err.to_string().starts_with("DICTIONARY/"));
    }

    #[test]
    fn test_malformed_serializes_with_reason() {
        let json = serde_json::to_value(MalformedEntry::InvalidTonic { value: -1 }).unwrap();
        assert_eq!(json["reason"], "invalid_tonic");
        assert_eq!(json["value"], -1);
    }
}
