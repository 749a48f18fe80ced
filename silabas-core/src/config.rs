//! # Configuração da Validação
//!
//! Lida de um arquivo JSON (todas as chaves opcionais):
//!
//! ```json
//! { "workers": 8, "hiatus": "strong_accent_or_repeated" }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SilabasError};
use crate::segmenter::{HiatusPolicy, Segmenter};

/// Número de workers usado quando o sistema não informa o paralelismo disponível.
const FALLBACK_WORKERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Tamanho do pool de workers. `None` = paralelismo do hardware.
    pub workers: Option<usize>,
    /// Política de hiato do segmentador.
    pub hiatus: HiatusPolicy,
}

impl ValidationConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SilabasError::Config(format!("arquivo de configuração inválido: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == Some(0) {
            return Err(SilabasError::Config("workers deve ser pelo menos 1".to_string()));
        }
        Ok(())
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_hiatus(mut self, hiatus: HiatusPolicy) -> Self {
        self.hiatus = hiatus;
        self
    }

    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(FALLBACK_WORKERS)
        })
    }

    pub fn segmenter(&self) -> Segmenter {
        Segmenter::new(self.hiatus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidationConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ValidationConfig::default());
        assert_eq!(config.hiatus, HiatusPolicy::StrongAccent);
        assert!(config.worker_count() >= 1);
    }

    #[test]
    fn test_from_json() {
        let config =
            ValidationConfig::from_json_str(r#"{"workers": 3, "hiatus": "maximal_nucleus"}"#).unwrap();
        assert_eq!(config.worker_count(), 3);
        assert_eq!(config.segmenter().hiatus(), HiatusPolicy::MaximalNucleus);
    }

    #[test]
    fn test_rejects_zero_workers() {
        let err = ValidationConfig::from_json_str(r#"{"workers": 0}"#).unwrap_err();
        assert!(matches!(err, SilabasError::Config(_)));
        assert!(err.to_string().starts_with("CONFIG/"));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(ValidationConfig::from_json_str(r#"{"threads": 2}"#).is_err());
    }

    #[test]
    fn test_builders() {
        let config = ValidationConfig::default()
            .with_workers(2)
            .with_hiatus(HiatusPolicy::StrongAccentOrRepeated);
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.hiatus, HiatusPolicy::StrongAccentOrRepeated);
    }
}
