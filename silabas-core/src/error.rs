//! Modelo unificado de erros do crate
use thiserror::Error;

/// Erros fatais de uma execução. Falhas de uma única entrada do dicionário
/// nunca chegam aqui: viram diagnósticos ([`crate::harness::Diagnostic`]).
#[derive(Error, Debug)]
pub enum SilabasError {
    #[error("DICTIONARY/{0}")]
    Dictionary(#[from] serde_json::Error),

    #[error("CONFIG/{0}")]
    Config(String),

    #[error("POOL/{0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, SilabasError>;
