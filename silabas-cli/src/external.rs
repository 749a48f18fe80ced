//! Preditor em processo externo: executa um programa por palavra e lê as
//! sílabas da saída padrão (`de-va-gar`, `de@va@gar` ou `de·va·gar`).

use std::process::Command;

use anyhow::{bail, Result};
use silabas_core::Syllabify;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ExternalPredictor {
    program: String,
    args: Vec<String>,
}

impl ExternalPredictor {
    /// `command` é dividido por espaços; a palavra é acrescentada como último argumento.
    pub fn parse(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(String::from);
        let Some(program) = parts.next() else {
            bail!("comando externo vazio");
        };
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl Syllabify for ExternalPredictor {
    fn syllabify(&self, word: &str) -> Option<Vec<String>> {
        let output = match Command::new(&self.program).args(&self.args).arg(word).output() {
            Ok(output) => output,
            Err(e) => {
                debug!(program = %self.program, word, "falha ao iniciar o processo: {e}");
                return None;
            }
        };
        if !output.status.success() {
            debug!(program = %self.program, word, status = %output.status, "processo terminou com erro");
            return None;
        }
        let stdout = String::from_utf8(output.stdout).ok()?;
        parse_output(&stdout)
    }
}

/// Primeira linha não vazia da saída, dividida nos separadores aceitos.
fn parse_output(stdout: &str) -> Option<Vec<String>> {
    let line = stdout.lines().map(str::trim).find(|l| !l.is_empty())?;
    let syllables: Vec<String> = line
        .split(['-', '@', '·'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    (!syllables.is_empty()).then_some(syllables)
}
