//! Relatório textual de uma execução do harness.

use crate::harness::{Diagnostic, ValidationSummary};

const TITLE: &str = "RELATÓRIO DE SEPARAÇÃO SILÁBICA E SÍLABA TÔNICA";

pub fn render_text(summary: &ValidationSummary) -> String {
    let mut out = String::new();

    heading(&mut out, TITLE);
    out.push_str(&format!("Entradas no dicionário: {}\n", summary.total_entries));
    out.push_str(&format!("Entradas válidas processadas: {}\n", summary.total_valid));
    out.push_str(&format!("Entradas ignoradas (malformadas): {}\n", summary.skipped));
    out.push_str(&format!(
        "Acurácia da separação silábica: {:.2}% ({}/{})\n",
        summary.syllabification_accuracy(),
        summary.syllabification_correct,
        summary.total_valid
    ));
    out.push_str(&format!(
        "Acurácia da sílaba tônica: {:.2}% ({}/{})\n\n",
        summary.tonic_accuracy(),
        summary.tonic_correct,
        summary.total_valid
    ));

    heading(&mut out, "RESUMO DOS ERROS");
    let malformed = summary.diagnostics.iter().filter(|d| d.is_malformed()).count();
    out.push_str(&format!("Total de diagnósticos: {}\n", summary.diagnostics.len()));
    out.push_str(&format!("Entradas malformadas: {malformed}\n"));
    out.push_str(&format!(
        "Predições divergentes: {}\n\n",
        summary.diagnostics.len() - malformed
    ));

    if summary.diagnostics.is_empty() {
        return out;
    }

    heading(&mut out, "ANÁLISE DETALHADA DOS ERROS");
    for (n, diagnostic) in summary.diagnostics.iter().enumerate() {
        out.push_str(&detail(n + 1, diagnostic));
        out.push('\n');
    }
    out
}

/// Uma palavra por linha, na ordem do dicionário.
pub fn render_incorrect_words(summary: &ValidationSummary) -> String {
    summary
        .incorrect_words()
        .iter()
        .map(|w| format!("{w}\n"))
        .collect()
}

fn heading(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push_str("\n\n");
}

fn detail(n: usize, diagnostic: &Diagnostic) -> String {
    match diagnostic {
        Diagnostic::Malformed { .. } => format!("{n}. {}\n", diagnostic.message()),
        Diagnostic::Mismatch {
            word,
            expected_syllables,
            predicted_syllables,
            expected_tonic,
            predicted_tonic,
            tonic_rule,
            ..
        } => {
            let predicted = predicted_syllables
                .as_ref()
                .map(|s| s.join("-"))
                .unwrap_or_else(|| "(falhou)".to_string());
            let tonic = match (predicted_tonic, tonic_rule) {
                (Some(t), Some(rule)) => format!("{t} ({})", rule.name()),
                (Some(t), None) => t.to_string(),
                _ => "(não avaliada)".to_string(),
            };
            format!(
                "{n}. Palavra: {word}\n   Sílabas esperadas: {}\n   Sílabas obtidas: {predicted}\n   Tônica esperada: {expected_tonic}\n   Tônica obtida: {tonic}\n   Erro: {}\n",
                expected_syllables.join("-"),
                diagnostic.message()
            )
        }
    }
}
