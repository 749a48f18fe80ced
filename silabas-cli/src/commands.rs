//! Implementação dos comandos

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use silabas_core::{
    corpus, dictionary, report, HiatusPolicy, RawEntry, Syllabify, SyllablePipeline,
    ValidationConfig, ValidationSummary, Validator, WordAnalysis,
};
use tracing::info;

use crate::args::Commands;
use crate::external::ExternalPredictor;

const RULE: &str = "───────────────────────────────────";

pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Analyze {
            word,
            tonic,
            syllable,
            full,
            json,
            hiatus,
        } => cmd_analyze(&word, tonic, syllable, full, json, hiatus),
        Commands::Compare {
            dictionary,
            report,
            incorrect,
            config,
            workers,
            hiatus,
            external,
            json,
        } => {
            let config = load_config(config.as_deref(), workers, hiatus)?;
            cmd_compare(&dictionary, &report, &incorrect, config, external.as_deref(), json)
        }
        Commands::Demo { hiatus } => cmd_demo(hiatus),
    }
}

fn cmd_analyze(
    word: &str,
    only_tonic: bool,
    only_syllable: bool,
    full: bool,
    json: bool,
    hiatus: HiatusPolicy,
) -> Result<()> {
    let analysis = SyllablePipeline::with_hiatus(hiatus).analyze(word);
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }
    // Sem filtro, mostra as duas coisas
    let show_syllables = only_syllable || !only_tonic;
    let show_tonic = only_tonic || !only_syllable;

    if full {
        print!("{}", render_full(&analysis, show_syllables, show_tonic));
        return Ok(());
    }
    if show_syllables {
        println!("{}", analysis.hyphenated());
    }
    if show_tonic {
        match analysis.tonic {
            Some(position) => println!("{position}"),
            None => println!("-"),
        }
    }
    Ok(())
}

fn render_full(analysis: &WordAnalysis, show_syllables: bool, show_tonic: bool) -> String {
    let mut out = String::new();
    out.push_str("┌───────────────────────────────────┐\n");
    out.push_str("│         Análise de palavra        │\n");
    out.push_str("└───────────────────────────────────┘\n");
    out.push_str(&format!("Palavra: {}\n{RULE}\n", analysis.word));
    if show_syllables {
        out.push_str(&format!("Sílabas: {}\n", analysis.syllables.join(" - ")));
    }
    if show_tonic {
        match (analysis.tonic, &analysis.tonic_syllable, analysis.stress) {
            (Some(position), Some(syllable), Some(stress)) => out.push_str(&format!(
                "Sílaba tônica: '{syllable}' ({} #{position})\n",
                stress.name()
            )),
            _ => out.push_str("Sílaba tônica: (nenhuma)\n"),
        }
    }
    out.push_str(RULE);
    out.push_str("\n\n");
    out
}

/// Arquivo de configuração (se houver) com as flags por cima.
fn load_config(
    path: Option<&Path>,
    workers: Option<usize>,
    hiatus: Option<HiatusPolicy>,
) -> Result<ValidationConfig> {
    let mut config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("não foi possível ler {}", path.display()))?;
            ValidationConfig::from_json_str(&text)?
        }
        None => ValidationConfig::default(),
    };
    if let Some(workers) = workers {
        config = config.with_workers(workers);
    }
    if let Some(hiatus) = hiatus {
        config = config.with_hiatus(hiatus);
    }
    config.validate()?;
    Ok(config)
}

fn cmd_compare(
    dictionary_path: &Path,
    report_path: &Path,
    incorrect_path: &Path,
    config: ValidationConfig,
    external: Option<&str>,
    json_path: Option<PathBuf>,
) -> Result<()> {
    let file = fs::File::open(dictionary_path)
        .with_context(|| format!("não foi possível abrir {}", dictionary_path.display()))?;
    let entries = dictionary::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("dicionário inválido: {}", dictionary_path.display()))?;
    info!(entries = entries.len(), path = %dictionary_path.display(), "dicionário carregado");

    let summary = match external {
        Some(command) => {
            let predictor = ExternalPredictor::parse(command)?;
            run(predictor, config.worker_count(), &entries)?
        }
        None => run(config.segmenter(), config.worker_count(), &entries)?,
    };

    fs::write(report_path, report::render_text(&summary))
        .with_context(|| format!("não foi possível gravar {}", report_path.display()))?;
    fs::write(incorrect_path, report::render_incorrect_words(&summary))
        .with_context(|| format!("não foi possível gravar {}", incorrect_path.display()))?;
    if let Some(path) = json_path {
        fs::write(&path, serde_json::to_string_pretty(&summary)?)
            .with_context(|| format!("não foi possível gravar {}", path.display()))?;
    }

    print_totals(&summary);
    println!("Relatório gravado em {}", report_path.display());
    println!("Palavras erradas gravadas em {}", incorrect_path.display());
    Ok(())
}

fn run<P: Syllabify>(predictor: P, workers: usize, entries: &[RawEntry]) -> Result<ValidationSummary> {
    Ok(Validator::with_predictor(predictor, workers).run(entries)?)
}

fn cmd_demo(hiatus: HiatusPolicy) -> Result<()> {
    let config = ValidationConfig::default().with_hiatus(hiatus);
    let summary = Validator::from_config(&config)?.run(&corpus::reference_dictionary())?;
    print!("{}", report::render_text(&summary));
    Ok(())
}

fn print_totals(summary: &ValidationSummary) {
    println!("Entradas válidas: {} (ignoradas: {})", summary.total_valid, summary.skipped);
    println!(
        "Separação silábica: {:.2}% | Sílaba tônica: {:.2}%",
        summary.syllabification_accuracy(),
        summary.tonic_accuracy()
    );
}
