mod wire;

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mot_eval_core::{validate, EvaluatorConfig, MotEvaluator, OutcomeClass};

use wire::WireSet;

/// Computes CLEAR MOT metrics (MOTA, MOTP) and track-coverage counts
/// from a ground-truth JSON file and a hypothesis JSON file.
#[derive(Parser, Debug)]
#[command(name = "mot-eval", version, about)]
struct Cli {
    /// Path to the ground-truth annotations JSON file.
    annotations: PathBuf,

    /// Path to the hypothesis (tracker output) JSON file.
    hypotheses: PathBuf,

    /// Minimum IoU for a ground-truth/hypothesis pair to correspond.
    #[arg(long, default_value_t = mot_eval_core::EvaluatorConfig::default().overlap_threshold)]
    overlap_threshold: f64,

    /// Maximum timestamp gap for a hypothesis frame to be treated as
    /// synchronized with a ground-truth frame.
    #[arg(long, default_value_t = mot_eval_core::EvaluatorConfig::default().sync_delta)]
    sync_delta: f64,

    /// Cost sentinel marking a ground-truth/hypothesis pair the
    /// assignment solver must never propose as a real correspondence.
    #[arg(long, default_value_t = mot_eval_core::EvaluatorConfig::default().forbidden_cost)]
    forbidden_cost: f64,

    /// Print the per-frame classification breakdown in addition to the
    /// summary metrics.
    #[arg(long)]
    debug: bool,
}

fn load_wire_set(path: &PathBuf) -> Result<WireSet, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let annotations_wire = load_wire_set(&cli.annotations)?;
    let hypotheses_wire = load_wire_set(&cli.hypotheses)?;

    let annotations = wire::into_annotation_set(annotations_wire)?;
    let hypotheses = wire::into_hypothesis_set(hypotheses_wire)?;

    let (annotations_ok, hypotheses_ok) = validate(&annotations, &hypotheses);
    if !annotations_ok {
        log::warn!("ground-truth file {} contains ambiguous ids", annotations.filename);
    }
    if !hypotheses_ok {
        log::warn!("hypothesis file {} contains ambiguous ids", hypotheses.filename);
    }

    let config = EvaluatorConfig {
        overlap_threshold: cli.overlap_threshold,
        sync_delta: cli.sync_delta,
        forbidden_cost: cli.forbidden_cost,
        debug_enabled: cli.debug,
    };

    let mut evaluator = MotEvaluator::new(annotations, hypotheses, config);
    evaluator.evaluate()?;

    print_results(&evaluator);
    if cli.debug {
        print_frame_breakdown(&evaluator);
    }

    Ok(())
}

fn print_results(evaluator: &MotEvaluator) {
    let stats = evaluator.statistics();
    println!("False negatives:    {}", stats.false_negatives());
    println!("False positives:    {}", stats.false_positives());
    println!("Identity switches:  {}", stats.identity_switches());
    println!("Ground truths:      {}", stats.total_annotations());
    println!("Correspondences:    {}", stats.correspondences());
    println!();

    match stats.mota() {
        Ok(mota) => println!("MOTA: {mota:.4}"),
        Err(err) => println!("MOTA: n/a ({err})"),
    }
    match stats.motp() {
        Ok(motp) => println!("MOTP: {motp:.4}"),
        Err(err) => println!("MOTP: n/a ({err})"),
    }
    println!();

    println!(
        "Annotation tracks:  {} total, {} covered, {} lonely",
        stats.annotation_tracks(),
        stats.covered_annotation_tracks(),
        stats.lonely_annotation_tracks()
    );
    println!(
        "Hypothesis tracks:  {} total, {} covered, {} lonely",
        stats.hypothesis_tracks(),
        stats.covered_hypothesis_tracks(),
        stats.lonely_hypothesis_tracks()
    );
    println!("Tracking recall:    {:.4}", stats.tracking_recall());
    println!("Tracking precision: {:.4}", stats.tracking_precision());
}

fn print_frame_breakdown(evaluator: &MotEvaluator) {
    println!();
    println!("Per-frame classification:");
    for frame in evaluator.debug_frames() {
        println!("  t={:.3} ({} objects):", frame.timestamp, frame.classified.len());
        for classified in &frame.classified {
            let label = match classified.outcome {
                OutcomeClass::Correspondence => "correspondence",
                OutcomeClass::Miss => "miss",
                OutcomeClass::FalsePositive => "false positive",
                OutcomeClass::IdentitySwitch => "identity switch",
            };
            println!("    {} -> {}", classified.object.id, label);
        }
    }
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
