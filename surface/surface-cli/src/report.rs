//! Human-readable terminal report.

use owo_colors::OwoColorize;
use surface_eval::{BatchReport, CaseReport, ConfusionMatrix, MeanAccumulator};

const RULE: &str = "════════════════════════════════════════════════════════════";

/// Formats a metric, spelling out the non-finite cases.
fn value(v: f64) -> String {
    if v.is_nan() {
        "n/a".to_string()
    } else if v.is_infinite() {
        "inf".to_string()
    } else {
        format!("{v:.4}")
    }
}

/// Colours a score in `[0, 1]` by how close it is to 1.
fn score(v: f64) -> String {
    let text = value(v);
    if v.is_nan() {
        text.cyan().to_string()
    } else if v >= 0.9 {
        text.green().bold().to_string()
    } else if v >= 0.7 {
        text.yellow().bold().to_string()
    } else {
        text.red().bold().to_string()
    }
}

fn distance(v: f64) -> String {
    if v.is_finite() {
        format!("{} mm", value(v))
    } else {
        value(v).red().to_string()
    }
}

fn mean(acc: &MeanAccumulator) -> String {
    format!("{} ({} cases)", value(acc.mean()), acc.count())
}

pub fn print_case(case: &CaseReport) {
    let m = &case.metrics;
    let s = case.spacing.as_array();
    println!();
    println!("{}", format!("Case {}", case.name).bright_white().bold());
    println!("  GT:   {}", case.pair.gt.display());
    println!("  Pred: {}", case.pair.pred.display());
    println!("  spacing:                  {} x {} x {} mm", s[0], s[1], s[2]);
    println!(
        "  surfels (gt / pred):      {} / {}",
        m.surfels_gt, m.surfels_pred
    );
    println!(
        "  average surface distance: {} / {}",
        distance(m.average_distance_gt_to_pred),
        distance(m.average_distance_pred_to_gt)
    );
    println!("  hausdorff (100%):         {}", distance(m.hausdorff_100));
    println!("  hausdorff (robust):       {}", distance(m.hausdorff_robust));
    println!(
        "  surface overlap:          {} / {}",
        score(m.surface_overlap_gt),
        score(m.surface_overlap_pred)
    );
    println!("  surface dice:             {}", score(m.surface_dice));
    println!("  volumetric dice:          {}", score(m.volumetric_dice));
}

fn print_confusion(cm: &ConfusionMatrix) {
    println!(
        "  TN, FP, FN, TP:           {}, {}, {}, {}",
        cm.true_negatives, cm.false_positives, cm.false_negatives, cm.true_positives
    );
    println!("  sensitivity:              {}", score(cm.sensitivity()));
    println!("  specificity:              {}", score(cm.specificity()));
    println!("  precision:                {}", score(cm.precision()));
    println!("  F1:                       {}", score(cm.f1()));

    let roc = cm.roc_curve();
    println!("  AUC:                      {}", score(roc.auc()));
    println!(
        "  FPR / TPR:                {:?} / {:?}",
        roc.fpr.iter().map(|&v| value(v)).collect::<Vec<_>>(),
        roc.tpr.iter().map(|&v| value(v)).collect::<Vec<_>>()
    );
}

pub fn print_batch(batch: &BatchReport) {
    let summary = &batch.summary;
    println!();
    println!("{}", RULE.bright_white().bold());
    println!(
        "{}",
        format!("{:^60}", format!("SUMMARY: {} cases", summary.cases))
            .bright_white()
            .bold()
    );
    println!("{}", RULE.bright_white().bold());
    println!("  mean volumetric dice:     {}", mean(&summary.volumetric_dice));
    println!("  mean surface dice:        {}", mean(&summary.surface_dice));
    println!("  mean hausdorff (100%):    {}", mean(&summary.hausdorff_100));
    println!("  mean hausdorff (robust):  {}", mean(&summary.hausdorff_robust));
    print_confusion(&batch.confusion);

    if !batch.skipped.is_empty() {
        println!();
        println!(
            "{}",
            format!("Skipped {} case(s):", batch.skipped.len()).yellow().bold()
        );
        for skipped in &batch.skipped {
            println!("  {}: {}", skipped.pair.gt.display(), skipped.reason);
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_formatting() {
        assert_eq!(value(0.5), "0.5000");
        assert_eq!(value(f64::NAN), "n/a");
        assert_eq!(value(f64::INFINITY), "inf");
    }

    #[test]
    fn test_mean_includes_count() {
        let mut acc = MeanAccumulator::default();
        acc.push(1.0);
        acc.push(2.0);
        assert_eq!(mean(&acc), "1.5000 (2 cases)");
        assert_eq!(mean(&MeanAccumulator::default()), "n/a (0 cases)");
    }

    #[test]
    fn test_score_keeps_text() {
        assert!(score(0.95).contains("0.9500"));
        assert!(score(0.1).contains("0.1000"));
        assert!(score(f64::NAN).contains("n/a"));
    }
}
