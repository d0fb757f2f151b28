//! Precision-recall curves of the best and worst ranked classes

use crate::config::VizConfig;
use crate::eval::ranking::{class_curve, rank_classes, RankError};
use crate::io::{read_pr_samples, split_samples, ArtifactKind, PrSample};
use crate::render::{Chart, ChartSink, Curve, CurveChart};
use crate::Result;

use super::charts::PR_FIGSIZE;
use super::{artifact_dirs, render_dir, BatchReport};

/// Curves of the `top_k` best and worst classes, each class drawn once.
///
/// Best classes come first, highest AUC last among them, then the worst
/// classes from lowest AUC up.
pub fn pr_chart(samples: &[PrSample], top_k: usize) -> std::result::Result<CurveChart, RankError> {
    let (labels, scores) = split_samples(samples);
    let ranking = rank_classes(&labels, &scores)?;

    let curves = ranking
        .select(top_k)
        .distinct()
        .into_iter()
        .map(|class| {
            let curve = class_curve(&labels, &scores, class.class_label)?;
            Ok(Curve {
                label: format!("Class {} (AUC={:.2})", class.class_label, class.auc),
                points: curve.points().collect(),
            })
        })
        .collect::<std::result::Result<Vec<_>, RankError>>()?;

    Ok(CurveChart {
        title: "Précision/Rappel - Classes avec AUC Extrêmes".to_string(),
        x_label: "Rappel".to_string(),
        y_label: "Précision".to_string(),
        curves,
        figsize: PR_FIGSIZE,
    })
}

/// Render `<sub>/precision_recall_data/*_pr_data.csv` for every
/// subdirectory of the input root
pub fn run_pr_curves(config: &VizConfig, sink: &mut dyn ChartSink) -> Result<BatchReport> {
    let kind = ArtifactKind::PrecisionRecall;
    let mut report = BatchReport::new("pr-curves");

    for sub in artifact_dirs(config, kind)? {
        let input_dir = config.input_root.join(&sub).join(kind.dir_name());
        let output_dir = config.pr_output_root.join(&sub).join(kind.dir_name());
        render_dir(&mut report, sink, kind, &input_dir, &output_dir, |input, _| {
            let samples = read_pr_samples(input)?;
            Ok(Chart::Curves(pr_chart(&samples, config.top_k)?))
        })?;
    }

    Ok(report)
}
