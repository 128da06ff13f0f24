//! Normal density curve with the cumulative region left of a Z-score shaded.

use bevy_math::Vec2;
use error_stack::Report;

use crate::chart::{ChartBuilder, chart};
use crate::config::ChartConfig;
use crate::core::{Chart2D, Color, LineDash, Style};
use crate::normal::{NormalParams, linspace, trapezoid};
use crate::{Result, ZPlotError};

pub const TITLE: &str = "Standard Normal Distribution and Z-Score";
pub const X_LABEL: &str = "Z";
pub const Y_LABEL: &str = "Probability Density";
pub const CURVE_LABEL: &str = "Standard Normal Distribution";

/// Sample points paired with their densities.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn area(&self) -> f64 {
        trapezoid(&self.xs, &self.ys)
    }

    pub fn points(&self) -> Vec<Vec2> {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Vec2::new(x as f32, y as f32))
            .collect()
    }

    fn evaluate(params: &NormalParams, xs: Vec<f64>) -> Self {
        let ys = params.pdf_all(&xs);
        Self { xs, ys }
    }
}

/// Density over `[mean - span·σ, mean + span·σ]`.
pub fn sample_curve(params: &NormalParams, span_sigmas: f64, count: usize) -> Curve {
    let (lo, hi) = params.domain(span_sigmas);
    Curve::evaluate(params, linspace(lo, hi, count))
}

/// Density over `[mean - span·σ, z]`, `count` points.
///
/// Empty when `z` is at or left of the lower bound; a `z` past the upper
/// bound is clamped so the region equals the full curve.
pub fn shaded_region(params: &NormalParams, span_sigmas: f64, z: f64, count: usize) -> Curve {
    let (lo, hi) = params.domain(span_sigmas);
    if z <= lo {
        return Curve::default();
    }
    Curve::evaluate(params, linspace(lo, z.min(hi), count))
}

#[derive(Clone, Debug)]
pub struct ZScoreScene {
    config: ChartConfig,
    params: NormalParams,
    curve: Curve,
    shaded: Curve,
}

impl ZScoreScene {
    pub fn new(config: ChartConfig) -> Result<Self> {
        let params = NormalParams::new(config.mean, config.std_dev)?;

        if !config.z_score.is_finite() {
            return Err(Report::new(ZPlotError)
                .attach("z-score must be finite")
                .attach(format!("z_score: {}", config.z_score)));
        }
        if config.sample_count < 2 {
            return Err(Report::new(ZPlotError)
                .attach("at least two samples are needed to draw a curve")
                .attach(format!("sample_count: {}", config.sample_count)));
        }
        if !config.span_sigmas.is_finite() || config.span_sigmas <= 0.0 {
            return Err(Report::new(ZPlotError)
                .attach("plotted span must be finite and positive")
                .attach(format!("span_sigmas: {}", config.span_sigmas)));
        }

        let curve = sample_curve(&params, config.span_sigmas, config.sample_count);
        let shaded = shaded_region(
            &params,
            config.span_sigmas,
            config.z_score,
            config.sample_count,
        );

        Ok(Self {
            config,
            params,
            curve,
            shaded,
        })
    }

    pub fn params(&self) -> &NormalParams {
        &self.params
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn shaded(&self) -> &Curve {
        &self.shaded
    }

    /// Trapezoidal area of the shaded region.
    pub fn shaded_probability(&self) -> f64 {
        self.shaded.area()
    }

    /// `Φ((z - mean) / σ)`
    pub fn exact_probability(&self) -> f64 {
        self.params.cdf(self.config.z_score)
    }

    pub fn fill_label(&self) -> String {
        format!("P(Z < {})", self.config.z_score)
    }

    pub fn threshold_label(&self) -> String {
        format!("Z = {}", self.config.z_score)
    }

    /// Distribution, plotted domain and threshold.
    pub fn parameters(&self) -> String {
        let (lo, hi) = self.params.domain(self.config.span_sigmas);
        format!(
            "N({}, {}²) over [{}, {}], z = {}",
            self.params.mean(),
            self.params.std_dev(),
            lo,
            hi,
            self.config.z_score
        )
    }

    pub fn summary(&self) -> String {
        format!(
            "P(Z < {}) = {:.4} (shaded area {:.4})",
            self.config.z_score,
            self.exact_probability(),
            self.shaded_probability()
        )
    }

    pub fn builder(&self) -> ChartBuilder {
        let cfg = &self.config;

        chart()
            .size(cfg.window_width, cfg.window_height)
            .background_color(cfg.background)
            .line(
                self.curve.points(),
                Style::default().color(cfg.curve_color).size(2.0),
            )
            .label(CURVE_LABEL)
            .fill_to_zero(
                self.shaded.points(),
                Style::default()
                    .color(cfg.fill_color)
                    .opacity(cfg.fill_opacity),
            )
            .label(self.fill_label())
            .vline(
                cfg.z_score as f32,
                Style::default().color(cfg.threshold_color).size(1.5),
                LineDash::DEFAULT_DASHED,
            )
            .label(self.threshold_label())
            .hline(
                0.0,
                Style::default().color(Color::BLACK).size(1.0),
                LineDash::Solid,
            )
            .title(TITLE)
            .description(format!("{}: {}", self.parameters(), self.summary()))
            .x_label(X_LABEL)
            .y_label(Y_LABEL)
            .legend(true)
            .grid(true)
    }

    pub fn to_chart(&self) -> Chart2D {
        self.builder().build()
    }

    pub fn show(&self) -> Result<()> {
        self.builder().show()
    }
}

/// Build the scene for `config` and display it.
pub fn show(config: ChartConfig) -> Result<()> {
    ZScoreScene::new(config)?.show()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Geometry2D, Orientation, Swatch};

    fn standard() -> ZScoreScene {
        ZScoreScene::new(ChartConfig::default()).unwrap()
    }

    #[test]
    fn standard_curve_is_symmetric() {
        let scene = standard();
        let curve = scene.curve();
        assert_eq!(curve.len(), 1000);
        let n = curve.len();
        for i in 0..n {
            assert!((curve.xs[i] + curve.xs[n - 1 - i]).abs() < 1e-9);
            assert!((curve.ys[i] - curve.ys[n - 1 - i]).abs() < 1e-9);
        }
    }

    #[test]
    fn full_curve_integrates_to_one() {
        let area = standard().curve().area();
        assert!((area - 1.0).abs() < 0.01, "area = {}", area);
    }

    #[test]
    fn shaded_region_bounded_by_z() {
        let scene = standard();
        let shaded = scene.shaded();
        assert_eq!(shaded.len(), 1000);
        assert_eq!(shaded.xs[0], scene.curve().xs[0]);
        assert_eq!(shaded.xs[0], -4.0);
        assert_eq!(*shaded.xs.last().unwrap(), 1.25);
        assert!(shaded.xs.iter().all(|&x| x <= 1.25));
        assert!(shaded.xs.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn densities_are_non_negative() {
        for (mean, sd) in [(0.0, 1.0), (5.0, 0.1), (-3.0, 12.0), (100.0, 1e-3)] {
            let p = NormalParams::new(mean, sd).unwrap();
            let c = sample_curve(&p, 4.0, 1000);
            assert!(c.ys.iter().all(|&y| y >= 0.0));
            assert_eq!(c.xs.len(), c.ys.len());
        }
    }

    #[test]
    fn reference_densities() {
        let p = NormalParams::standard();
        let c = sample_curve(&p, 4.0, 1000);
        let peak = c.ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!((peak - 0.3989).abs() < 1e-3);
        assert!((p.pdf(0.0) - 0.3989).abs() < 1e-4);
        assert!((p.pdf(1.25) - 0.1827).abs() < 1e-4);
    }

    #[test]
    fn z_below_domain_shades_nothing() {
        let p = NormalParams::standard();
        assert!(shaded_region(&p, 4.0, -5.0, 1000).is_empty());
        assert!(shaded_region(&p, 4.0, -4.0, 1000).is_empty());
    }

    #[test]
    fn z_above_domain_shades_whole_curve() {
        let p = NormalParams::standard();
        let full = sample_curve(&p, 4.0, 1000);
        assert_eq!(shaded_region(&p, 4.0, 5.0, 1000), full);
    }

    #[test]
    fn shaded_area_matches_cdf() {
        let scene = standard();
        let p = scene.params();
        let expected = p.cdf(1.25) - p.cdf(-4.0);
        assert!((scene.shaded_probability() - expected).abs() < 1e-4);
        assert!((scene.exact_probability() - 0.8944).abs() < 1e-4);
    }

    #[test]
    fn invalid_configs_rejected() {
        let base = ChartConfig::default();
        assert!(ZScoreScene::new(base.clone().distribution(0.0, 0.0)).is_err());
        assert!(ZScoreScene::new(base.clone().distribution(0.0, -2.0)).is_err());
        assert!(ZScoreScene::new(base.clone().z_score(f64::NAN)).is_err());
        assert!(ZScoreScene::new(base.clone().sample_count(1)).is_err());
        for span in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(
                ZScoreScene::new(base.clone().span_sigmas(span)).is_err(),
                "span_sigmas {} accepted",
                span
            );
        }
        assert!(ZScoreScene::new(base.span_sigmas(2.5)).is_ok());
    }

    #[test]
    fn z_below_domain_still_charts() {
        let scene = ZScoreScene::new(ChartConfig::default().z_score(-5.0)).unwrap();
        let chart = scene.to_chart();

        assert_eq!(chart.layers.len(), 2);
        assert!(chart.layers[1].xy.is_empty());
        assert_eq!(scene.shaded_probability(), 0.0);

        let legend: Vec<_> = chart.legend_entries().iter().map(|e| e.label).collect();
        assert_eq!(
            legend,
            vec!["Standard Normal Distribution", "P(Z < -5)", "Z = -5"]
        );

        let (min, max) = chart.bounds().unwrap();
        assert_eq!(min[0], -5.0);
        assert_eq!(max[0], 4.0);
    }

    #[test]
    fn z_above_domain_fills_full_width() {
        let scene = ZScoreScene::new(ChartConfig::default().z_score(5.0)).unwrap();
        let chart = scene.to_chart();

        let fill = &chart.layers[1];
        assert_eq!(fill.xy, chart.layers[0].xy);
        assert_eq!(fill.xy.first().map(|p| p.x), Some(-4.0));
        assert_eq!(fill.xy.last().map(|p| p.x), Some(4.0));
        assert!((scene.shaded_probability() - scene.curve().area()).abs() < 1e-12);

        let legend: Vec<_> = chart.legend_entries().iter().map(|e| e.label).collect();
        assert_eq!(legend, vec!["Standard Normal Distribution", "P(Z < 5)", "Z = 5"]);

        let (min, max) = chart.bounds().unwrap();
        assert_eq!(min[0], -4.0);
        assert_eq!(max[0], 5.0);
    }

    #[test]
    fn chart_layout_and_labels() {
        let chart = standard().to_chart();

        assert_eq!(chart.meta.title.as_deref(), Some(TITLE));
        assert_eq!(chart.x_label.as_deref(), Some("Z"));
        assert_eq!(chart.y_label.as_deref(), Some("Probability Density"));
        assert!(chart.show_grid);
        assert!(chart.show_legend);

        assert_eq!(chart.layers.len(), 2);
        assert_eq!(chart.layers[0].geometry, Geometry2D::Line);
        assert_eq!(chart.layers[0].xy.len(), 1000);
        assert_eq!(chart.layers[1].geometry, Geometry2D::FillBetween);
        assert!((chart.layers[1].style.opacity - 0.4).abs() < 1e-6);
        assert!(
            chart.layers[1]
                .lower_line
                .as_ref()
                .unwrap()
                .iter()
                .all(|p| p.y == 0.0)
        );

        let vline = &chart.reference_lines[0];
        assert_eq!(vline.orientation, Orientation::Vertical);
        assert_eq!(vline.value, 1.25);
        assert!(matches!(vline.dash, LineDash::Dashed { .. }));

        let hline = &chart.reference_lines[1];
        assert_eq!(hline.orientation, Orientation::Horizontal);
        assert_eq!(hline.value, 0.0);
        assert_eq!(hline.dash, LineDash::Solid);
        assert_eq!(hline.label, None);

        let legend: Vec<_> = chart.legend_entries().iter().map(|e| e.label).collect();
        assert_eq!(
            legend,
            vec!["Standard Normal Distribution", "P(Z < 1.25)", "Z = 1.25"]
        );
        assert_eq!(chart.legend_entries()[1].swatch, Swatch::Patch);
    }

    #[test]
    fn description_carries_parameters_and_probability() {
        let chart = standard().to_chart();
        assert_eq!(
            chart.meta.description.as_deref(),
            Some("N(0, 1²) over [-4, 4], z = 1.25: P(Z < 1.25) = 0.8944 (shaded area 0.8943)")
        );
    }

    #[test]
    fn labels_follow_z_value() {
        let scene = ZScoreScene::new(ChartConfig::default().z_score(-0.5)).unwrap();
        assert_eq!(scene.fill_label(), "P(Z < -0.5)");
        assert_eq!(scene.threshold_label(), "Z = -0.5");
    }
}
