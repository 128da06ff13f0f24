use zplot::config::ChartConfig;

fn main() -> zplot::Result<()> {
    zplot::zscore::show(ChartConfig::default())
}
