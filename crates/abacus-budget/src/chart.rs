use std::path::Path;

use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::BudgetError;
use crate::ledger::Category;
use crate::report::{balance_history, spending_by_category};

const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);

const PALETTE: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

fn chart_err(e: impl std::fmt::Display) -> BudgetError {
    BudgetError::Chart(e.to_string())
}

fn to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Bar chart and pie chart of spending per category, side by side.
pub fn plot_spending(
    categories: &[Category],
    path: &Path,
    size: (u32, u32),
) -> Result<(), BudgetError> {
    if categories.is_empty() {
        return Err(BudgetError::NothingToPlot);
    }

    let spending = spending_by_category(categories);
    let labels: Vec<&str> = spending.iter().map(|s| s.category.as_str()).collect();
    let spent: Vec<f64> = spending.iter().map(|s| to_f64(s.spent)).collect();

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;
    let (bar_area, pie_area) = root.split_horizontally(size.0 / 2);

    let y_max = spent.iter().copied().fold(0.0, f64::max).max(1.0) * 1.1;
    let mut bars = ChartBuilder::on(&bar_area)
        .caption("Spending by Category", ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..labels.len()).into_segmented(), 0.0..y_max)
        .map_err(chart_err)?;

    bars.configure_mesh()
        .disable_x_mesh()
        .x_desc("Category")
        .y_desc("Amount Spent ($)")
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => labels.get(*i).map(|s| s.to_string()).unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(chart_err)?;

    bars.draw_series(
        Histogram::vertical(&bars)
            .style(BAR_COLOR.filled())
            .margin(10)
            .data(spent.iter().enumerate().map(|(i, v)| (i, *v))),
    )
    .map_err(chart_err)?;

    let pie_area = pie_area
        .titled("Spending Breakdown", ("sans-serif", 24))
        .map_err(chart_err)?;

    // A pie of nothing has no meaningful slices.
    if spent.iter().sum::<f64>() > 0.0 {
        let (w, h) = pie_area.dim_in_pixel();
        let center = ((w / 2) as i32, (h / 2) as i32);
        let radius = f64::from(w.min(h)) * 0.35;
        let colors: Vec<RGBColor> = (0..spent.len()).map(|i| PALETTE[i % PALETTE.len()]).collect();

        let mut pie = Pie::new(&center, &radius, &spent, &colors, &labels);
        pie.start_angle(140.0);
        pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 14).into_font().color(&WHITE));
        pie_area.draw(&pie).map_err(chart_err)?;
    }

    root.present().map_err(chart_err)?;
    tracing::info!(path = %path.display(), "wrote spending chart");
    Ok(())
}

/// One line per category tracing its running balance over time.
pub fn plot_balance_over_time(
    categories: &[Category],
    path: &Path,
    size: (u32, u32),
) -> Result<(), BudgetError> {
    if categories.is_empty() {
        return Err(BudgetError::NothingToPlot);
    }

    let histories: Vec<_> = categories.iter().map(balance_history).collect();
    let Some(start) = histories.iter().flatten().map(|p| p.timestamp).min() else {
        return Err(BudgetError::NothingToPlot);
    };

    // x is seconds since the earliest transaction.
    let series: Vec<Vec<(f64, f64)>> = histories
        .iter()
        .map(|h| {
            h.iter()
                .map(|p| {
                    let secs = (p.timestamp - start).num_milliseconds() as f64 / 1000.0;
                    (secs, to_f64(p.balance))
                })
                .collect()
        })
        .collect();

    let points = series.iter().flatten();
    let x_max = points.clone().map(|p| p.0).fold(0.0, f64::max).max(1.0);
    let y_lo = points.clone().map(|p| p.1).fold(0.0, f64::min);
    let y_hi = points.map(|p| p.1).fold(0.0, f64::max).max(1.0);
    let pad = (y_hi - y_lo) * 0.1;

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Balance Over Time", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max * 1.05, (y_lo - pad)..(y_hi + pad))
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Balance ($)")
        .x_label_formatter(&|secs| {
            let offset = chrono::Duration::milliseconds((secs * 1000.0) as i64);
            (start + offset).format("%m-%d %H:%M:%S").to_string()
        })
        .draw()
        .map_err(chart_err)?;

    for (i, (category, points)) in categories.iter().zip(&series).enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
            .map_err(chart_err)?
            .label(category.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart
            .draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))
            .map_err(chart_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    tracing::info!(path = %path.display(), "wrote balance chart");
    Ok(())
}
