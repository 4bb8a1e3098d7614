#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]

use chainset::{ChainStatistics, ChainStats, ChainedHashSet};
use plotters::prelude::*;
use rand::Rng;

// Largest number of elements inserted per key source
const MAX_ELEMENTS: usize = 200_000;
// Number of checkpoints at which statistics are collected
const NUM_STEPS: usize = 20;
// Buckets allocated before the first insertion
const INITIAL_CAPACITY: usize = 4;

// Key sources to compare
const SOURCES: [&str; 3] = ["Random integers", "Sequential integers", "String keys"];

// Fills a fresh set from `source`, taking a snapshot every time a checkpoint is reached
fn collect_stats(source: &str, random_keys: &[i64], checkpoints: &[usize]) -> Vec<ChainStats> {
    let mut stats = Vec::with_capacity(checkpoints.len());
    let mut next_checkpoint = 0;

    match source {
        "String keys" => {
            let mut set = ChainedHashSet::with_capacity(INITIAL_CAPACITY);
            for i in 0..MAX_ELEMENTS {
                set.add(format!("key-{i}"));
                if checkpoints.get(next_checkpoint) == Some(&(i + 1)) {
                    stats.push(set.snapshot());
                    next_checkpoint += 1;
                }
            }
        }
        _ => {
            let mut set = ChainedHashSet::with_capacity(INITIAL_CAPACITY);
            for i in 0..MAX_ELEMENTS {
                let key = if source == "Random integers" { random_keys[i] } else { i as i64 };
                set.add(key);
                if checkpoints.get(next_checkpoint) == Some(&(i + 1)) {
                    stats.push(set.snapshot());
                    next_checkpoint += 1;
                }
            }
        }
    }

    stats
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Evenly spaced checkpoints up to MAX_ELEMENTS
    let checkpoints: Vec<usize> =
        (1..=NUM_STEPS).map(|step| MAX_ELEMENTS * step / NUM_STEPS).collect();
    log::info!("Checkpoints: {checkpoints:?}");

    // Generate random keys once so every run of the random source sees the same input
    let mut rng = rand::rng();
    let random_keys: Vec<i64> =
        (0..MAX_ELEMENTS).map(|_| rng.random_range(i64::MIN..i64::MAX)).collect();

    let mut results: Vec<Vec<ChainStats>> = Vec::with_capacity(SOURCES.len());
    for &source in &SOURCES {
        log::info!("Filling a set with {source}");
        let stats = collect_stats(source, &random_keys, &checkpoints);
        for snapshot in &stats {
            log::info!("  {source}: {snapshot}");
        }
        results.push(stats);
    }

    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50),  // Bright red
        RGBColor(50, 90, 220),  // Bright blue
        RGBColor(50, 180, 50),  // Bright green
    ];
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 30;

    let root = BitMapBackend::new("chain_lengths.png", (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((2, 1));

    let x_labels: Vec<String> = checkpoints.iter().map(|n| n.to_string()).collect();
    let last = checkpoints.len() - 1;

    // Upper chart: longest chain per checkpoint
    let max_longest = results
        .iter()
        .flat_map(|s| s.iter())
        .map(|s| s.longest_chain)
        .max()
        .unwrap_or(1) as f64
        * 1.1;

    let mut chain_chart = ChartBuilder::on(&areas[0])
        .caption("Longest Chain While Growing", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..last, 0.0..max_longest)?;

    chain_chart
        .configure_mesh()
        .x_labels(NUM_STEPS / 2)
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Number of Elements Inserted")
        .y_desc("Longest Chain (nodes)")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (source_idx, &source) in SOURCES.iter().enumerate() {
        let color = &colors[source_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);
        let points: Vec<(usize, f64)> = results[source_idx]
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.longest_chain as f64))
            .collect();

        chain_chart
            .draw_series(LineSeries::new(points.clone(), line_style))?
            .label(source)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
        chain_chart.draw_series(
            points.into_iter().map(|point| Circle::new(point, marker_size, color.filled())),
        )?;
    }

    chain_chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    // Lower chart: load factor per checkpoint, with the rehash threshold for reference
    let mut load_chart = ChartBuilder::on(&areas[1])
        .caption("Load Factor While Growing", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..last, 0.0..1.05)?;

    load_chart
        .configure_mesh()
        .x_labels(NUM_STEPS / 2)
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Number of Elements Inserted")
        .y_desc("Occupied Buckets / Buckets")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    let threshold_style = ShapeStyle::from(&BLACK.mix(0.3)).stroke_width(1);
    load_chart
        .draw_series(LineSeries::new(vec![(0, 0.75), (last, 0.75)], threshold_style))?
        .label("Rehash Threshold")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], threshold_style));

    for (source_idx, &source) in SOURCES.iter().enumerate() {
        let color = &colors[source_idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        load_chart
            .draw_series(LineSeries::new(
                results[source_idx].iter().enumerate().map(|(i, s)| (i, s.load_factor)),
                line_style,
            ))?
            .label(source)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
    }

    load_chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    root.present()?;
    log::info!("Generated plot image: chain_lengths.png");

    Ok(())
}
