use tempchart::data::guides::default_guides;
use tempchart::data::palette::{ColorCursor, DEFAULT_PALETTE, LIVE_COLOR};
use tempchart::data::segments::{PlotPoint, Segment};
use tempchart::data::session::*;
use tempchart::LogicalBounds;

fn probe_line(temperature: &str) -> String {
    format!(";\t:\t{temperature}\t22.00\t1s")
}

fn p(x: f64, y: f64) -> PlotPoint {
    PlotPoint::new(x, y)
}

#[test]
fn new_session_starts_at_origin_with_empty_history() {
    let s = PlotSession::default();
    assert_eq!(s.cursor(), Sample::ORIGIN);
    assert!(s.history().is_empty());
    assert_eq!(s.overlays(), 0);
}

#[test]
fn sequential_ingestion_advances_cursor_and_draws() {
    let mut s = PlotSession::default();
    let mut drawn: Vec<Segment> = Vec::new();
    let mut cursors = vec![s.cursor()];
    for t in ["100.00", "105.00", "110.00"] {
        s.on_stream_line(&probe_line(t), &mut drawn).unwrap();
        cursors.push(s.cursor());
    }

    let expected: Vec<(u64, f64)> = vec![(0, 0.0), (1, 100.0), (2, 105.0), (3, 110.0)];
    let got: Vec<(u64, f64)> = cursors.iter().map(|c| (c.time, c.temperature)).collect();
    assert_eq!(got, expected);

    assert_eq!(
        drawn,
        vec![
            Segment::new(p(0.0, 0.0), p(1.0, 100.0), LIVE_COLOR),
            Segment::new(p(1.0, 100.0), p(2.0, 105.0), LIVE_COLOR),
            Segment::new(p(2.0, 105.0), p(3.0, 110.0), LIVE_COLOR),
        ]
    );
    assert_eq!(s.history().len(), 3);
    assert_eq!(*s.history().last().unwrap(), s.cursor());
}

#[test]
fn accepted_line_returns_sample() {
    let mut s = PlotSession::default();
    let mut drawn: Vec<Segment> = Vec::new();
    let sample = s.on_stream_line(";\t:\t23.50\t22.00\t1s", &mut drawn).unwrap();
    assert_eq!(sample, Some(Sample { time: 1, temperature: 23.5 }));
}

#[test]
fn short_line_changes_nothing() {
    let mut s = PlotSession::default();
    let mut drawn: Vec<Segment> = Vec::new();
    s.on_stream_line(&probe_line("50.00"), &mut drawn).unwrap();
    let before = (s.cursor(), s.history().to_vec(), drawn.len());

    assert_eq!(s.on_stream_line(";\t:", &mut drawn).unwrap(), None);
    assert_eq!((s.cursor(), s.history().to_vec(), drawn.len()), before);
}

#[test]
fn bad_temperature_is_an_error_without_side_effects() {
    let mut s = PlotSession::default();
    let mut drawn: Vec<Segment> = Vec::new();
    assert!(s.on_stream_line(";\t:\tERR\t22.00\t1s", &mut drawn).is_err());
    assert!(drawn.is_empty());
    assert!(s.history().is_empty());
    assert_eq!(s.cursor(), Sample::ORIGIN);
}

#[test]
fn open_profile_overlays_without_touching_live_state() {
    let mut s = PlotSession::default();
    let mut drawn: Vec<Segment> = Vec::new();
    s.on_stream_line(&probe_line("30.00"), &mut drawn).unwrap();
    let cursor = s.cursor();
    let history = s.history().to_vec();

    let mut overlay: Vec<Segment> = Vec::new();
    let records = [p(0.0, 0.0), p(10.0, 150.0), p(20.0, 183.0)];
    let color = s.open_profile(&records, &mut overlay);

    assert_eq!(color, DEFAULT_PALETTE[0]);
    assert_eq!(
        overlay,
        vec![
            Segment::new(p(0.0, 0.0), p(10.0, 150.0), color),
            Segment::new(p(10.0, 150.0), p(20.0, 183.0), color),
        ]
    );
    assert_eq!(s.cursor(), cursor);
    assert_eq!(s.history(), history.as_slice());
    assert_eq!(s.overlays(), 1);
}

#[test]
fn open_profile_not_starting_at_origin_draws_lead_in() {
    let mut s = PlotSession::default();
    let mut overlay: Vec<Segment> = Vec::new();
    let color = s.open_profile(&[p(0.0, 20.0), p(120.0, 150.0)], &mut overlay);
    assert_eq!(
        overlay,
        vec![
            Segment::new(PlotPoint::ORIGIN, p(0.0, 20.0), color),
            Segment::new(p(0.0, 20.0), p(120.0, 150.0), color),
        ]
    );
}

#[test]
fn each_overlay_gets_the_next_color() {
    let mut s = PlotSession::default();
    let mut sink: Vec<Segment> = Vec::new();
    let colors: Vec<_> = (0..DEFAULT_PALETTE.len() + 1)
        .map(|_| s.open_profile(&[], &mut sink))
        .collect();
    assert!(sink.is_empty());
    assert_eq!(&colors[..DEFAULT_PALETTE.len()], &DEFAULT_PALETTE[..]);
    assert_eq!(colors[DEFAULT_PALETTE.len()], DEFAULT_PALETTE[0]);
}

#[test]
fn save_returns_indexed_records_and_clears_history() {
    let mut s = PlotSession::default();
    let mut drawn: Vec<Segment> = Vec::new();
    for t in ["20.00", "20.25", "20.50"] {
        s.on_stream_line(&probe_line(t), &mut drawn).unwrap();
    }
    let records = s.save_profile();
    assert_eq!(records, vec![p(0.0, 20.0), p(1.0, 20.25), p(2.0, 20.5)]);
    assert!(s.history().is_empty());

    s.on_stream_line(&probe_line("21.00"), &mut drawn).unwrap();
    assert_eq!(s.history().len(), 1);
}

#[test]
fn default_save_keeps_cursor() {
    let mut s = PlotSession::default();
    let mut drawn: Vec<Segment> = Vec::new();
    s.on_stream_line(&probe_line("80.00"), &mut drawn).unwrap();
    s.on_stream_line(&probe_line("90.00"), &mut drawn).unwrap();
    s.save_profile();
    assert_eq!(s.cursor(), Sample { time: 2, temperature: 90.0 });

    s.on_stream_line(&probe_line("95.00"), &mut drawn).unwrap();
    assert_eq!(s.history(), &[Sample { time: 3, temperature: 95.0 }]);
    assert_eq!(drawn.last().unwrap().from, p(2.0, 90.0));
}

#[test]
fn reset_policy_returns_cursor_to_origin() {
    let mut s = PlotSession::default().with_save_policy(SavePolicy::ResetCursor);
    let mut drawn: Vec<Segment> = Vec::new();
    s.on_stream_line(&probe_line("80.00"), &mut drawn).unwrap();
    s.save_profile();
    assert_eq!(s.cursor(), Sample::ORIGIN);
    s.on_stream_line(&probe_line("81.00"), &mut drawn).unwrap();
    assert_eq!(s.cursor(), Sample { time: 1, temperature: 81.0 });
}

#[test]
fn records_does_not_clear() {
    let mut s = PlotSession::default();
    let mut drawn: Vec<Segment> = Vec::new();
    s.on_stream_line(&probe_line("60.00"), &mut drawn).unwrap();
    assert_eq!(s.records(), vec![p(0.0, 60.0)]);
    assert_eq!(s.history().len(), 1);
}

#[test]
fn clear_resets_history_and_cursor() {
    let mut s = PlotSession::default();
    let mut drawn: Vec<Segment> = Vec::new();
    s.on_stream_line(&probe_line("60.00"), &mut drawn).unwrap();
    s.clear();
    assert!(s.history().is_empty());
    assert_eq!(s.cursor(), Sample::ORIGIN);
}

#[test]
fn guides_span_the_time_axis() {
    let s = PlotSession::new(LogicalBounds::default()).with_guides(default_guides());
    let mut drawn: Vec<Segment> = Vec::new();
    s.draw_guides(&mut drawn);
    let temps: Vec<f64> = drawn.iter().map(|g| g.from.y).collect();
    assert_eq!(temps, vec![150.0, 183.0, 217.0, 245.0]);
    for g in &drawn {
        assert_eq!(g.from.x, 0.0);
        assert_eq!(g.to.x, 400.0);
        assert_eq!(g.from.y, g.to.y);
    }
}

#[test]
fn custom_palette_is_used_for_overlays() {
    let red = tempchart::data::palette::color_from_rgb([255, 0, 0]);
    let mut s = PlotSession::default().with_colors(ColorCursor::new(vec![red]));
    let mut sink: Vec<Segment> = Vec::new();
    assert_eq!(s.open_profile(&[], &mut sink), red);
    assert_eq!(s.open_profile(&[], &mut sink), red);
}
