//! Plain-text page rendering

use super::format::price_label;
use super::{LandingPage, StatCard};
use crate::refresh::PriceReading;
use chrono::NaiveTime;
use std::fmt::Write;

/// Width of the rendered page in characters
pub const PAGE_WIDTH: usize = 72;

const CARD_WIDTH: usize = 24;
const FLOATING_COINS: usize = 8;

/// Per-redraw inputs other than the price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Redraw counter, drives the decorative motion
    pub index: u64,
    /// Wall clock shown in the header
    pub clock: NaiveTime,
}

/// Render the page for one frame
pub fn render(page: &LandingPage, reading: &PriceReading, frame: &Frame) -> String {
    let mut out = String::new();

    // fmt::Write into a String cannot fail
    let _ = writeln!(out, "{}", coin_row(frame.index));
    let _ = writeln!(
        out,
        "{:<width$}{}",
        page.brand,
        frame.clock.format("%H:%M:%S"),
        width = PAGE_WIDTH - 8
    );
    let _ = writeln!(out, "{}", "─".repeat(PAGE_WIDTH));
    let _ = writeln!(out, "{}", ticker_window(&page.ticker, frame.index, PAGE_WIDTH));
    out.push('\n');

    let mut titles = String::new();
    let mut values = String::new();
    for card in &page.stats {
        let value = match card {
            StatCard::LivePrice { .. } => price_label(reading),
            StatCard::Fixed { value, .. } => value.clone(),
        };
        let _ = write!(titles, "{:<CARD_WIDTH$}", card.title());
        let _ = write!(values, "{:<CARD_WIDTH$}", value);
    }
    let _ = writeln!(out, "{}", titles.trim_end());
    let _ = writeln!(out, "{}", values.trim_end());
    out.push('\n');

    for feature in &page.features {
        let _ = writeln!(out, "  ▸ {}", feature.title);
        let _ = writeln!(out, "    {}", feature.caption);
    }
    out.push('\n');

    let _ = write!(out, "  [ {} ] → {}", page.cta.label, page.cta.url);
    if page.cta.new_context {
        let _ = write!(out, "  (new window, rel=\"{}\")", page.cta.rel);
    }
    out.push('\n');

    out
}

/// Visible slice of the scrolling ticker, rotated left by `offset` chars
fn ticker_window(ticker: &str, offset: u64, width: usize) -> String {
    let len = ticker.chars().count();
    if len == 0 {
        return String::new();
    }

    let padded = format!("{}   ", ticker);
    let cycle_len = len + 3;
    padded
        .chars()
        .cycle()
        .skip((offset % cycle_len as u64) as usize)
        .take(width.min(cycle_len))
        .collect()
}

/// Decorative drifting ₿ symbols
fn coin_row(index: u64) -> String {
    let mut row = vec![' '; PAGE_WIDTH];
    for coin in 0..FLOATING_COINS {
        let speed = 1 + (coin % 3) as u64;
        let start = (coin * PAGE_WIDTH / FLOATING_COINS) as u64;
        let pos = (start + index * speed) % PAGE_WIDTH as u64;
        row[pos as usize] = '₿';
    }
    row.into_iter().collect::<String>().trim_end().to_string()
}
