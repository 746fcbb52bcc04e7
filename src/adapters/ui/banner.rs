//! Startup banner: figlet "TASK-TIMER" shaded from cyan to green, one shade per row.

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{self, Write, stdout};

const TITLE: &str = "TASK-TIMER";

const FROM: [u8; 3] = [0x15, 0x5e, 0x75];
const TO: [u8; 3] = [0x4a, 0xde, 0x80];

/// `rows` evenly spaced shades from `FROM` to `TO` (a single row gets `TO`).
fn shades(rows: usize) -> Vec<Color> {
    let steps = rows.saturating_sub(1).max(1) as f64;
    (0..rows)
        .map(|row| {
            let t = if rows <= 1 { 1.0 } else { row as f64 / steps };
            let [r, g, b] = std::array::from_fn(|i| {
                (f64::from(FROM[i]) + (f64::from(TO[i]) - f64::from(FROM[i])) * t).round() as u8
            });
            Color::Rgb { r, g, b }
        })
        .collect()
}

fn render_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .unwrap_or_else(|| TITLE.to_string())
}

fn write_banner(out: &mut impl Write, subtitle: &str) -> io::Result<()> {
    let art = render_art();
    let rows: Vec<&str> = art.lines().collect();
    for (row, color) in rows.iter().zip(shades(rows.len())) {
        queue!(out, SetForegroundColor(color), Print(row), Print("\r\n"))?;
    }
    queue!(
        out,
        SetForegroundColor(Color::DarkGrey),
        Print(format!("v{}  {}\r\n", env!("CARGO_PKG_VERSION"), subtitle)),
        ResetColor
    )?;
    out.flush()
}

/// Print the banner followed by `subtitle` (e.g. which model estimates).
pub fn print_welcome(subtitle: &str) {
    let _ = write_banner(&mut stdout(), subtitle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shades_endpoints() {
        let colors = shades(3);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], Color::Rgb { r: FROM[0], g: FROM[1], b: FROM[2] });
        assert_eq!(colors[2], Color::Rgb { r: TO[0], g: TO[1], b: TO[2] });
        assert_eq!(shades(1), vec![Color::Rgb { r: TO[0], g: TO[1], b: TO[2] }]);
        assert!(shades(0).is_empty());
    }

    #[test]
    fn test_banner_includes_subtitle() {
        let mut buf = Vec::new();
        write_banner(&mut buf, "estimates by gpt-3.5-turbo").unwrap();
        let text = String::from_utf8_lossy(&buf);
        assert!(text.contains("estimates by gpt-3.5-turbo"));
    }
}
