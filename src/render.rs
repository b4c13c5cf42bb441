//! SVG drawing of a figure.
//!
//! Each stick becomes a wooden body line plus a short red head line at `(x1, y1)`. The
//! viewBox is fitted to the sticks so any coordinate range fills the canvas.

use std::fmt::Write;

use crate::geometry::{Matchstick, ViewBox};

const BG_COLOR: &str = "#1a1a2e";
const BODY_WIDTH: f64 = 2.8;
const HEAD_WIDTH: f64 = 3.6;
const HEAD_SHARE: f64 = 0.18;
const HEAD_MAX: f64 = 5.0;

const DEFS: &str = concat!(
    "<defs>",
    "<linearGradient id=\"woodGrad\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">",
    "<stop offset=\"0%\" stop-color=\"#f5d89a\"/>",
    "<stop offset=\"30%\" stop-color=\"#e8c46e\"/>",
    "<stop offset=\"70%\" stop-color=\"#d4a84a\"/>",
    "<stop offset=\"100%\" stop-color=\"#c89838\"/>",
    "</linearGradient>",
    "<radialGradient id=\"headGrad\" cx=\"50%\" cy=\"40%\" r=\"60%\">",
    "<stop offset=\"0%\" stop-color=\"#e84040\"/>",
    "<stop offset=\"60%\" stop-color=\"#c02020\"/>",
    "<stop offset=\"100%\" stop-color=\"#8b1a1a\"/>",
    "</radialGradient>",
    "<filter id=\"stickShadow\" x=\"-20%\" y=\"-20%\" width=\"140%\" height=\"140%\">",
    "<feDropShadow dx=\"0.3\" dy=\"0.5\" stdDeviation=\"0.4\" flood-color=\"#000\" flood-opacity=\"0.4\"/>",
    "</filter>",
    "</defs>",
);

/// Where the head of a stick ends, or `None` for a zero-length stick.
pub fn head_end(stick: &Matchstick) -> Option<(f64, f64)> {
    let len = stick.length();
    if len == 0.0 {
        return None;
    }
    let ux = (stick.x2 - stick.x1) / len;
    let uy = (stick.y2 - stick.y1) / len;
    let head_len = (len * HEAD_SHARE).min(HEAD_MAX);
    Some((stick.x1 + ux * head_len, stick.y1 + uy * head_len))
}

fn write_stick(out: &mut String, stick: &Matchstick) {
    let Some((hx, hy)) = head_end(stick) else {
        return;
    };
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "<g filter=\"url(#stickShadow)\">\
         <line x1=\"{hx}\" y1=\"{hy}\" x2=\"{}\" y2=\"{}\" stroke=\"url(#woodGrad)\" stroke-width=\"{BODY_WIDTH}\" stroke-linecap=\"round\"/>\
         <line x1=\"{}\" y1=\"{}\" x2=\"{hx}\" y2=\"{hy}\" stroke=\"url(#headGrad)\" stroke-width=\"{HEAD_WIDTH}\" stroke-linecap=\"round\"/>\
         </g>",
        stick.x2, stick.y2, stick.x1, stick.y1,
    );
}

/// Complete `<svg>` element for the given sticks.
pub fn render_svg(sticks: &[Matchstick], width: u32, height: u32, padding: f64) -> String {
    let view_box = ViewBox::of(sticks, padding);
    let mut out = String::with_capacity(1_024 + sticks.len() * 320);
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\" width=\"{width}\" height=\"{height}\" \
         style=\"background:{BG_COLOR};border-radius:12px;border:2px solid #333;max-width:100%\">",
        view_box.to_attr(),
    );
    out.push_str(DEFS);
    for stick in sticks {
        write_stick(&mut out, stick);
    }
    out.push_str("</svg>");
    out
}
