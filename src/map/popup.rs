//! Popup and legend markup.
//!
//! Pure string builders, kept apart from the map document so they can be
//! checked without rendering anything.

use crate::data::StateAggregate;
use crate::format::{percent, thousands};
use crate::map::tier::Tier;
use std::fmt::Write;

/// Info popup shown when a state's marker is clicked.
pub fn popup_html(agg: &StateAggregate) -> String {
    format!(
        "<b>{}</b><br>Total Drivers: {}<br>Male: {} ({})<br>Female: {} ({})<br>Gender Difference: {}",
        html_escape(&agg.state),
        thousands(agg.total),
        thousands(agg.male),
        percent(agg.male_pct),
        thousands(agg.female),
        percent(agg.female_pct),
        thousands(agg.gender_difference),
    )
}

/// Fixed-position legend describing the marker tiers.
pub fn legend_html() -> String {
    let mut html = String::from(
        "<div id=\"legend\" style=\"position: fixed; bottom: 50px; left: 50px; width: 200px; \
         background-color: white; border: 2px solid grey; z-index: 9999; font-size: 14px; \
         padding: 10px\">\n<p><b>Driver Count Legend</b></p>\n",
    );
    for tier in Tier::ALL {
        let _ = writeln!(
            html,
            "<p><span class=\"legend-dot\" style=\"background: {}\"></span> {}</p>",
            tier.color(),
            html_escape(tier.label())
        );
    }
    html.push_str("</div>");
    html
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
