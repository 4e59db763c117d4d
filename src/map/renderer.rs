//! Map Renderer
//! Builds a standalone Leaflet HTML page with one circle marker per state.
//!
//! Layout:
//! 1. Full-window map centred on the contiguous US, OpenStreetMap tiles
//! 2. One circle marker per state with a known coordinate, sized and
//!    coloured by tier, each with an info popup
//! 3. Fixed legend overlay in the bottom-left corner

use crate::data::StateAggregate;
use crate::map::coords::{coordinate_for, Coordinate, MAP_CENTER};
use crate::map::popup::{legend_html, popup_html};
use crate::map::tier::Tier;
use log::{debug, info};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ZOOM_START: u8 = 4;
pub const POPUP_MAX_WIDTH: u32 = 300;

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Licensed Drivers by State</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <style>
        html, body { width: 100%; height: 100%; margin: 0; padding: 0; }
        #map { position: absolute; top: 0; bottom: 0; left: 0; right: 0; }
        #legend p { margin: 4px 0; }
        .legend-dot { display: inline-block; width: 12px; height: 12px; border-radius: 50%; border: 1px solid black; vertical-align: middle; }
    </style>
</head>
<body>
<div id="map"></div>
"#;

const TILE_LAYER: &str = r#"L.tileLayer('https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png', {
    maxZoom: 19,
    attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors'
}).addTo(map);
"#;

const MARKER_LOOP: &str = r#"markers.forEach(function (m) {
    L.circleMarker([m.lat, m.lon], {
        radius: m.radius,
        color: 'black',
        weight: 1,
        fillColor: m.fillColor,
        fillOpacity: 0.7
    }).bindPopup(m.popup, { maxWidth: popupMaxWidth }).addTo(map);
});
"#;

const HTML_FOOTER: &str = "</script>\n</body>\n</html>\n";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write map to {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize markers: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A single circle marker as handed to the page script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub state: String,
    #[serde(flatten)]
    pub position: Coordinate,
    pub radius: u32,
    pub fill_color: &'static str,
    pub popup: String,
}

impl MarkerSpec {
    fn new(agg: &StateAggregate, position: Coordinate) -> Self {
        let tier = Tier::classify(agg.total);
        Self {
            state: agg.state.clone(),
            position,
            radius: tier.radius(),
            fill_color: tier.color(),
            popup: popup_html(agg),
        }
    }
}

/// Rendered map, ready to be written out.
#[derive(Debug, Clone)]
pub struct MapDocument {
    html: String,
    markers: Vec<MarkerSpec>,
    skipped: Vec<String>,
}

impl MapDocument {
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }

    /// States left off the map for lack of a reference coordinate.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Write the page to `path`.
    ///
    /// The page goes to a sibling `.tmp` file first and is renamed into
    /// place, so a failed write never leaves a partial map behind.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let tmp = temp_path(path);

        let written = fs::write(&tmp, &self.html).and_then(|()| fs::rename(&tmp, path));
        if let Err(source) = written {
            let _ = fs::remove_file(&tmp);
            return Err(RenderError::Io {
                path: path.to_path_buf(),
                source,
            });
        }

        info!(
            "Saved map with {} markers to {}",
            self.markers.len(),
            path.display()
        );
        Ok(())
    }
}

/// Builds the marker map for a set of state aggregates.
pub struct MapRenderer;

impl MapRenderer {
    /// Render markers in the order given. States without a reference
    /// coordinate are skipped.
    pub fn render(aggregates: &[StateAggregate]) -> Result<MapDocument, RenderError> {
        let mut markers = Vec::with_capacity(aggregates.len());
        let mut skipped = Vec::new();

        for agg in aggregates {
            match coordinate_for(&agg.state) {
                Some(position) => markers.push(MarkerSpec::new(agg, position)),
                None => {
                    debug!("No coordinate for {:?}, leaving it off the map", agg.state);
                    skipped.push(agg.state.clone());
                }
            }
        }

        let html = Self::build_html(&markers)?;
        Ok(MapDocument {
            html,
            markers,
            skipped,
        })
    }

    fn build_html(markers: &[MarkerSpec]) -> Result<String, RenderError> {
        let payload = script_safe_json(&serde_json::to_string(markers)?);

        let mut html = String::with_capacity(HTML_HEAD.len() + payload.len() + 2048);
        html.push_str(HTML_HEAD);
        html.push_str(&legend_html());
        html.push_str("\n<script>\n");
        let _ = writeln!(
            html,
            "const map = L.map('map').setView([{}, {}], {});",
            MAP_CENTER.lat, MAP_CENTER.lon, ZOOM_START
        );
        html.push_str(TILE_LAYER);
        let _ = writeln!(html, "const popupMaxWidth = {};", POPUP_MAX_WIDTH);
        let _ = writeln!(html, "const markers = {};", payload);
        html.push_str(MARKER_LOOP);
        html.push_str(HTML_FOOTER);

        Ok(html)
    }
}

/// Keep embedded JSON from closing the surrounding `<script>` element.
fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn aggregates() -> Vec<StateAggregate> {
        vec![
            StateAggregate::new("California", 26_900_000, 13_400_000, 13_500_000),
            StateAggregate::new("Ohio", 8_000_000, 3_900_000, 4_100_000),
            StateAggregate::new("Guam", 3_000_000, 1_500_000, 1_500_000),
            StateAggregate::new("Utah", 2_100_000, 1_060_000, 1_040_000),
            StateAggregate::new("Wyoming", 430_000, 220_000, 210_000),
        ]
    }

    #[test]
    fn test_render_skips_states_without_coordinates() {
        let doc = MapRenderer::render(&aggregates()).unwrap();

        let states: Vec<&str> = doc.markers().iter().map(|m| m.state.as_str()).collect();
        assert_eq!(states, vec!["California", "Ohio", "Utah", "Wyoming"]);
        assert_eq!(doc.skipped(), ["Guam".to_string()]);
    }

    #[test]
    fn test_render_styles_markers_by_tier() {
        let doc = MapRenderer::render(&aggregates()).unwrap();
        let styles: Vec<(u32, &str)> = doc
            .markers()
            .iter()
            .map(|m| (m.radius, m.fill_color))
            .collect();

        assert_eq!(
            styles,
            vec![(15, "red"), (12, "orange"), (10, "yellow"), (8, "blue")]
        );
        assert_eq!(
            doc.markers()[3].position,
            Coordinate::new(42.7475, -107.2085)
        );
    }

    #[test]
    fn test_document_contains_map_legend_and_markers() {
        let doc = MapRenderer::render(&aggregates()).unwrap();
        let html = doc.html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("leaflet.js"));
        assert!(html.contains("setView([39.8283, -98.5795], 4)"));
        assert!(html.contains("Driver Count Legend"));
        assert!(html.contains("\"fillColor\":\"red\""));
        assert!(html.contains("\"lat\":36.116203"));
        assert!(html.contains("const popupMaxWidth = 300;"));
        assert!(html.contains("Total Drivers: 26,900,000"));
        assert!(!html.contains("Guam"));
    }

    #[test]
    fn test_render_without_states_has_no_markers() {
        let doc = MapRenderer::render(&[]).unwrap();
        assert!(doc.markers().is_empty());
        assert!(doc.html().contains("const markers = [];"));
        assert!(doc.html().contains("Driver Count Legend"));
    }

    #[test]
    fn test_embedded_json_cannot_close_script() {
        let safe = script_safe_json(r#"{"popup":"<b>x</b></script>"}"#);
        assert!(!safe.contains("</"));
        assert!(safe.contains(r"<\/script>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = MapRenderer::render(&aggregates()).unwrap();
        let second = MapRenderer::render(&aggregates()).unwrap();
        assert_eq!(first.html(), second.html());
    }

    #[test]
    fn test_save_writes_file_without_leftover_temp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("map.html");
        let doc = MapRenderer::render(&aggregates()).unwrap();

        doc.save(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), doc.html());
        assert!(!dir.path().join("map.html.tmp").exists());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("map.html");
        let doc = MapRenderer::render(&aggregates()).unwrap();

        let err = doc.save(&path).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
        assert!(!path.exists());
    }
}
