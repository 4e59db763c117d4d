//! Reference coordinates for marker placement.
//!
//! One point per state (50 states + District of Columbia), keyed by the full
//! state name as it appears in the driver dataset.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Geographic centre of the contiguous United States.
pub const MAP_CENTER: Coordinate = Coordinate::new(39.8283, -98.5795);

static STATE_COORDINATES: LazyLock<BTreeMap<&'static str, Coordinate>> = LazyLock::new(|| {
    BTreeMap::from([
        ("Alabama", Coordinate::new(32.806671, -86.791130)),
        ("Alaska", Coordinate::new(61.370716, -152.404419)),
        ("Arizona", Coordinate::new(33.729759, -111.431221)),
        ("Arkansas", Coordinate::new(34.969704, -92.373123)),
        ("California", Coordinate::new(36.116203, -119.681564)),
        ("Colorado", Coordinate::new(39.059811, -105.311104)),
        ("Connecticut", Coordinate::new(41.767, -72.677)),
        ("Delaware", Coordinate::new(39.161921, -75.526755)),
        ("District of Columbia", Coordinate::new(38.9047, -77.0164)),
        ("Florida", Coordinate::new(27.766279, -81.686783)),
        ("Georgia", Coordinate::new(33.76, -84.39)),
        ("Hawaii", Coordinate::new(21.30895, -157.826182)),
        ("Idaho", Coordinate::new(44.240459, -114.478828)),
        ("Illinois", Coordinate::new(40.349457, -88.986137)),
        ("Indiana", Coordinate::new(39.790942, -86.147685)),
        ("Iowa", Coordinate::new(42.011539, -93.210526)),
        ("Kansas", Coordinate::new(38.526600, -96.726486)),
        ("Kentucky", Coordinate::new(37.66814, -84.86311)),
        ("Louisiana", Coordinate::new(31.169546, -91.867805)),
        ("Maine", Coordinate::new(44.323535, -69.765261)),
        ("Maryland", Coordinate::new(39.063946, -76.802101)),
        ("Massachusetts", Coordinate::new(42.230171, -71.530106)),
        ("Michigan", Coordinate::new(43.326618, -84.536095)),
        ("Minnesota", Coordinate::new(45.7326, -93.9196)),
        ("Mississippi", Coordinate::new(32.320, -90.207)),
        ("Missouri", Coordinate::new(38.572954, -92.189283)),
        ("Montana", Coordinate::new(47.052952, -110.454353)),
        ("Nebraska", Coordinate::new(41.12537, -98.268082)),
        ("Nevada", Coordinate::new(39.161921, -117.055374)),
        ("New Hampshire", Coordinate::new(43.452492, -71.563896)),
        ("New Jersey", Coordinate::new(40.221741, -74.756138)),
        ("New Mexico", Coordinate::new(34.97273, -105.032363)),
        ("New York", Coordinate::new(42.659829, -75.615)),
        ("North Carolina", Coordinate::new(35.771, -78.638)),
        ("North Dakota", Coordinate::new(47.555513, -101.002012)),
        ("Ohio", Coordinate::new(40.367474, -82.996216)),
        ("Oklahoma", Coordinate::new(35.482309, -97.534994)),
        ("Oregon", Coordinate::new(44.931109, -123.029159)),
        ("Pennsylvania", Coordinate::new(40.269789, -76.875613)),
        ("Rhode Island", Coordinate::new(41.82355, -71.422132)),
        ("South Carolina", Coordinate::new(33.836082, -81.163727)),
        ("South Dakota", Coordinate::new(44.299782, -99.438828)),
        ("Tennessee", Coordinate::new(35.771, -86.25)),
        ("Texas", Coordinate::new(31.106, -97.6475)),
        ("Utah", Coordinate::new(39.161921, -111.892622)),
        ("Vermont", Coordinate::new(44.26639, -72.580536)),
        ("Virginia", Coordinate::new(37.54, -78.46)),
        ("Washington", Coordinate::new(47.042418, -122.893077)),
        ("West Virginia", Coordinate::new(38.349497, -81.633294)),
        ("Wisconsin", Coordinate::new(44.268543, -89.616508)),
        ("Wyoming", Coordinate::new(42.7475, -107.2085)),
    ])
});

/// Look up the marker position for a state by its full name.
pub fn coordinate_for(state: &str) -> Option<Coordinate> {
    STATE_COORDINATES.get(state).copied()
}
