use crate::tag_normalizer::normalize_tag;
use crate::timezone::parse_utc_offset;
use crate::Profile;

/// Hub cities recognized inside free-text locations. First match wins, so
/// more specific names must precede substrings of themselves if any are
/// added ("san francisco bay area" resolves via "san francisco").
const KEY_CITIES: &[&str] = &[
    "singapore",
    "san francisco",
    "new york",
    "london",
    "tokyo",
    "berlin",
    "paris",
    "sydney",
    "toronto",
    "bangalore",
    "dubai",
    "amsterdam",
    "seoul",
    "hong kong",
    "austin",
    "tel aviv",
    "jakarta",
    "nairobi",
    "stockholm",
    "lisbon",
];

#[derive(Debug, Clone)]
pub struct LocationEvaluation {
    /// 0–100.
    pub score: f64,
    pub details: String,
    /// True when no signal was available and the default applied.
    pub neutral: bool,
}

fn key_location(location: &str) -> Option<&'static str> {
    let folded = normalize_tag(location);
    KEY_CITIES.iter().copied().find(|city| folded.contains(city))
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn mentions_remote(location: Option<&str>) -> bool {
    nonempty(location)
        .map(|v| normalize_tag(v).contains("remote"))
        .unwrap_or(false)
}

/// Single source of truth for the location factor. Checks run in priority
/// order; the first one that applies decides the score.
pub fn evaluate_location(a: &Profile, b: &Profile) -> LocationEvaluation {
    let loc_a = nonempty(a.location.as_deref());
    let loc_b = nonempty(b.location.as_deref());

    // 1. Literal match on the raw location strings.
    if let (Some(la), Some(lb)) = (loc_a, loc_b) {
        if normalize_tag(la) == normalize_tag(lb) {
            return LocationEvaluation {
                score: 100.0,
                details: format!("same location: {la}"),
                neutral: false,
            };
        }

        // 2. Both resolve to the same hub city ("SF" never will, but
        //    "San Francisco Bay Area" and "san francisco, ca" do).
        if let (Some(city_a), Some(city_b)) = (key_location(la), key_location(lb)) {
            if city_a == city_b {
                return LocationEvaluation {
                    score: 100.0,
                    details: format!("same hub city: {city_a}"),
                    neutral: false,
                };
            }
        }
    }

    // 3. Identical timezone labels are as good as co-located, minus a notch.
    let tz_a = nonempty(a.timezone.as_deref());
    let tz_b = nonempty(b.timezone.as_deref());
    if let (Some(ta), Some(tb)) = (tz_a, tz_b) {
        if ta == tb {
            return LocationEvaluation {
                score: 90.0,
                details: format!("same timezone: {ta}"),
                neutral: false,
            };
        }

        // 4. Parseable UTC offsets: score by distance.
        if let (Some(offset_a), Some(offset_b)) = (parse_utc_offset(ta), parse_utc_offset(tb)) {
            let diff = (offset_a - offset_b).abs();
            let score = if diff == 0.0 {
                100.0
            } else if diff <= 2.0 {
                80.0
            } else if diff <= 4.0 {
                60.0
            } else if diff <= 8.0 {
                40.0
            } else {
                20.0
            };

            return LocationEvaluation {
                score,
                details: format!("timezone offset gap {diff:.1}h ({ta} vs {tb})"),
                neutral: false,
            };
        }
    }

    // 5. A remote-friendly side keeps the pairing workable.
    if mentions_remote(loc_a) || mentions_remote(loc_b) {
        return LocationEvaluation {
            score: 70.0,
            details: "remote-friendly location".into(),
            neutral: false,
        };
    }

    // 6. Nothing comparable on either side.
    LocationEvaluation {
        score: 50.0,
        details: "no comparable location signal, neutral score".into(),
        neutral: true,
    }
}
