//! Encoded polyline algorithm at 5-decimal precision.
//!
//! Each point is stored as the signed delta from the previous one, scaled by
//! 1e5, zig-zag folded, and split into 5-bit chunks. Every chunk is written
//! as one ASCII byte offset by 63, with 0x20 set on all but the last chunk of
//! a value.

use super::geocode::Coordinate;

const PRECISION: f64 = 1e5;
const OFFSET: u8 = 63;
const CHUNK_MASK: u64 = 0x1f;
const CONTINUATION: u64 = 0x20;
// Past this the next chunk would no longer fit the accumulator.
const MAX_SHIFT: u32 = 55;

/// Decodes an encoded polyline into its points.
///
/// Returns `None` for an empty string and for anything that is not a clean
/// sequence of complete latitude/longitude pairs within coordinate range.
pub fn decode(encoded: &str) -> Option<Vec<Coordinate>> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;
    let mut points = Vec::new();

    while index < bytes.len() {
        let dlat = read_value(bytes, &mut index)?;
        let dlon = read_value(bytes, &mut index)?;
        lat = lat.checked_add(dlat)?;
        lon = lon.checked_add(dlon)?;
        let point = Coordinate::new(lat as f64 / PRECISION, lon as f64 / PRECISION).ok()?;
        points.push(point);
    }

    if points.is_empty() {
        None
    } else {
        Some(points)
    }
}

/// Encodes points with the same scheme `decode` reads.
pub fn encode(points: &[Coordinate]) -> String {
    let mut out = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lon: i64 = 0;

    for point in points {
        let lat = scale(point.latitude());
        let lon = scale(point.longitude());
        write_value(lat - prev_lat, &mut out);
        write_value(lon - prev_lon, &mut out);
        prev_lat = lat;
        prev_lon = lon;
    }

    out
}

fn scale(degrees: f64) -> i64 {
    (degrees * PRECISION).round() as i64
}

fn read_value(bytes: &[u8], index: &mut usize) -> Option<i64> {
    let mut folded: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = *bytes.get(*index)?;
        *index += 1;
        if !(OFFSET..=126).contains(&byte) || shift > MAX_SHIFT {
            return None;
        }
        let chunk = u64::from(byte - OFFSET);
        folded |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        if chunk & CONTINUATION == 0 {
            break;
        }
    }

    Some((folded >> 1) as i64 ^ -((folded & 1) as i64))
}

fn write_value(delta: i64, out: &mut String) {
    let mut folded = ((delta << 1) ^ (delta >> 63)) as u64;
    while folded >= CONTINUATION {
        out.push(char::from((CONTINUATION | (folded & CHUNK_MASK)) as u8 + OFFSET));
        folded >>= 5;
    }
    out.push(char::from(folded as u8 + OFFSET));
}
