use std::ops::Range;

/// Smallest and largest element of the iterator, or None when it is empty.
pub fn min_and_max<'a, I, T>(mut s: I) -> Option<(T, T)>
where
    I: Iterator<Item = &'a T>,
    T: 'a + std::cmp::PartialOrd + Clone,
{
    let (mut min, mut max) = match s.next() {
        Some(v) => (v, v),
        None => return None,
    };
    for es in s {
        if es > max {
            max = es
        } else if es < min {
            min = es
        }
    }
    Some((min.clone(), max.clone()))
}

/// Range for a chart axis covering all the values.
/// The chart runs on f64 so that the whole i64 domain fits without overflow.
/// The plotters ranges need a non-zero span,
/// so an empty slice gets 0..1 and a constant one is widened on each side
/// by a tenth of its magnitude, at least one unit.
pub fn axis_range(v: &[i64]) -> Range<f64> {
    match min_and_max(v.iter()) {
        None => 0.0..1.0,
        Some((min, max)) => {
            let (min, max) = (min as f64, max as f64);
            if min < max {
                min..max
            } else {
                let pad = (min.abs() / 10.0).max(1.0);
                (min - pad)..(max + pad)
            }
        }
    }
}

/// Add a tenth of the span on both sides, at least one unit,
/// so the line does not stick to the frame.
pub fn pad_range(r: Range<f64>) -> Range<f64> {
    let pad = ((r.end - r.start) / 10.0).max(1.0);
    (r.start - pad)..(r.end + pad)
}
