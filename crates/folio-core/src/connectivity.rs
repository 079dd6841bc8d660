use glam::Vec3;

/// Unordered pair of item indices, always stored with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    pub a: usize,
    pub b: usize,
}

/// Line segment endpoints laid out for direct upload as a line list.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Segment {
    pub start: [f32; 3],
    pub end: [f32; 3],
}

/// All pairs closer than `threshold`. Quadratic in the item count, which is
/// fine for a handful of tiles; a spatial index would be needed past that.
pub fn derive_links(positions: &[Vec3], threshold: f32) -> Vec<Link> {
    let threshold_sq = threshold * threshold;
    let mut links = Vec::new();
    for (a, pa) in positions.iter().enumerate() {
        for (offset, pb) in positions[a + 1..].iter().enumerate() {
            if pa.distance_squared(*pb) < threshold_sq {
                links.push(Link {
                    a,
                    b: a + 1 + offset,
                });
            }
        }
    }
    links
}

pub fn link_segments(positions: &[Vec3], links: &[Link]) -> Vec<Segment> {
    links
        .iter()
        .filter_map(|l| {
            let start = positions.get(l.a)?;
            let end = positions.get(l.b)?;
            Some(Segment {
                start: start.to_array(),
                end: end.to_array(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_close_pairs_link() {
        // |p0 p1| = 5, |p1 p2| = 20, |p0 p2| = 25
        let positions = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(25.0, 0.0, 0.0),
        ];
        let links = derive_links(&positions, 16.0);
        assert_eq!(links, vec![Link { a: 0, b: 1 }]);
    }

    #[test]
    fn threshold_is_exclusive() {
        let positions = [Vec3::ZERO, Vec3::new(16.0, 0.0, 0.0)];
        assert!(derive_links(&positions, 16.0).is_empty());
    }

    #[test]
    fn degenerate_inputs_have_no_links() {
        assert!(derive_links(&[], 16.0).is_empty());
        assert!(derive_links(&[Vec3::ONE], 16.0).is_empty());
    }

    #[test]
    fn segments_follow_links() {
        let positions = [Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0)];
        let links = derive_links(&positions, 16.0);
        let segs = link_segments(&positions, &links);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].start, [0.0, 0.0, 0.0]);
        assert_eq!(segs[0].end, [1.0, 2.0, 3.0]);
    }
}
