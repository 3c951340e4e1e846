/// Geometry for one ring, index-aligned with the metric list.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RingSpec {
    pub radius: f64,
    pub stroke_width: f64,
}

/// Concentric placement: ring `i` sits at `max_radius - i*(stroke_width+gap)`,
/// outermost first. Total on purpose — non-positive radii are still returned
/// and the renderer decides whether to skip them.
pub fn layout_rings(count: usize, max_radius: f64, stroke_width: f64, gap: f64) -> Vec<RingSpec> {
    (0..count)
        .map(|i| RingSpec {
            radius: max_radius - (i as f64) * (stroke_width + gap),
            stroke_width,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_is_exact_and_strictly_decreasing() {
        let specs = layout_rings(5, 180.0, 22.0, 14.0);
        assert_eq!(specs.len(), 5);
        assert_eq!(specs[0].radius, 180.0);
        for pair in specs.windows(2) {
            assert!(pair[1].radius < pair[0].radius);
            assert!((pair[0].radius - pair[1].radius - 36.0).abs() < 1e-12);
        }
    }

    #[test]
    fn reference_radii() {
        let specs = layout_rings(3, 180.0, 22.0, 14.0);
        let radii: Vec<f64> = specs.iter().map(|s| s.radius).collect();
        assert_eq!(radii, vec![180.0, 144.0, 108.0]);
    }

    #[test]
    fn overfull_layouts_still_return_specs() {
        let specs = layout_rings(8, 60.0, 22.0, 14.0);
        assert_eq!(specs.len(), 8);
        assert!(specs.last().unwrap().radius < 0.0);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(layout_rings(0, 180.0, 22.0, 14.0).is_empty());
    }
}
